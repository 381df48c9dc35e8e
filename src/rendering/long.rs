//! Long listing: permissions, size, owner, group, date, glyph and name.
//!
//! Two passes. The first formats every column as plain text and records the
//! widest value per column; the second pads against those widths and only
//! then applies color, so escape codes never skew the alignment.

use super::colors::Palette;
use super::format::{
    display_width, padding, paint_permissions, permission_string, size_string, summary,
    time_columns,
};
use super::glyphs::resolve_glyph;
use crate::config::Config;
use crate::discovery::OwnerLookup;
use crate::types::Entry;

/// Plain-text columns of one row.
struct Row {
    permissions: String,
    size: String,
    owner: String,
    group: String,
    month: String,
    day: String,
    time: String,
}

#[derive(Default)]
struct Widths {
    permissions: usize,
    size: usize,
    owner: usize,
    group: usize,
    month: usize,
    day: usize,
    time: usize,
}

impl Widths {
    fn measure(rows: &[Row]) -> Self {
        rows.iter().fold(Self::default(), |w, r| Self {
            permissions: w.permissions.max(display_width(&r.permissions)),
            size: w.size.max(display_width(&r.size)),
            owner: w.owner.max(display_width(&r.owner)),
            group: w.group.max(display_width(&r.group)),
            month: w.month.max(display_width(&r.month)),
            day: w.day.max(display_width(&r.day)),
            time: w.time.max(display_width(&r.time)),
        })
    }
}

pub struct LongRenderer<'a> {
    config: &'a Config,
    palette: Palette,
    owners: &'a dyn OwnerLookup,
}

impl<'a> LongRenderer<'a> {
    pub fn new(config: &'a Config, palette: Palette, owners: &'a dyn OwnerLookup) -> Self {
        Self {
            config,
            palette,
            owners,
        }
    }

    pub fn render(&self, entries: &[Entry]) -> String {
        let rows: Vec<Row> = entries.iter().map(|e| self.row(e)).collect();
        let widths = Widths::measure(&rows);

        let mut output = String::new();
        for (entry, row) in entries.iter().zip(&rows) {
            output.push_str(&self.line(entry, row, &widths));
            output.push('\n');
        }

        if self.config.show_summary {
            output.push_str(&summary(entries, &self.palette));
        }

        output
    }

    fn row(&self, entry: &Entry) -> Row {
        let (month, day, time) = time_columns(entry);
        Row {
            permissions: permission_string(entry),
            size: size_string(entry.size, self.config.human_readable),
            owner: self.owners.user_or_id(entry.uid),
            group: self.owners.group_or_id(entry.gid),
            month,
            day,
            time,
        }
    }

    fn line(&self, entry: &Entry, row: &Row, w: &Widths) -> String {
        let left = |s: &str, width: usize| format!("{s}{}", padding(s, width));

        let mut line = format!(
            "{}{} {}{} {} {} {} {} {} ",
            paint_permissions(&row.permissions, &self.palette),
            padding(&row.permissions, w.permissions),
            padding(&row.size, w.size),
            row.size,
            left(&row.owner, w.owner),
            left(&row.group, w.group),
            left(&row.month, w.month),
            left(&row.day, w.day),
            left(&row.time, w.time),
        );

        line.push_str(&resolve_glyph(entry).paint(&self.palette));
        if entry.is_dir() {
            line.push_str(&self.palette.directory(&entry.name));
        } else {
            line.push_str(&entry.name);
        }

        if let Some(link) = &entry.link {
            line.push_str(&format!(
                " {} {}",
                self.palette.dim("==>"),
                link.path.display()
            ));
        }

        line
    }
}
