//! Plain-text column alignment for console tables.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Write `rows` as aligned columns separated by two spaces. With headers,
/// a dashed rule follows the header row. Column widths come from the
/// widest cell, measured in display width so non-ASCII labels line up.
pub fn write_table<W: Write>(
    writer: &mut W,
    headers: Option<&[&str]>,
    rows: &[Vec<String>],
    aligns: &[Align],
) -> io::Result<()> {
    let columns = headers
        .map(|h| h.len())
        .or_else(|| rows.iter().map(|r| r.len()).max())
        .unwrap_or(0);
    if columns == 0 {
        return Ok(());
    }

    let mut widths = vec![0usize; columns];
    if let Some(headers) = headers {
        for (width, header) in widths.iter_mut().zip(headers) {
            *width = header.width();
        }
    }
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    if let Some(headers) = headers {
        let cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        write_row(writer, &cells, &widths, aligns)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(writer, &rule, &widths, aligns)?;
    }

    for row in rows {
        write_row(writer, row, &widths, aligns)?;
    }

    Ok(())
}

fn write_row<W: Write>(
    writer: &mut W,
    cells: &[String],
    widths: &[usize],
    aligns: &[Align],
) -> io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        let align = aligns.get(i).copied().unwrap_or(Align::Left);
        let padding = width.saturating_sub(cell.width());
        match align {
            Align::Left => {
                line.push_str(cell);
                line.push_str(&" ".repeat(padding));
            }
            Align::Right => {
                line.push_str(&" ".repeat(padding));
                line.push_str(cell);
            }
        }
    }
    writeln!(writer, "{}", line.trim_end())
}
