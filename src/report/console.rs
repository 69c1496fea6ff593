//! Detailed per-category breakdown for the console.

use super::rows::DetailedTable;
use super::table::{Align, write_table};
use std::io::{self, Write};

const HEADERS: [&str; 7] =
    ["Category", "Pass", "New Failure", "Known Failure", "Skip", "Pass %", "Tests Passed"];

/// Render the aggregation table without the Notes column; footnote markup
/// is only meaningful in wiki output.
pub fn detailed_report_console<W: Write>(table: &DetailedTable, writer: &mut W) -> io::Result<()> {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len() + 1);
    for row in table.rows.iter().chain([&table.total]) {
        rows.push(vec![
            row.label.clone(),
            row.counts[0].to_string(),
            row.counts[1].to_string(),
            row.counts[2].to_string(),
            row.counts[3].to_string(),
            row.pass_percent(),
            row.tests_passed(),
        ]);
    }

    let aligns = [
        Align::Left,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
        Align::Right,
    ];
    write_table(writer, Some(&HEADERS), &rows, &aligns)
}
