//! Console summary: status counts, common failures, slow tests and the
//! list of new failures.

use super::table::{Align, write_table};
use crate::types::{REPORT_STATUSES, ReportStatus, ResultMap};
use std::collections::HashMap;
use std::io::{self, Write};

/// Number of entries shown in the "most common" and "longest-running"
/// sections.
const TOP_N: usize = 10;

/// Print the summary report. The status-count table is suppressed in
/// detailed mode because the detailed table already shows the tallies.
pub fn summary_report<W: Write>(results: &ResultMap, detailed: bool, writer: &mut W) -> io::Result<()> {
    if !detailed {
        let rows: Vec<Vec<String>> = REPORT_STATUSES
            .iter()
            .map(|status| {
                let count = results.values().filter(|r| r.report == *status).count();
                vec![status.as_str().to_string(), count.to_string()]
            })
            .collect();
        write_table(writer, None, &rows, &[Align::Left, Align::Right])?;
        writeln!(writer, "TOTAL TESTS:   {}", results.len())?;
        writeln!(writer)?;
    }

    writeln!(writer, "10 most common failures:")?;
    let rows: Vec<Vec<String>> = most_common_messages(results, TOP_N)
        .into_iter()
        .map(|(message, count)| vec![message, count.to_string()])
        .collect();
    write_table(writer, None, &rows, &[Align::Left, Align::Right])?;
    writeln!(writer)?;

    writeln!(writer, "10 longest-running tests:")?;
    let rows: Vec<Vec<String>> = longest_running(results, TOP_N)
        .into_iter()
        .map(|(name, time)| vec![name, format!("{time}")])
        .collect();
    write_table(writer, None, &rows, &[Align::Left, Align::Right])?;
    writeln!(writer)?;

    writeln!(writer, "NEW_FAILURE:")?;
    for record in results.values() {
        if record.report == ReportStatus::NewFailure {
            writeln!(writer, "{}", record.name)?;
        }
    }

    Ok(())
}

/// Distinct failure messages with their occurrence counts, most frequent
/// first. Ties break alphabetically so output is stable.
fn most_common_messages(results: &ResultMap, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in results.values() {
        if let Some(message) = &record.message {
            *counts.entry(message).or_default() += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> =
        counts.into_iter().map(|(message, count)| (message.to_string(), count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

/// Slowest tests, longest first.
fn longest_running(results: &ResultMap, limit: usize) -> Vec<(String, f64)> {
    let mut timed: Vec<(String, f64)> =
        results.values().map(|r| (r.name.clone(), r.time)).collect();
    timed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    timed.truncate(limit);
    timed
}
