//! Detailed breakdown rendered as a mediawiki table.

use super::rows::DetailedTable;
use std::io::{self, Write};

const TITLE: &str =
    "== Amazon S3 REST API Compatability using [https://github.com/ceph/s3-tests Ceph s3-tests] ==";

/// Render the aggregation table for pasting into a wiki page: title line,
/// Category / Pass % / Tests Passed / Notes columns, then the references
/// block the footnotes point at.
pub fn detailed_report_wiki<W: Write>(table: &DetailedTable, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{{| class=\"wikitable\"")?;
    writeln!(writer, "|-")?;
    writeln!(writer, "! Category !! Pass % !! Tests Passed !! Notes")?;

    for row in table.rows.iter().chain([&table.total]) {
        writeln!(writer, "|-")?;
        writeln!(
            writer,
            "| {} || {} || {} || {}",
            row.label,
            row.pass_percent(),
            row.tests_passed(),
            row.notes
        )?;
    }

    writeln!(writer, "|}}")?;
    writeln!(writer, "<references />")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::rows::AggRow;

    #[test]
    fn test_wiki_layout() {
        let table = DetailedTable {
            rows: vec![AggRow {
                label: "get bucket".to_string(),
                counts: [3, 1, 0, 0],
                notes: "<ref name=\"BUG-7\">broken copy</ref>".to_string(),
            }],
            total: AggRow { label: "Total".to_string(), counts: [3, 1, 0, 0], notes: String::new() },
        };

        let mut buf = Vec::new();
        detailed_report_wiki(&table, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();

        assert!(out.starts_with("== Amazon S3 REST API Compatability"));
        assert!(out.contains("{| class=\"wikitable\""));
        assert!(out.contains("! Category !! Pass % !! Tests Passed !! Notes"));
        assert!(out.contains("| get bucket || 75.0% || 3/4 || <ref name=\"BUG-7\">broken copy</ref>"));
        assert!(out.contains("| Total || 75.0% || 3/4 ||"));
        assert!(out.trim_end().ends_with("<references />"));
        // Raw counts never appear as their own columns in wiki output.
        assert!(!out.contains("New Failure"));
    }
}
