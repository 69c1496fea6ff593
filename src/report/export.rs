//! CSV export: one row per test with its raw and reconciled status.

use crate::types::ResultMap;
use std::borrow::Cow;
use std::io::{self, Write};

/// Write the per-test CSV to `writer`, header first, rows in map order.
pub fn csv_report<W: Write>(results: &ResultMap, writer: &mut W) -> io::Result<()> {
    write!(writer, "name,result,report,message\r\n")?;
    for record in results.values() {
        write!(
            writer,
            "{},{},{},{}\r\n",
            csv_field(&record.name),
            csv_field(record.result.as_str()),
            csv_field(record.report.as_str()),
            csv_field(record.message.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
