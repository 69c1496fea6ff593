//! Test-report loading.
//!
//! Parses a JUnit/XUnit-style XML document into a `ResultMap`. Every
//! `<testcase>` contributes one `OutcomeRecord`; a testcase with a
//! `<failure>` or `<error>` child is a FAIL, one with a `<skipped>` child
//! is a SKIP, anything else is a PASS. More than one child of the same
//! kind violates the report format and aborts the run.

use crate::error::ReportError;
use crate::types::{OutcomeRecord, ReportStatus, ResultMap, TestResult};
use log::debug;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Load and parse the test-report document at `path`.
pub fn load_results(path: &Path) -> Result<ResultMap, ReportError> {
    let document = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let results = parse_results(&document)?;
    debug!("loaded {} test results from {}", results.len(), path.display());
    Ok(results)
}

/// Parse a test-report document into a map keyed by `"<class>.<name>"`.
pub fn parse_results(document: &str) -> Result<ResultMap, ReportError> {
    let mut reader = Reader::from_str(document);
    let mut results = ResultMap::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"testcase" => {
                let record = read_testcase(&mut reader, &e, false)?;
                results.insert(record.name.clone(), record);
            }
            Event::Empty(e) if e.name().as_ref() == b"testcase" => {
                let record = read_testcase(&mut reader, &e, true)?;
                results.insert(record.name.clone(), record);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(results)
}

/// Read one testcase element, consuming events through its closing tag.
fn read_testcase(
    reader: &mut Reader<&[u8]>,
    tag: &BytesStart<'_>,
    empty: bool,
) -> Result<OutcomeRecord, ReportError> {
    let classname = required_attr(tag, "classname")?;
    let testname = required_attr(tag, "name")?;
    let time_str = required_attr(tag, "time")?;
    let name = format!("{}.{}", classname, testname);

    let time: f64 = time_str.parse().map_err(|_| {
        ReportError::MalformedReport(format!("testcase {name} has unparseable time {time_str:?}"))
    })?;

    let mut failure_count = 0usize;
    let mut error_count = 0usize;
    let mut skipped_count = 0usize;
    let mut failure_message: Option<String> = None;
    let mut error_message: Option<String> = None;

    if !empty {
        loop {
            match reader.read_event()? {
                Event::Start(child) => {
                    record_child(
                        &name,
                        &child,
                        &mut failure_count,
                        &mut error_count,
                        &mut skipped_count,
                        &mut failure_message,
                        &mut error_message,
                    )?;
                    // Skip the child's body (stack traces, captured output).
                    reader.read_to_end(child.name())?;
                }
                Event::Empty(child) => {
                    record_child(
                        &name,
                        &child,
                        &mut failure_count,
                        &mut error_count,
                        &mut skipped_count,
                        &mut failure_message,
                        &mut error_message,
                    )?;
                }
                Event::End(end) if end.name().as_ref() == b"testcase" => break,
                Event::Eof => {
                    return Err(ReportError::MalformedReport(format!(
                        "unexpected end of document inside testcase {name}"
                    )));
                }
                _ => {}
            }
        }
    }

    if failure_count > 1 || error_count > 1 || skipped_count > 1 {
        return Err(ReportError::MalformedReport(format!(
            "testcase {name} has {failure_count} failure, {error_count} error and \
             {skipped_count} skipped children; at most one of each is allowed"
        )));
    }

    // Precedence mirrors the report format: error messages win over
    // failure messages, and a skipped marker overrides the result.
    let mut result = TestResult::Pass;
    let mut message = None;
    if failure_count == 1 {
        result = TestResult::Fail;
        message = failure_message;
    }
    if error_count == 1 {
        result = TestResult::Fail;
        message = error_message;
    }
    if skipped_count == 1 {
        result = TestResult::Skip;
    }

    Ok(OutcomeRecord { name, result, message, time, report: ReportStatus::Pass })
}

fn record_child(
    testcase: &str,
    child: &BytesStart<'_>,
    failure_count: &mut usize,
    error_count: &mut usize,
    skipped_count: &mut usize,
    failure_message: &mut Option<String>,
    error_message: &mut Option<String>,
) -> Result<(), ReportError> {
    match child.name().as_ref() {
        b"failure" => {
            *failure_count += 1;
            *failure_message = extract_message(&required_attr_in(child, "message", testcase)?);
        }
        b"error" => {
            *error_count += 1;
            *error_message = extract_message(&required_attr_in(child, "message", testcase)?);
        }
        b"skipped" => {
            *skipped_count += 1;
        }
        _ => {}
    }
    Ok(())
}

/// Reduce a failure message to its first line, or to a 20-character
/// excerpt followed by `...` when it has no line break. Empty messages
/// yield nothing.
fn extract_message(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    match text.find('\n') {
        Some(end) => Some(text[..end].to_string()),
        None => Some(format!("{}...", text.chars().take(20).collect::<String>())),
    }
}

fn required_attr(tag: &BytesStart<'_>, name: &str) -> Result<String, ReportError> {
    attr_value(tag, name)?.ok_or_else(|| {
        ReportError::MalformedReport(format!(
            "<{}> element is missing its {name} attribute",
            String::from_utf8_lossy(tag.name().as_ref())
        ))
    })
}

fn required_attr_in(tag: &BytesStart<'_>, name: &str, testcase: &str) -> Result<String, ReportError> {
    attr_value(tag, name)?.ok_or_else(|| {
        ReportError::MalformedReport(format!(
            "<{}> under testcase {testcase} is missing its {name} attribute",
            String::from_utf8_lossy(tag.name().as_ref())
        ))
    })
}

fn attr_value(tag: &BytesStart<'_>, name: &str) -> Result<Option<String>, ReportError> {
    for attr in tag.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
