//! Core data structures for test outcomes and their classification.

use indexmap::IndexMap;

/// Classified outcomes, keyed by `"<classname>.<testname>"` in the order
/// the testcases appear in the report document.
pub type ResultMap = IndexMap<String, OutcomeRecord>;

/// Raw outcome of a single testcase as recorded in the report document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

impl TestResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestResult::Pass => "PASS",
            TestResult::Fail => "FAIL",
            TestResult::Skip => "SKIP",
        }
    }
}

/// Outcome reconciled against the known-failure registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    Pass,
    NewFailure,
    KnownFailure,
    Skip,
}

/// Fixed column order used by every aggregated report.
pub const REPORT_STATUSES: [ReportStatus; 4] = [
    ReportStatus::Pass,
    ReportStatus::NewFailure,
    ReportStatus::KnownFailure,
    ReportStatus::Skip,
];

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pass => "PASS",
            ReportStatus::NewFailure => "NEW_FAILURE",
            ReportStatus::KnownFailure => "KNOWN_FAILURE",
            ReportStatus::Skip => "SKIP",
        }
    }

    /// Index into a `[usize; 4]` counter laid out like `REPORT_STATUSES`.
    pub fn column(&self) -> usize {
        match self {
            ReportStatus::Pass => 0,
            ReportStatus::NewFailure => 1,
            ReportStatus::KnownFailure => 2,
            ReportStatus::Skip => 3,
        }
    }
}

/// A single testcase entry from the report document.
///
/// `report` starts out as `Pass` at load time and is overwritten by the
/// classifier; nothing else mutates after load.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRecord {
    /// `"<classname>.<testname>"`, unique within a report.
    pub name: String,
    pub result: TestResult,
    /// First line (or truncated excerpt) of the failure/error message.
    pub message: Option<String>,
    /// Elapsed time in seconds.
    pub time: f64,
    pub report: ReportStatus,
}
