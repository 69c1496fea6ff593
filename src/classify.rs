//! Reconcile raw test outcomes with the known-failure registry.

use crate::known_failures::{KnownFailureEntry, Registry};
use crate::types::{ReportStatus, ResultMap, TestResult};
use log::debug;

/// Report status for a single outcome. Pure and total: SKIP and PASS map
/// straight through; a FAIL is only downgraded to KNOWN_FAILURE by an
/// entry whose status is exactly `KNOWN`.
pub fn report_status(result: TestResult, entry: Option<&KnownFailureEntry>) -> ReportStatus {
    match result {
        TestResult::Skip => ReportStatus::Skip,
        TestResult::Pass => ReportStatus::Pass,
        TestResult::Fail => match entry {
            Some(entry) if entry.is_known() => ReportStatus::KnownFailure,
            _ => ReportStatus::NewFailure,
        },
    }
}

/// Classify every record in place.
pub fn classify_results(results: &mut ResultMap, registry: &Registry) {
    let mut new_failures = 0usize;
    for (name, record) in results.iter_mut() {
        record.report = report_status(record.result, registry.get(name));
        if record.report == ReportStatus::NewFailure {
            new_failures += 1;
        }
    }
    debug!("classified {} results, {} new failures", results.len(), new_failures);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutcomeRecord;

    fn record(name: &str, result: TestResult) -> OutcomeRecord {
        OutcomeRecord {
            name: name.to_string(),
            result,
            message: None,
            time: 0.0,
            report: ReportStatus::Pass,
        }
    }

    fn entry(status: &str) -> KnownFailureEntry {
        KnownFailureEntry { status: status.to_string(), code: None }
    }

    #[test]
    fn test_pass_and_skip_ignore_registry() {
        let known = entry("KNOWN");
        assert_eq!(report_status(TestResult::Pass, Some(&known)), ReportStatus::Pass);
        assert_eq!(report_status(TestResult::Skip, Some(&known)), ReportStatus::Skip);
        assert_eq!(report_status(TestResult::Pass, None), ReportStatus::Pass);
        assert_eq!(report_status(TestResult::Skip, None), ReportStatus::Skip);
    }

    #[test]
    fn test_fail_without_entry_is_new() {
        assert_eq!(report_status(TestResult::Fail, None), ReportStatus::NewFailure);
    }

    #[test]
    fn test_fail_with_known_entry_is_known() {
        assert_eq!(report_status(TestResult::Fail, Some(&entry("KNOWN"))), ReportStatus::KnownFailure);
    }

    #[test]
    fn test_fail_with_other_status_stays_new() {
        // Only an explicit KNOWN downgrades; anything else reads as a
        // regression.
        assert_eq!(report_status(TestResult::Fail, Some(&entry("FLAKY"))), ReportStatus::NewFailure);
        assert_eq!(report_status(TestResult::Fail, Some(&entry("known"))), ReportStatus::NewFailure);
    }

    #[test]
    fn test_classify_results_in_place() {
        let mut results = ResultMap::new();
        results.insert("ClassA.test1".to_string(), record("ClassA.test1", TestResult::Fail));
        results.insert("ClassA.test2".to_string(), record("ClassA.test2", TestResult::Fail));
        results.insert("ClassA.test3".to_string(), record("ClassA.test3", TestResult::Pass));
        results.insert("ClassA.test4".to_string(), record("ClassA.test4", TestResult::Skip));

        let registry: Registry = serde_yaml::from_str(
            "ceph_s3:\n  ClassA.test1:\n    status: KNOWN\n  ClassA.test4:\n    status: KNOWN\n",
        )
        .unwrap();

        classify_results(&mut results, &registry);

        assert_eq!(results["ClassA.test1"].report, ReportStatus::KnownFailure);
        assert_eq!(results["ClassA.test2"].report, ReportStatus::NewFailure);
        assert_eq!(results["ClassA.test3"].report, ReportStatus::Pass);
        // SKIP wins even with a registry entry present.
        assert_eq!(results["ClassA.test4"].report, ReportStatus::Skip);
    }
}
