//! Aggregation of classified results into per-category rows.
//!
//! Rows are built in a fixed order: flag categories first (they claim
//! their tests before anything else), then every non-empty method ×
//! resource intersection, then whatever is left as `other`, then a grand
//! total. The accumulator threads the remaining-results pool, the running
//! totals and the globally-seen footnote codes through that sequence, so
//! each test is counted exactly once and each footnote is defined exactly
//! once.

use crate::attributes::AttributeIndex;
use crate::known_failures::Registry;
use crate::types::{ResultMap, TestResult};
use std::collections::{BTreeSet, HashSet};
use std::fmt::Write as _;

/// One aggregated row of the detailed report.
#[derive(Debug, Clone, PartialEq)]
pub struct AggRow {
    pub label: String,
    /// Counts in `REPORT_STATUSES` column order.
    pub counts: [usize; 4],
    /// Mediawiki-formatted footnote references; empty for most rows.
    pub notes: String,
}

impl AggRow {
    pub fn passed(&self) -> usize {
        self.counts[0]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `"87.5%"`, or `"N/A"` for an empty row.
    pub fn pass_percent(&self) -> String {
        let total = self.total();
        if total == 0 {
            "N/A".to_string()
        } else {
            format!("{:.1}%", self.passed() as f64 / total as f64 * 100.0)
        }
    }

    /// `"7/8"`, or empty for an empty row.
    pub fn tests_passed(&self) -> String {
        let total = self.total();
        if total == 0 { String::new() } else { format!("{}/{}", self.passed(), total) }
    }
}

/// The fully built detailed table.
#[derive(Debug, Clone)]
pub struct DetailedTable {
    pub rows: Vec<AggRow>,
    pub total: AggRow,
}

/// Working state threaded through the ordered row builds.
struct RowAccumulator<'a> {
    remaining: ResultMap,
    totals: [usize; 4],
    seen_codes: HashSet<String>,
    registry: &'a Registry,
}

impl<'a> RowAccumulator<'a> {
    fn new(results: &ResultMap, registry: &'a Registry) -> Self {
        RowAccumulator {
            remaining: results.clone(),
            totals: [0; 4],
            seen_codes: HashSet::new(),
            registry,
        }
    }

    /// Build a row from `members`, removing each matched test from the
    /// remaining pool so later rows cannot count it again.
    fn consume_row<'m>(&mut self, label: &str, members: impl IntoIterator<Item = &'m String>) -> AggRow {
        let mut counts = [0usize; 4];
        let mut row_codes: BTreeSet<String> = BTreeSet::new();

        for member in members {
            let Some(record) = self.remaining.shift_remove(member) else {
                continue;
            };
            counts[record.report.column()] += 1;
            if record.result == TestResult::Fail
                && let Some(code) = self.registry.code_for(member)
            {
                row_codes.insert(code.to_string());
            }
        }

        for (total, count) in self.totals.iter_mut().zip(counts) {
            *total += count;
        }

        let mut notes = String::new();
        for code in row_codes {
            if self.seen_codes.insert(code.clone()) {
                // First sighting anywhere in the table defines the footnote.
                let _ = write!(notes, "<ref name=\"{code}\">{}</ref>", self.registry.codes[&code]);
            } else {
                let _ = write!(notes, "<ref name=\"{code}\"/>");
            }
        }

        AggRow { label: label.to_string(), counts, notes }
    }

    /// Build the catch-all row from everything still unconsumed.
    fn consume_remaining(&mut self, label: &str) -> AggRow {
        let members: Vec<String> = self.remaining.keys().cloned().collect();
        self.consume_row(label, &members)
    }

    fn total_row(&self) -> AggRow {
        AggRow { label: "Total".to_string(), counts: self.totals, notes: String::new() }
    }
}

/// Partition the classified results along the attribute index and tally
/// each partition.
pub fn build_detailed_table(
    results: &ResultMap,
    attributes: &AttributeIndex,
    registry: &Registry,
) -> DetailedTable {
    let mut acc = RowAccumulator::new(results, registry);

    // Flag rows claim their tests first but render after the
    // method/resource breakdown.
    let mut flag_rows = Vec::new();
    if let Some(flags) = attributes.flags() {
        for (flag, members) in flags {
            flag_rows.push(acc.consume_row(flag, members));
        }
    }

    let methods = attributes.methods();
    let resources = attributes.resources();

    let mut method_names: Vec<&String> = methods.keys().collect();
    method_names.sort_by_key(|name| name.to_lowercase());
    let mut resource_names: Vec<&String> = resources.keys().collect();
    resource_names.sort_by_key(|name| name.to_lowercase());

    let mut rows = Vec::new();
    for method in &method_names {
        for resource in &resource_names {
            let intersection: BTreeSet<&String> =
                methods[*method].intersection(&resources[*resource]).collect();
            if intersection.is_empty() {
                continue;
            }
            let before = acc.remaining.len();
            let row = acc.consume_row(&format!("{method} {resource}"), intersection.into_iter());
            // Guard against rows whose tests were all claimed already.
            if acc.remaining.len() < before {
                rows.push(row);
            }
        }
    }

    rows.extend(flag_rows);
    rows.push(acc.consume_remaining("other"));

    DetailedTable { total: acc.total_row(), rows }
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod rows_test;
