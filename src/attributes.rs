//! Externally supplied test attributes for breakdown reporting.
//!
//! The attribute catalogue maps group names (`method`, `resource`,
//! `flags`, ...) to categories, each holding the set of test identifiers
//! it covers. Member sets appear either as YAML sequences or as mappings
//! whose keys are the members and whose values are null, depending on the
//! tool that produced the catalogue. Both spellings load identically.

use crate::error::ReportError;
use log::debug;
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

pub type CategoryMap = BTreeMap<String, BTreeSet<String>>;

/// Test identifiers grouped by attribute dimension.
#[derive(Debug, Clone, Default)]
pub struct AttributeIndex {
    groups: BTreeMap<String, CategoryMap>,
}

impl AttributeIndex {
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let index = Self::parse(&text).map_err(|e| match e {
            ReportError::MalformedAttributes(msg) => {
                ReportError::MalformedAttributes(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        debug!("loaded {} attribute groups from {}", index.groups.len(), path.display());
        Ok(index)
    }

    pub fn parse(document: &str) -> Result<Self, ReportError> {
        let doc: Value = serde_yaml::from_str(document)
            .map_err(|e| ReportError::MalformedAttributes(e.to_string()))?;

        let Value::Mapping(top) = doc else {
            return Err(ReportError::MalformedAttributes(
                "document root must be a mapping of group names".to_string(),
            ));
        };

        let mut groups = BTreeMap::new();
        for (group_key, categories) in top {
            let group = string_key(&group_key)?;
            let mut category_map = CategoryMap::new();

            let Value::Mapping(categories) = categories else {
                return Err(ReportError::MalformedAttributes(format!(
                    "group {group} must map category names to member sets"
                )));
            };

            for (category_key, members) in categories {
                let category = string_key(&category_key)?;
                category_map.insert(category, member_set(&group, members)?);
            }
            groups.insert(group, category_map);
        }

        Ok(AttributeIndex { groups })
    }

    pub fn group(&self, name: &str) -> Option<&CategoryMap> {
        self.groups.get(name)
    }

    pub fn flags(&self) -> Option<&CategoryMap> {
        self.group("flags")
    }

    /// HTTP-method categories; absent group reads as empty.
    pub fn methods(&self) -> CategoryMap {
        self.group("method").cloned().unwrap_or_default()
    }

    /// Resource categories; absent group reads as empty.
    pub fn resources(&self) -> CategoryMap {
        self.group("resource").cloned().unwrap_or_default()
    }
}

fn string_key(key: &Value) -> Result<String, ReportError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        other => Err(ReportError::MalformedAttributes(format!(
            "expected a string key, found {other:?}"
        ))),
    }
}

/// Accept member sets written as sequences, set-style mappings, or null.
fn member_set(group: &str, members: Value) -> Result<BTreeSet<String>, ReportError> {
    match members {
        Value::Null => Ok(BTreeSet::new()),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(ReportError::MalformedAttributes(format!(
                    "group {group} has a non-string member {other:?}"
                ))),
            })
            .collect(),
        Value::Mapping(items) => items.into_iter().map(|(key, _)| string_key(&key)).collect(),
        // `!!set` members arrive as a tagged mapping.
        Value::Tagged(tagged) => member_set(group, tagged.value),
        other => Err(ReportError::MalformedAttributes(format!(
            "group {group} has members of unexpected shape {other:?}"
        ))),
    }
}
