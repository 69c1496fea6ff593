//! Known-failure catalogues.
//!
//! Catalogues are YAML documents carrying a `ceph_s3` namespace (test name
//! to known-failure entry) and a `codes` namespace (footnote code to
//! explanation). Several catalogues can be supplied; they are deep-merged
//! in load order, with later catalogues winning on scalar conflicts.

use crate::error::ReportError;
use log::debug;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One catalogue entry for a test expected to fail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnownFailureEntry {
    /// Open-ended status string; only the literal `KNOWN` downgrades a
    /// failing test to KNOWN_FAILURE.
    pub status: String,
    /// Optional footnote code referencing the `codes` namespace.
    #[serde(default)]
    pub code: Option<String>,
}

impl KnownFailureEntry {
    pub fn is_known(&self) -> bool {
        self.status == "KNOWN"
    }
}

/// Merged view over every supplied catalogue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registry {
    /// Known-failure entries keyed by `"<class>.<test>"`.
    #[serde(default, rename = "ceph_s3")]
    pub failures: BTreeMap<String, KnownFailureEntry>,
    /// Footnote code explanations.
    #[serde(default)]
    pub codes: BTreeMap<String, String>,
}

impl Registry {
    pub fn get(&self, test_name: &str) -> Option<&KnownFailureEntry> {
        self.failures.get(test_name)
    }

    /// Footnote code for `test_name`, but only when the codes catalogue
    /// actually explains it.
    pub fn code_for(&self, test_name: &str) -> Option<&str> {
        let code = self.failures.get(test_name)?.code.as_deref()?;
        self.codes.contains_key(code).then_some(code)
    }
}

/// Load and merge all catalogues at `paths`. No paths yields an empty
/// registry, so every failing test classifies as NEW_FAILURE.
pub fn load_registry<P: AsRef<Path>>(paths: &[P]) -> Result<Registry, ReportError> {
    let mut merged = Value::Null;

    for path in paths {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let doc: Value = serde_yaml::from_str(&text).map_err(|e| ReportError::yaml(path, e))?;
        merged = merge_values(merged, doc);
        debug!("merged known-failure catalogue {}", path.display());
    }

    if merged.is_null() {
        return Ok(Registry::default());
    }

    let registry: Registry = serde_yaml::from_value(merged).map_err(|e| {
        ReportError::yaml(paths.last().map(|p| p.as_ref().to_path_buf()).unwrap_or_default(), e)
    })?;
    debug!("registry holds {} known failures, {} codes", registry.failures.len(), registry.codes.len());
    Ok(registry)
}

/// Recursive union of two YAML values. Mappings merge key-wise; any other
/// incoming value replaces the existing one outright, so the last-loaded
/// catalogue wins scalar conflicts while deep keys accumulate.
pub fn merge_values(a: Value, b: Value) -> Value {
    let Value::Mapping(b_map) = b else {
        return b;
    };

    let mut result = match a {
        Value::Mapping(a_map) => a_map,
        _ => serde_yaml::Mapping::new(),
    };

    for (key, incoming) in b_map {
        match result.remove(&key) {
            Some(existing @ Value::Mapping(_)) => {
                result.insert(key, merge_values(existing, incoming));
            }
            _ => {
                result.insert(key, incoming);
            }
        }
    }

    Value::Mapping(result)
}
