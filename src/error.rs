use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading inputs or rendering reports.
///
/// Every variant is fatal: the tool makes no attempt at partial-result
/// recovery, so `main` prints the error and exits non-zero.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing report: {0}")]
    Output(#[from] std::io::Error),

    #[error("invalid XML in test report: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The test report parsed as XML but violates the expected shape,
    /// e.g. a testcase missing its name or carrying two failure children.
    #[error("malformed test report: {0}")]
    MalformedReport(String),

    /// The attribute catalogue parsed as YAML but is not a mapping of
    /// group name to category members.
    #[error("malformed attribute catalogue: {0}")]
    MalformedAttributes(String),

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }

    pub fn yaml(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        ReportError::Yaml { path: path.into(), source }
    }
}
