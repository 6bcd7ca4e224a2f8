use thiserror::Error;

/// Failures raised before any receipt is processed.
///
/// Unknown sellers or products inside receipts are not errors, they are skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// One of the dataset collections has no records
    #[error("Invalid input data: '{0}' must not be empty")]
    EmptyCollection(&'static str),

    /// A pricing strategy was not supplied to the analyzer
    #[error("Invalid configuration: '{0}' strategy is missing")]
    MissingStrategy(&'static str),
}

impl AnalysisError {
    #[allow(unused)]
    pub fn is_input_error(&self) -> bool {
        matches!(self, AnalysisError::EmptyCollection(_))
    }

    #[allow(unused)]
    pub fn is_config_error(&self) -> bool {
        matches!(self, AnalysisError::MissingStrategy(_))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown value '{value}' for {key}, expected one of: {expected}")]
    UnknownValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}
