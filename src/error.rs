use thiserror::Error;

/// Errors that abort an `analyze` run. None of them are recovered locally.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid repository format {input:?}. Use 'owner/repo' or a full GitHub URL")]
    InvalidFormat { input: String },

    #[error("GitHub request failed: {message}")]
    FetchFailed { message: String },

    #[error("PR limit must be 100 or less (got {limit})")]
    ValidationFailed { limit: u32 },

    #[error("failed to display output: {message}")]
    DisplayFailed { message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl AnalyzeError {
    pub(crate) fn fetch(message: impl Into<String>) -> Self {
        Self::FetchFailed {
            message: message.into(),
        }
    }

    pub(crate) fn display(message: impl Into<String>) -> Self {
        Self::DisplayFailed {
            message: message.into(),
        }
    }
}
