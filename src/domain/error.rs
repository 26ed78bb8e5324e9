//! Domain error types.

/// Top-level error type for simfeed.
#[derive(Debug, thiserror::Error)]
pub enum SimfeedError {
    #[error("data source error: {reason}")]
    Source { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("no data for {code}")]
    NoData { code: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SimfeedError> for std::process::ExitCode {
    fn from(err: &SimfeedError) -> Self {
        let code: u8 = match err {
            SimfeedError::Io(_) => 1,
            SimfeedError::ConfigParse { .. }
            | SimfeedError::ConfigMissing { .. }
            | SimfeedError::ConfigInvalid { .. } => 2,
            SimfeedError::Source { .. } => 3,
            SimfeedError::NoData { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
