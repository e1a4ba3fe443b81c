//! Errors raised while building or loading configuration.

/// Invalid or unreadable spawner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field holds a value the simulation cannot use.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },

    /// The JSON document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
