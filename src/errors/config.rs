//! Error types for configuration loading.

/// Errors raised while building an [`crate::IndexerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL variable did not parse.
    #[error("Invalid URL in {var}")]
    InvalidUrl {
        /// Environment variable name
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// A variable was set to a value of the wrong shape.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        /// Environment variable name
        var: &'static str,
        /// Value as found in the environment
        value: String,
        /// What was expected
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn invalid_value(var: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        ConfigError::InvalidValue {
            var,
            value: value.into(),
            reason,
        }
    }
}
