//! Error types for cellevo_core.
//!
//! The simulation itself never fails mid-run; errors come from configuration
//! loading and validation.

use thiserror::Error;

/// Main error type for cellevo_core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A tunable is out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// TOML parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<CoreError>,
    },
}

/// Result type alias for cellevo_core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Creates a new validation error.
    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Returns a validation error with `msg` unless `cond` holds.
pub(crate) fn ensure(cond: bool, msg: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(CoreError::validation(msg))
    }
}
