//! Shared error type across promflare crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PromflareError>;

/// Unified error type used by the core registry and the exporter binary.
#[derive(Debug, Error)]
pub enum PromflareError {
    /// Config file missing, unreadable, malformed, or failing validation.
    #[error("config: {0}")]
    Config(String),
    /// A metric name was registered twice.
    #[error("duplicate metric: {0}")]
    DuplicateMetric(String),
    /// The scrape listener could not be bound.
    #[error("bind: {0}")]
    Bind(String),
    /// A sample source failed to produce a value for one tick.
    #[error("sample: {0}")]
    Sample(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PromflareError {
    /// Whether this error must abort startup (no retry, non-zero exit).
    ///
    /// Everything else is recoverable: a failed sample tick is logged and
    /// skipped, and request-level errors never reach this type at all.
    pub fn is_startup_fatal(&self) -> bool {
        match self {
            PromflareError::Config(_)
            | PromflareError::DuplicateMetric(_)
            | PromflareError::Bind(_) => true,
            PromflareError::Sample(_) | PromflareError::Internal(_) => false,
        }
    }
}
