use promflare_core::error::{PromflareError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub source: SourceSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// The measured-signal section: where samples notionally come from.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    /// Upper bound on samples pulled per refresh cycle.
    pub poll_budget: u64,

    /// Address of the measured system.
    pub endpoint: String,

    /// Named targets to sample, in priority order.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl SourceSection {
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(PromflareError::Config(
                "source.endpoint must not be empty".into(),
            ));
        }
        if self.poll_budget == 0 {
            return Err(PromflareError::Config(
                "source.poll_budget must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
