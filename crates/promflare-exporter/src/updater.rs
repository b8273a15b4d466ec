//! Periodic metric refresh task.
//!
//! One tick = one sample: pull a value from the source, overwrite the gauge
//! series for the fixed example labels, and feed the same value to the
//! histogram. A failed tick is logged and skipped; only cancellation stops
//! the loop, so tests can run a bounded number of iterations.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use promflare_core::error::Result;

use crate::metrics::{ExporterMetrics, EXAMPLE_LABEL_VALUES};
use crate::source::SampleSource;

/// Default refresh interval.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1000);

pub struct Updater {
    metrics: ExporterMetrics,
    source: Arc<dyn SampleSource>,
    tick: Duration,
}

impl Updater {
    pub fn new(metrics: ExporterMetrics, source: Arc<dyn SampleSource>, tick: Duration) -> Self {
        Self {
            metrics,
            source,
            tick,
        }
    }

    /// One refresh step. Ticks are independent: a failure here affects
    /// nothing but the current interval.
    pub fn step(&self) -> Result<()> {
        let v = self.source.sample()?;
        self.metrics.sample_value.set(&EXAMPLE_LABEL_VALUES, v);
        self.metrics.sample_distribution.observe(v);
        Ok(())
    }

    /// Run until `shutdown` fires. Never returns early on a step error.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = tokio::time::interval(self.tick);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::debug!("updater stopped");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.step() {
                        tracing::warn!(error = %e, "sample tick failed, skipping");
                    }
                }
            }
        }
    }
}
