//! The exporter's fixed metric set.
//!
//! Registration happens once at startup, before the listener binds, so a
//! name collision aborts the process instead of surfacing mid-scrape.

use std::sync::Arc;

use promflare_core::error::Result;
use promflare_core::metrics::{GaugeVec, Histogram, MetricRegistry};

/// Label schema of the sample gauge.
pub const SAMPLE_LABELS: [&str; 2] = ["label1", "label2"];

/// Fixed label values written by the placeholder updater.
pub const EXAMPLE_LABEL_VALUES: [&str; 2] = ["value1", "value2"];

/// Upper bucket bounds of the sample distribution histogram.
pub const SAMPLE_BUCKETS: [f64; 7] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.9, 1.0];

/// Handles to the registered metrics, shared by the updater task.
#[derive(Clone)]
pub struct ExporterMetrics {
    pub sample_value: Arc<GaugeVec>,
    pub sample_distribution: Arc<Histogram>,
}

impl ExporterMetrics {
    /// Declare the full metric set on `registry`.
    pub fn register(registry: &MetricRegistry) -> Result<Self> {
        let sample_value = registry.register_gauge_vec(
            "promflare_sample_value",
            "Most recent sample value per label combination.",
            &SAMPLE_LABELS,
        )?;
        let sample_distribution = registry.register_histogram(
            "promflare_sample_distribution",
            "Distribution of observed sample values.",
            &SAMPLE_BUCKETS,
        )?;
        Ok(Self {
            sample_value,
            sample_distribution,
        })
    }
}
