//! promflare core: metric primitives, the registry, and the error surface.
//!
//! This crate defines the metric types (labeled gauge, cumulative histogram),
//! the registry that renders them in the Prometheus text exposition format,
//! and the error type shared by the exporter binary. It intentionally carries
//! no runtime or transport dependencies so it can be reused in multiple
//! contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PromflareError`/`Result` so the
//! exporter process does not crash on bad input once it is serving scrapes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{PromflareError, Result};
pub use metrics::{GaugeVec, Histogram, MetricRegistry};
