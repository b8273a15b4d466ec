//! Where sample values come from.
//!
//! `SampleSource` is the seam for real instrumentation: a production
//! deployment implements it against whatever system produces the measured
//! signal. The shipped `RandomSource` is a stand-in that emits uniform
//! values in `[0, 1)`.

use promflare_core::error::Result;

pub trait SampleSource: Send + Sync {
    fn sample(&self) -> Result<f64>;
}

/// Placeholder source: uniform random values in `[0, 1)`.
#[derive(Default)]
pub struct RandomSource;

impl RandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl SampleSource for RandomSource {
    fn sample(&self) -> Result<f64> {
        Ok(rand::random::<f64>())
    }
}
