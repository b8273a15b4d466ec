//! Top-level facade crate for promflare.
//!
//! Re-exports the metric core and the exporter library so users can depend on a single crate.

pub mod core {
    pub use promflare_core::*;
}

pub mod exporter {
    pub use promflare_exporter::*;
}
