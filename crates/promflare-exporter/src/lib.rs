//! promflare exporter library entry.
//!
//! This crate wires the config loader, the fixed metric set, the periodic
//! updater task, and the axum scrape endpoint into a runnable exporter. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod metrics;
pub mod router;
pub mod source;
pub mod updater;
