//! Metric primitives and the registry behind the `/metrics` endpoint.
//!
//! Values are stored as atomics (`f64` kept as `AtomicU64` bit patterns) so
//! one writer and many concurrent scrape readers never block each other.
//! Gauge series are backed by `DashMap` keyed on the label-value tuple.
//! Consistency is per-metric only: a scrape racing a write may observe the
//! old value for one metric and the new value for another.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

use crate::error::{PromflareError, Result};

/// Helper to escape label values for the text exposition format.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// A gauge partitioned by a fixed label schema.
///
/// Each unique label-value tuple is one series holding the most recent value
/// written for it (last-write-wins, no accumulation). Series appear on first
/// `set`; a gauge with no series renders only its header lines.
pub struct GaugeVec {
    label_names: Vec<String>,
    series: DashMap<Vec<String>, AtomicU64>,
}

impl GaugeVec {
    fn new(label_names: &[&str]) -> Self {
        Self {
            label_names: label_names.iter().map(|s| s.to_string()).collect(),
            series: DashMap::new(),
        }
    }

    /// Overwrite the value for one label combination.
    pub fn set(&self, label_values: &[&str], v: f64) {
        let key: Vec<String> = label_values.iter().map(|s| s.to_string()).collect();
        let cell = self
            .series
            .entry(key)
            .or_insert_with(|| AtomicU64::new(0f64.to_bits()));
        cell.store(v.to_bits(), Ordering::Relaxed);
    }

    /// Current value for one label combination, if any write has happened.
    pub fn get(&self, label_values: &[&str]) -> Option<f64> {
        let key: Vec<String> = label_values.iter().map(|s| s.to_string()).collect();
        self.series
            .get(&key)
            .map(|cell| f64::from_bits(cell.load(Ordering::Relaxed)))
    }

    fn render(&self, name: &str, out: &mut String) {
        for entry in self.series.iter() {
            let labels = self
                .label_names
                .iter()
                .zip(entry.key())
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let value = f64::from_bits(entry.value().load(Ordering::Relaxed));
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, value);
        }
    }
}

/// A cumulative histogram with fixed upper bucket bounds.
///
/// `observe` is append-only: bucket counters, the running sum, and the total
/// count only ever grow for the life of the process.
#[derive(Debug)]
pub struct Histogram {
    bounds: Vec<f64>,
    buckets: Vec<AtomicU64>,
    sum_bits: AtomicU64,
    count: AtomicU64,
}

impl Histogram {
    fn new(bounds: &[f64]) -> Result<Self> {
        if bounds.is_empty() || !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(PromflareError::Internal(
                "histogram bounds must be non-empty and strictly increasing".into(),
            ));
        }
        Ok(Self {
            bounds: bounds.to_vec(),
            buckets: bounds.iter().map(|_| AtomicU64::new(0)).collect(),
            sum_bits: AtomicU64::new(0f64.to_bits()),
            count: AtomicU64::new(0),
        })
    }

    /// Record one observation: every bucket with bound >= v is incremented,
    /// along with the running sum and total count.
    pub fn observe(&self, v: f64) {
        self.count.fetch_add(1, Ordering::Relaxed);
        let _ = self
            .sum_bits
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some((f64::from_bits(bits) + v).to_bits())
            });
        for (i, &bound) in self.bounds.iter().enumerate() {
            if v <= bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Total number of observations so far.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Sum of all observed values so far.
    pub fn sum(&self) -> f64 {
        f64::from_bits(self.sum_bits.load(Ordering::Relaxed))
    }

    /// Cumulative count for the bucket at `bound`, if it exists.
    pub fn bucket_count(&self, bound: f64) -> Option<u64> {
        self.bounds
            .iter()
            .position(|&b| b == bound)
            .map(|i| self.buckets[i].load(Ordering::Relaxed))
    }

    fn render(&self, name: &str, out: &mut String) {
        for (i, &bound) in self.bounds.iter().enumerate() {
            let count = self.buckets[i].load(Ordering::Relaxed);
            let _ = writeln!(out, "{}_bucket{{le=\"{}\"}} {}", name, bound, count);
        }
        let count = self.count();
        let _ = writeln!(out, "{}_bucket{{le=\"+Inf\"}} {}", name, count);
        let _ = writeln!(out, "{}_sum {}", name, self.sum());
        let _ = writeln!(out, "{}_count {}", name, count);
    }
}

enum Collector {
    Gauge(Arc<GaugeVec>),
    Histogram(Arc<Histogram>),
}

impl Collector {
    fn type_name(&self) -> &'static str {
        match self {
            Collector::Gauge(_) => "gauge",
            Collector::Histogram(_) => "histogram",
        }
    }
}

struct Registered {
    name: String,
    help: String,
    collector: Collector,
}

/// Holds every registered metric and renders the scrape snapshot.
///
/// Construct one per process and share it (`Arc`) between the updater task
/// and the HTTP handler; registration happens once at startup, before any
/// traffic is served, and fails on a name collision.
#[derive(Default)]
pub struct MetricRegistry {
    metrics: Mutex<Vec<Registered>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Registered>> {
        self.metrics.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, name: &str, help: &str, collector: Collector) -> Result<()> {
        let mut metrics = self.lock();
        if metrics.iter().any(|m| m.name == name) {
            return Err(PromflareError::DuplicateMetric(name.to_string()));
        }
        metrics.push(Registered {
            name: name.to_string(),
            help: help.to_string(),
            collector,
        });
        Ok(())
    }

    /// Register a labeled gauge and return its shared handle.
    pub fn register_gauge_vec(
        &self,
        name: &str,
        help: &str,
        label_names: &[&str],
    ) -> Result<Arc<GaugeVec>> {
        let gauge = Arc::new(GaugeVec::new(label_names));
        self.insert(name, help, Collector::Gauge(Arc::clone(&gauge)))?;
        Ok(gauge)
    }

    /// Register a histogram with fixed bucket bounds and return its handle.
    pub fn register_histogram(
        &self,
        name: &str,
        help: &str,
        bounds: &[f64],
    ) -> Result<Arc<Histogram>> {
        let hist = Arc::new(Histogram::new(bounds)?);
        self.insert(name, help, Collector::Histogram(Arc::clone(&hist)))?;
        Ok(hist)
    }

    /// Render all registered metrics in the text exposition format, in
    /// registration order. Read-only: never mutates metric state.
    pub fn render(&self) -> String {
        let metrics = self.lock();
        let mut out = String::new();
        for m in metrics.iter() {
            let _ = writeln!(out, "# HELP {} {}", m.name, m.help);
            let _ = writeln!(out, "# TYPE {} {}", m.name, m.collector.type_name());
            match &m.collector {
                Collector::Gauge(g) => g.render(&m.name, &mut out),
                Collector::Histogram(h) => h.render(&m.name, &mut out),
            }
        }
        out
    }
}
