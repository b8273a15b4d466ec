//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use promflare_core::error::{PromflareError, Result};

pub use schema::{ExporterConfig, SourceSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    if !Path::new(path).exists() {
        return Err(PromflareError::Config(format!(
            "config file `{path}` not found; pass `--config <yourconfig>` or create `config.toml` in the working directory"
        )));
    }
    let s = fs::read_to_string(path)
        .map_err(|e| PromflareError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig =
        toml::from_str(s).map_err(|e| PromflareError::Config(format!("invalid toml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
