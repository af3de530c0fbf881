//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use vahter_core::error::{Result, VahterError};

pub use schema::{PageSection, ServerSection, VahterConfig};

/// Used when `VAHTER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "vahter.yaml";

pub fn load_from_file(path: &str) -> Result<VahterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VahterError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<VahterConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            Ok(VahterConfig::default())
        }
        Err(e) => Err(VahterError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<VahterConfig> {
    let cfg: VahterConfig = serde_yaml::from_str(s)
        .map_err(|e| VahterError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
