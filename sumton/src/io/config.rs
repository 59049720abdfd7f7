//! sumton configuration stored in `sumton.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::method::{Limits, MAX_RECURSION_DEPTH_CEILING};

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "sumton.toml";

/// sumton configuration (TOML).
///
/// Missing fields fall back to [`SumtonConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SumtonConfig {
    /// Input for `sumton run` when `-n` is not given.
    pub n: i64,

    /// Largest `n` accepted by the recursive method, at most
    /// [`MAX_RECURSION_DEPTH_CEILING`].
    pub max_recursion_depth: i64,

    /// Default upper bound for `sumton verify`.
    pub verify_upto: i64,
}

impl Default for SumtonConfig {
    fn default() -> Self {
        Self {
            n: 5,
            max_recursion_depth: Limits::default().max_recursion_depth,
            verify_upto: 1_000,
        }
    }
}

impl SumtonConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n < 0 {
            return Err(anyhow!("n must be >= 0"));
        }
        if self.max_recursion_depth <= 0 {
            return Err(anyhow!("max_recursion_depth must be > 0"));
        }
        if self.max_recursion_depth > MAX_RECURSION_DEPTH_CEILING {
            return Err(anyhow!(
                "max_recursion_depth must be <= {}",
                MAX_RECURSION_DEPTH_CEILING
            ));
        }
        if self.verify_upto < 0 {
            return Err(anyhow!("verify_upto must be >= 0"));
        }
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_recursion_depth: self.max_recursion_depth,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SumtonConfig::default()`.
pub fn load_config(path: &Path) -> Result<SumtonConfig> {
    if !path.exists() {
        let cfg = SumtonConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SumtonConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SumtonConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
