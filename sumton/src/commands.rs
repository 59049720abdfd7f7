//! Command implementations shared by the binary and its tests.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::method::{Limits, Method, evaluate};
use crate::io::config::{SumtonConfig, write_config};

/// Evaluate `n` with each of `methods`, in the given order.
///
/// An empty slice means [`Method::ALL`].
pub fn run_methods(n: i64, methods: &[Method], limits: &Limits) -> Result<Vec<(Method, i64)>> {
    let methods: &[Method] = if methods.is_empty() {
        &Method::ALL
    } else {
        methods
    };
    info!(n, count = methods.len(), "running methods");
    methods
        .iter()
        .map(|&method| {
            let sum = evaluate(method, n, limits).with_context(|| format!("{method} sum"))?;
            Ok((method, sum))
        })
        .collect()
}

/// Write the default config to `path`.
///
/// Returns `false` without touching the file if it exists and `force` is unset.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, leaving it");
        return Ok(false);
    }
    write_config(path, &SumtonConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    Ok(true)
}
