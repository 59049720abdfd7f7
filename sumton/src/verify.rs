//! Cross-checks the summation methods over a range of inputs.

use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::closed_form::checked_sum_closed_form;
use crate::core::method::{Limits, Method};

/// One disagreement between a method and the closed-form ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub method: Method,
    pub n: i64,
    pub expected: i64,
    pub actual: i64,
}

/// Outcome of [`verify_range`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub upto: i64,
    /// Number of (method, n) pairs compared.
    pub checked: u64,
    /// Inputs above the recursion limit, not run recursively.
    pub skipped_recursive: u64,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare every method against the checked closed form for `0..=upto`.
///
/// Also checks the recurrence `sum(n) = sum(n - 1) + n` on each method's own
/// output; a broken recurrence is reported as a mismatch against
/// `sum(n - 1) + n`.
pub fn verify_range(upto: i64, limits: &Limits) -> Result<VerifyReport> {
    verify_with(upto, limits, |method, n| method.checked_sum(n))
}

fn verify_with<F>(upto: i64, limits: &Limits, mut sum: F) -> Result<VerifyReport>
where
    F: FnMut(Method, i64) -> Option<i64>,
{
    if upto < 0 {
        bail!("upto must be >= 0 (got {upto})");
    }
    checked_sum_closed_form(upto).ok_or_else(|| anyhow!("sum of 1..={upto} overflows i64"))?;
    info!(upto, "verifying methods");

    let mut report = VerifyReport {
        upto,
        checked: 0,
        skipped_recursive: 0,
        mismatches: Vec::new(),
    };
    let mut previous: [Option<i64>; 3] = [None; 3];

    for n in 0..=upto {
        let expected = checked_sum_closed_form(n)
            .ok_or_else(|| anyhow!("sum of 1..={n} overflows i64"))?;
        for (slot, method) in Method::ALL.into_iter().enumerate() {
            if method == Method::Recursive && n > limits.recursion_depth() {
                report.skipped_recursive += 1;
                previous[slot] = None;
                continue;
            }
            let actual =
                sum(method, n).ok_or_else(|| anyhow!("{method} sum of 1..={n} overflows i64"))?;
            report.checked += 1;
            if actual != expected {
                debug!(%method, n, expected, actual, "closed-form mismatch");
                report.mismatches.push(Mismatch {
                    method,
                    n,
                    expected,
                    actual,
                });
            }
            if let Some(prev) = previous[slot]
                && actual != prev + n
            {
                debug!(%method, n, prev, actual, "recurrence mismatch");
                report.mismatches.push(Mismatch {
                    method,
                    n,
                    expected: prev + n,
                    actual,
                });
            }
            previous[slot] = Some(actual);
        }
    }

    info!(
        checked = report.checked,
        mismatches = report.mismatches.len(),
        "verification finished"
    );
    Ok(report)
}
