//! Method selection and the validated evaluation path.

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use tracing::debug;

use super::closed_form::{checked_sum_closed_form, sum_closed_form};
use super::iterative::sum_iterative;
use super::recursive::sum_recursive;

/// One of the three summation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Iterative,
    ClosedForm,
    Recursive,
}

impl Method {
    /// All methods, in output order.
    pub const ALL: [Method; 3] = [Method::Iterative, Method::ClosedForm, Method::Recursive];

    pub fn name(self) -> &'static str {
        match self {
            Method::Iterative => "iterative",
            Method::ClosedForm => "closed-form",
            Method::Recursive => "recursive",
        }
    }

    /// Run the unguarded implementation.
    pub fn sum(self, n: i64) -> i64 {
        match self {
            Method::Iterative => sum_iterative(n),
            Method::ClosedForm => sum_closed_form(n),
            Method::Recursive => sum_recursive(n),
        }
    }

    /// Like [`Method::sum`], but `None` if the sum overflows `i64`.
    ///
    /// Partial sums of the loop and the recursion never exceed the final sum,
    /// so checking that sum up front covers them. The closed form falls back
    /// to [`checked_sum_closed_form`] once `n * (n + 1)` itself overflows.
    pub fn checked_sum(self, n: i64) -> Option<i64> {
        let total = checked_sum_closed_form(n)?;
        match self {
            Method::ClosedForm if n.checked_mul(n + 1).is_none() => Some(total),
            _ => Some(self.sum(n)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
                anyhow!("unknown method '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Upper bound on recursion depth regardless of configuration; deeper call
/// chains no longer fit the main thread's stack.
pub const MAX_RECURSION_DEPTH_CEILING: i64 = 50_000;

/// Bounds applied by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest `n` the recursive method may be called with, capped at
    /// [`MAX_RECURSION_DEPTH_CEILING`].
    pub max_recursion_depth: i64,
}

impl Limits {
    /// The depth actually enforced.
    pub fn recursion_depth(&self) -> i64 {
        self.max_recursion_depth.min(MAX_RECURSION_DEPTH_CEILING)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_recursion_depth: 10_000,
        }
    }
}

/// Compute `1 + 2 + ... + n` with `method`, rejecting input the raw
/// functions cannot handle: negative `n`, recursion deeper than
/// `limits.max_recursion_depth`, and sums that overflow `i64`.
pub fn evaluate(method: Method, n: i64, limits: &Limits) -> Result<i64> {
    if n < 0 {
        bail!("n must be >= 0 (got {n})");
    }
    if method == Method::Recursive && n > limits.recursion_depth() {
        bail!(
            "n={} exceeds max_recursion_depth {} for the recursive method",
            n,
            limits.recursion_depth()
        );
    }
    let sum = method
        .checked_sum(n)
        .ok_or_else(|| anyhow!("sum of 1..={n} overflows i64"))?;
    debug!(%method, n, sum, "computed sum");
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_methods_agree_on_five() {
        for method in Method::ALL {
            assert_eq!(evaluate(method, 5, &Limits::default()).expect("eval"), 15);
        }
    }

    #[test]
    fn zero_is_zero_for_every_method() {
        for method in Method::ALL {
            assert_eq!(evaluate(method, 0, &Limits::default()).expect("eval"), 0);
        }
    }

    #[test]
    fn rejects_negative_n() {
        let err = evaluate(Method::Iterative, -1, &Limits::default()).unwrap_err();
        assert!(err.to_string().contains("n must be >= 0"));
    }

    #[test]
    fn rejects_recursion_past_limit() {
        let limits = Limits {
            max_recursion_depth: 10,
        };
        assert_eq!(evaluate(Method::Recursive, 10, &limits).expect("eval"), 55);
        let err = evaluate(Method::Recursive, 11, &limits).unwrap_err();
        assert!(err.to_string().contains("max_recursion_depth 10"));
        // Other methods ignore the recursion limit.
        assert_eq!(evaluate(Method::ClosedForm, 11, &limits).expect("eval"), 66);
    }

    #[test]
    fn recursion_depth_is_capped_by_ceiling() {
        let limits = Limits {
            max_recursion_depth: 10_000_000,
        };
        assert_eq!(limits.recursion_depth(), MAX_RECURSION_DEPTH_CEILING);
        let n = MAX_RECURSION_DEPTH_CEILING + 1;
        let err = evaluate(Method::Recursive, n, &limits).unwrap_err();
        assert!(
            err.to_string()
                .contains(&format!("max_recursion_depth {MAX_RECURSION_DEPTH_CEILING}"))
        );
    }

    #[test]
    fn closed_form_handles_sums_past_product_overflow() {
        assert_eq!(
            evaluate(Method::ClosedForm, 3_037_000_500, &Limits::default()).expect("eval"),
            4_611_686_020_081_787_750
        );
    }

    #[test]
    fn checked_sum_uses_raw_formula_in_range() {
        for n in 0..=1_000 {
            assert_eq!(Method::ClosedForm.checked_sum(n), Some(sum_closed_form(n)));
        }
        assert_eq!(Method::Iterative.checked_sum(4_294_967_296), None);
    }

    #[test]
    fn recursion_reaches_default_limit() {
        let limits = Limits::default();
        let n = limits.max_recursion_depth;
        assert_eq!(
            evaluate(Method::Recursive, n, &limits).expect("eval"),
            sum_closed_form(n)
        );
    }

    #[test]
    fn rejects_overflow() {
        let err = evaluate(Method::ClosedForm, i64::MAX, &Limits::default()).unwrap_err();
        assert!(err.to_string().contains("overflows i64"));
    }

    #[test]
    fn parses_names() {
        assert_eq!("iterative".parse::<Method>().expect("parse"), Method::Iterative);
        assert_eq!("closed-form".parse::<Method>().expect("parse"), Method::ClosedForm);
        assert_eq!("recursive".parse::<Method>().expect("parse"), Method::Recursive);
        let err = "loop".parse::<Method>().unwrap_err();
        assert!(err.to_string().contains("closed-form"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().expect("parse"), method);
        }
    }
}
