//! Self-referential summation.

/// Sum `1..=n` as `n + sum_recursive(n - 1)`, bottoming out at 0.
///
/// Time O(n), space O(n): every level keeps its own stack frame until the
/// base case returns. Callers bound `n` (see
/// [`evaluate`](crate::core::method::evaluate)); any `n <= 0` is treated as
/// the base case.
pub fn sum_recursive(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    n + sum_recursive(n - 1)
}
