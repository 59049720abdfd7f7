//! Loop-based summation.

/// Sum `1..=n` by walking a counter from 1 to `n` and accumulating.
///
/// Time O(n), space O(1). For `n < 0` the loop body never runs and the
/// result is 0.
pub fn sum_iterative(n: i64) -> i64 {
    let mut sum = 0;
    let mut i = 1;
    while i <= n {
        sum += i;
        i += 1;
    }
    sum
}
