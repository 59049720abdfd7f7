//! Arithmetic series formula.

/// Sum `1..=n` as `n * (n + 1) / 2`.
///
/// Time O(1), space O(1). The division is exact: one of `n` and `n + 1` is
/// always even.
pub fn sum_closed_form(n: i64) -> i64 {
    n * (n + 1) / 2
}

/// Like [`sum_closed_form`], but `None` if the sum itself overflows `i64`.
///
/// Halves the even factor before multiplying, so inputs whose sum fits but
/// whose `n * (n + 1)` would not are still computed.
pub fn checked_sum_closed_form(n: i64) -> Option<i64> {
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}
