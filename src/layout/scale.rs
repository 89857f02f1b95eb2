//! Proportion scaler: a common integer scale factor for exact splits.
//!
//! When a hidden item's proportional share is split across `k` consumers,
//! naive integer division loses remainder units. Scaling every proportion by
//! the least common multiple of all consumption-group sizes guarantees the
//! division by any group size is exact. The factor is recomputed from the
//! current group sizes on every layout pass, since groups change between
//! calls.

/// Greatest common divisor (Euclid).
const fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Compute the common scale factor for the given consumption-group sizes.
///
/// Returns the least common multiple of all non-zero sizes, or `1` when
/// every group is empty (no consumption configured anywhere).
pub fn scale_factor<I>(group_sizes: I) -> i64
where
    I: IntoIterator<Item = usize>,
{
    group_sizes
        .into_iter()
        .filter(|&n| n > 0)
        .fold(1i64, |acc, n| {
            let n = n as i64;
            acc / gcd(acc, n) * n
        })
}
