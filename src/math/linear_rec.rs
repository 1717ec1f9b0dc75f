use tracing::trace;

/// n-th term of a(1) = a(2) = 1, a(i) = k * a(i - 1) + a(i - 2).
///
/// Terms up to 2 (and any n below that) are 1. Arithmetic wraps on overflow.
pub fn modified_fib(n: i64, k: i64) -> i64 {
    let (mut a1, mut a2) = (1i64, 1i64);
    for i in 3..=n {
        let next = k.wrapping_mul(a2).wrapping_add(a1);
        a1 = a2;
        a2 = next;
        trace!(i, value = a2, "recurrence step");
    }
    a2
}
