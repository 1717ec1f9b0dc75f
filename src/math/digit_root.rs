pub fn digit_sum(mut n: i64) -> i64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum down to a single digit. Values below 10 (negatives included)
/// are already final.
pub fn digital_root(mut n: i64) -> i64 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n
}

pub fn is_magic(n: i64) -> bool {
    digital_root(n) == 1
}
