pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Integers in `[1, n)` coprime to `n`, ascending. `n = 1` is special-cased to `[1]`.
pub fn coprimes(n: i64) -> Vec<u64> {
    if n == 1 {
        return vec![1];
    }
    let n = n.max(0) as u64;
    (1..n).filter(|&i| gcd(i, n) == 1).collect()
}
