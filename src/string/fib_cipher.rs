//! Caesar shift applied only at Fibonacci-like positions.
//!
//! The positions come from the sequence `0, 1, 2, 3, 5, 8, 13, ...`: the seed
//! `[0, 1, 2]`, then sums of the last two terms while they stay below the
//! string length. A letter at position `i` is rotated forward by `i` within its
//! own case; everything else is copied through.

use tracing::trace;

pub fn fib_indices(len: usize) -> Vec<usize> {
    let mut fib = vec![0, 1, 2];
    loop {
        let next = fib[fib.len() - 1] + fib[fib.len() - 2];
        if next >= len {
            break;
        }
        fib.push(next);
    }
    fib
}

pub fn shift_letter(c: u8, shift: usize) -> u8 {
    let base = match c {
        b'A'..=b'Z' => b'A',
        b'a'..=b'z' => b'a',
        _ => return c,
    };
    let offset = (usize::from(c - base) + shift) % 26;
    base + offset as u8
}

pub fn encode(s: &[u8]) -> Vec<u8> {
    let mut result = s.to_vec();
    // indices are strictly increasing; the seed may run past the end
    for i in fib_indices(s.len()).into_iter().take_while(|&i| i < s.len()) {
        result[i] = shift_letter(s[i], i);
        trace!(i, from = %(s[i] as char), to = %(result[i] as char), "shift");
    }
    result
}
