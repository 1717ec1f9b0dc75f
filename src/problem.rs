//! The judge problems and the stdin/stdout framing around each solver.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::{write_spaced, InputStream};
use crate::math::{digit_root, gcd, linear_rec};
use crate::mex;
use crate::string::fib_cipher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    Coprimes,
    FibCipher,
    ModifiedFib,
    BoundedMex,
    MagicNumber,
}

#[derive(Clone, Copy, Debug)]
pub struct SolveOptions {
    /// Emit the interactive prompt the recurrence program prints before each case.
    pub prompt: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { prompt: true }
    }
}

impl Problem {
    pub const ALL: [Problem; 5] = [
        Problem::Coprimes,
        Problem::FibCipher,
        Problem::ModifiedFib,
        Problem::BoundedMex,
        Problem::MagicNumber,
    ];

    pub fn id(self) -> u32 {
        match self {
            Problem::Coprimes => 7,
            Problem::FibCipher => 8,
            Problem::ModifiedFib => 9,
            Problem::BoundedMex => 10,
            Problem::MagicNumber => 13,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Problem::Coprimes => "coprimes",
            Problem::FibCipher => "fib-cipher",
            Problem::ModifiedFib => "modified-fib",
            Problem::BoundedMex => "bounded-mex",
            Problem::MagicNumber => "magic-number",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Problem::Coprimes => "Coprime enumerator",
            Problem::FibCipher => "Fibonacci-indexed cipher",
            Problem::ModifiedFib => "Modified Fibonacci",
            Problem::BoundedMex => "Bounded mex",
            Problem::MagicNumber => "Magic numbers",
        }
    }

    pub fn input_format(self) -> &'static str {
        match self {
            Problem::Coprimes => "T, then T integers n",
            Problem::FibCipher => "a single string without whitespace",
            Problem::ModifiedFib => "T, then T pairs `n k`",
            Problem::BoundedMex => "T, then for each case `n x` followed by n integers",
            Problem::MagicNumber => "T, then T integers n",
        }
    }

    pub fn output_format(self) -> &'static str {
        match self {
            Problem::Coprimes => {
                "per case, the integers in [1, n-1] coprime to n, each followed by a space, or 1 if n = 1"
            }
            Problem::FibCipher => "the string with letters at Fibonacci positions shifted",
            Problem::ModifiedFib => {
                "per case, `The {n}th element of the modified Fibonacci sequence is: {a(n)}`"
            }
            Problem::BoundedMex => "per case, the x-th positive integer missing from the list",
            Problem::MagicNumber => "per case, YES if the digital root of n is 1, otherwise NO",
        }
    }

    pub fn solve<I, W>(self, input: &mut I, out: &mut W, opts: &SolveOptions) -> Result<()>
    where
        I: InputStream,
        W: Write,
    {
        debug!(problem = self.name(), "solving");
        match self {
            Problem::Coprimes => solve_coprimes(input, out),
            Problem::FibCipher => solve_fib_cipher(input, out),
            Problem::ModifiedFib => solve_modified_fib(input, out, opts),
            Problem::BoundedMex => solve_bounded_mex(input, out),
            Problem::MagicNumber => solve_magic_number(input, out),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Problem::ALL
            .into_iter()
            .find(|p| p.name() == s || s.parse::<u32>().ok() == Some(p.id()))
            .ok_or_else(|| Error::UnknownProblem(s.to_owned()))
    }
}

fn test_count(input: &mut impl InputStream) -> Result<u64> {
    let t = input.value::<i64>("test count")?;
    // a non-positive count runs no cases
    Ok(t.max(0) as u64)
}

fn solve_coprimes(input: &mut impl InputStream, out: &mut impl Write) -> Result<()> {
    for case in 0..test_count(input)? {
        let n = input.value::<i64>("n")?;
        if n == 1 {
            writeln!(out, "1")?;
            continue;
        }
        let list = gcd::coprimes(n);
        debug!(case, n, found = list.len(), "coprimes");
        write_spaced(out, list)?;
    }
    Ok(())
}

fn solve_fib_cipher(input: &mut impl InputStream, out: &mut impl Write) -> Result<()> {
    let s = input.token().ok_or(Error::UnexpectedEof { expected: "string" })?;
    debug!(len = s.len(), "fib cipher");
    let encoded = fib_cipher::encode(s);
    out.write_all(&encoded)?;
    writeln!(out)?;
    Ok(())
}

fn solve_modified_fib(
    input: &mut impl InputStream,
    out: &mut impl Write,
    opts: &SolveOptions,
) -> Result<()> {
    for case in 0..test_count(input)? {
        if opts.prompt {
            write!(out, "Enter n and k: ")?;
        }
        let n = input.value::<i64>("n")?;
        let k = input.value::<i64>("k")?;
        let result = linear_rec::modified_fib(n, k);
        debug!(case, n, k, result, "modified fib");
        writeln!(
            out,
            "The {}th element of the modified Fibonacci sequence is: {}",
            n, result
        )?;
    }
    Ok(())
}

fn solve_bounded_mex(input: &mut impl InputStream, out: &mut impl Write) -> Result<()> {
    for case in 0..test_count(input)? {
        let n = input.value::<usize>("n")?;
        let x = input.value::<i64>("x")?;
        let values = (0..n)
            .map(|_| input.value::<i64>("array element"))
            .collect::<Result<Vec<_>>>()?;
        let mex = mex::bounded_mex(&values, x)?;
        debug!(case, n, x, mex, "bounded mex");
        writeln!(out, "{}", mex)?;
    }
    Ok(())
}

fn solve_magic_number(input: &mut impl InputStream, out: &mut impl Write) -> Result<()> {
    for case in 0..test_count(input)? {
        let n = input.value::<i64>("n")?;
        let magic = digit_root::is_magic(n);
        debug!(case, n, magic, "magic number");
        writeln!(out, "{}", if magic { "YES" } else { "NO" })?;
    }
    Ok(())
}
