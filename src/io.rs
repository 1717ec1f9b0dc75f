//! Whitespace-separated token input over a buffer read at once.

use std::io::{BufWriter, Read, Write};
use std::str::FromStr;

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.token().ok_or(Error::UnexpectedEof { expected })?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::InvalidToken {
                token: String::from_utf8_lossy(token).into_owned(),
                expected,
            })
    }
}

// cheap whitespace check, also treats control bytes as separators
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(token)
    }
}

pub struct InputAtOnce {
    buf: Box<[u8]>,
    cursor: usize,
}

impl InputAtOnce {
    pub fn new(buf: impl Into<Box<[u8]>>) -> Self {
        Self {
            buf: buf.into(),
            cursor: 0,
        }
    }

    pub fn read_from(mut reader: impl Read) -> Result<Self> {
        let mut buf = vec![];
        reader.read_to_end(&mut buf)?;
        Ok(Self::new(buf))
    }

    fn take(&mut self, n: usize) -> &[u8] {
        let n = n.min(self.buf.len() - self.cursor);
        let slice = &self.buf[self.cursor..self.cursor + n];
        self.cursor += n;
        slice
    }
}

impl InputStream for InputAtOnce {
    fn token(&mut self) -> Option<&[u8]> {
        let skip = self.buf[self.cursor..]
            .iter()
            .position(|&c| !is_whitespace(c))?;
        self.cursor += skip;
        let len = self.buf[self.cursor..]
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.buf.len() - self.cursor);
        Some(self.take(len))
    }
}

pub fn stdin() -> Result<InputAtOnce> {
    InputAtOnce::read_from(std::io::stdin().lock())
}

pub fn stdout() -> BufWriter<std::io::Stdout> {
    BufWriter::new(std::io::stdout())
}

/// Writes every item followed by a space, then a newline.
pub fn write_spaced<W: Write, T: std::fmt::Display>(
    out: &mut W,
    items: impl IntoIterator<Item = T>,
) -> std::io::Result<()> {
    for item in items {
        write!(out, "{} ", item)?;
    }
    writeln!(out)
}
