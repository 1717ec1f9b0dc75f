use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid token {token:?}, expected {expected}")]
    InvalidToken { token: String, expected: &'static str },

    #[error("unknown problem {0:?}")]
    UnknownProblem(String),

    /// The mex counter starts at 1 and only grows, so a target below 1 is never met.
    #[error("target count {0} is never reached")]
    UnreachableTarget(i64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
