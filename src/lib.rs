//! Solutions to five small judge problems: coprime listing, a Fibonacci-indexed
//! cipher, a modified Fibonacci recurrence, a bounded mex, and digital-root
//! "magic numbers".

pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod mex;
pub mod problem;
pub mod string;

pub use error::{Error, Result};
pub use problem::{Problem, SolveOptions};
