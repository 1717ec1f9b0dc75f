use std::collections::HashSet;

use tracing::trace;

use crate::error::{Error, Result};

/// Runs the judge's mex loop as written:
///
/// ```text
/// m = 1, c = 1
/// while m in set || c != x:
///     if m not in set: c += 1
///     m += 1
/// ```
///
/// `c` starts at 1 and counts the missing values already stepped over, so the
/// loop halts on the `x`-th positive integer absent from `values`. For `x < 1`
/// it would never halt.
pub fn bounded_mex(values: &[i64], x: i64) -> Result<i64> {
    if x < 1 {
        return Err(Error::UnreachableTarget(x));
    }
    let elements: HashSet<i64> = values.iter().copied().collect();

    let mut mex = 1;
    let mut count = 1;
    while elements.contains(&mex) || count != x {
        if !elements.contains(&mex) {
            count += 1;
        }
        mex += 1;
        trace!(mex, count, "mex step");
    }
    Ok(mex)
}
