//! Free functions that change the success type of an `Outcome`

use super::outcome::Outcome;

/// Convert `Outcome<T, E>` into `Outcome<R, E>` with `f`.
///
/// A failure passes through untouched.
pub fn map<T, R, E, F>(res: Outcome<T, E>, f: F) -> Outcome<R, E>
where
    F: FnOnce(T) -> R,
{
    match res {
        Outcome::Ok(v) => Outcome::Ok(f(v)),
        Outcome::Err(e) => Outcome::Err(e),
    }
}
