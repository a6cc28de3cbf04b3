//! Free functions that change the type held by a `Maybe`

use super::maybe::Maybe;

/// Convert `Maybe<T>` into `Maybe<R>` with `f`. `None` stays `None`.
pub fn map<T, R, F>(opt: Maybe<T>, f: F) -> Maybe<R>
where
    F: FnOnce(T) -> R,
{
    match opt {
        Maybe::Some(v) => Maybe::Some(f(v)),
        Maybe::None => Maybe::None,
    }
}

/// Apply `f` to the value, or return `fallback` when empty.
///
/// Both branches return a plain `R`, not a container.
pub fn map_or<T, R, F>(opt: Maybe<T>, fallback: R, f: F) -> R
where
    F: FnOnce(T) -> R,
{
    match opt {
        Maybe::Some(v) => f(v),
        Maybe::None => fallback,
    }
}

/// Like [`map`], except `f` decides whether the result is present.
pub fn flat_map<T, R, F>(opt: Maybe<T>, f: F) -> Maybe<R>
where
    F: FnOnce(T) -> Maybe<R>,
{
    match opt {
        Maybe::Some(v) => f(v),
        Maybe::None => Maybe::None,
    }
}

/// Like [`flat_map`], but an empty input yields `Some(fallback)`.
///
/// Unlike [`map_or`] the fallback comes back wrapped, while a present input
/// returns whatever `f` produced, `None` included.
pub fn flat_map_or<T, R, F>(opt: Maybe<T>, fallback: R, f: F) -> Maybe<R>
where
    F: FnOnce(T) -> Maybe<R>,
{
    match opt {
        Maybe::Some(v) => f(v),
        Maybe::None => Maybe::Some(fallback),
    }
}
