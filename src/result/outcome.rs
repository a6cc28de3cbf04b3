//! The failure container

use crate::option::Maybe;

/// Default failure type carried by an [`Outcome`]
pub type Failure = Box<dyn std::error::Error + Send + Sync>;

/// Message used when unwrapping a failed outcome.
const UNWRAP_ERR: &str = "cannot unwrap Outcome when Err";

/// The result of an operation that can fail
///
/// `Ok` carries the value, `Err` carries the failure. Only one is ever
/// present. A failure is an ordinary value: inspect it with [`Outcome::is_err`],
/// [`Outcome::error`] or [`Outcome::get`]. Only [`Outcome::unwrap`] and
/// [`Outcome::expect`] panic, and only when misused on a failure.
///
/// `Outcome` has no serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = Failure> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Build an outcome from a value and an optional failure.
    ///
    /// A present failure wins: the value is dropped, since nothing may read
    /// it once the failure is set.
    pub fn from_pair(value: T, failure: Option<E>) -> Self {
        match failure {
            Some(e) => Outcome::Err(e),
            None => Outcome::Ok(value),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Call `f` with the value on success
    pub fn if_ok<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Outcome::Ok(v) = self {
            f(v);
        }
    }

    /// Call `f` with the failure on error
    pub fn if_err<F>(&self, f: F)
    where
        F: FnOnce(&E),
    {
        if let Outcome::Err(e) = self {
            f(e);
        }
    }

    /// Project the success side: `Some(value)` on success, `None` on failure
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(v) => Maybe::Some(v),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Project the failure side: `Some(failure)` on failure, `None` on success
    pub fn error(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(e) => Maybe::Some(e),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Extract value or failure without panicking
    pub fn get(self) -> Result<T, E> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }

    /// Split into a value and an optional failure.
    ///
    /// A failed outcome yields `T::default()` for the value.
    pub fn into_parts(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Ok(v) => (v, None),
            Outcome::Err(e) => (T::default(), Some(e)),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Prefer [`Outcome::unwrap_or`],
    /// [`Outcome::ok`], [`Outcome::if_ok`] or [`Outcome::get`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => panic!("{}", UNWRAP_ERR),
        }
    }

    /// Return the success value, or `fallback` on failure
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => fallback,
        }
    }

    /// Return the success value, or the result of `supplier` on failure.
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => supplier(),
        }
    }

    /// Return the success value, panicking with `msg` on failure
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => panic!("{}", msg),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.get()
    }
}
