//! Failure container
//!
//! [`Outcome`] holds either a success value or a failure. The free functions
//! here build outcomes and [`map`] changes the success type.

mod combinators;
mod outcome;

pub use combinators::map;
pub use outcome::{Failure, Outcome};

/// Create a successful outcome
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Create a failed outcome
pub fn err<T, E>(failure: E) -> Outcome<T, E> {
    Outcome::Err(failure)
}

/// Create an outcome from a value and an optional failure
pub fn from_pair<T, E>(value: T, failure: Option<E>) -> Outcome<T, E> {
    Outcome::from_pair(value, failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::Maybe;

    #[test]
    fn test_free_constructors() {
        let good: Outcome<i32> = ok(1);
        assert!(good.is_ok());

        let bad: Outcome<i32> = err("nope".into());
        assert!(bad.is_err());
        assert_eq!(bad.ok(), Maybe::none());

        let paired: Outcome<i32, &str> = from_pair(3, Some("late"));
        assert_eq!(paired, Outcome::Err("late"));
    }

    #[test]
    fn test_parse_failure_as_value() {
        let res: Outcome<u16, std::num::ParseIntError> = "70000".parse::<u16>().into();
        assert!(res.is_err());
        assert_eq!(map(res, |p| p + 1).unwrap_or(0), 0);
    }
}
