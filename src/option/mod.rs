//! Presence container
//!
//! [`Maybe`] holds a value or nothing. This module also provides the free
//! constructors and the combinators that change the held type:
//! [`map`], [`map_or`], [`flat_map`] and [`flat_map_or`].

mod codec;
mod combinators;
mod maybe;

pub use codec::{from_json, to_json};
pub use combinators::{flat_map, flat_map_or, map, map_or};
pub use maybe::Maybe;

/// Create a container holding `value`
pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::some(value)
}

/// Create an empty container
pub fn none<T>() -> Maybe<T> {
    Maybe::none()
}

/// Create a container holding a clone of `value`, if there is one
pub fn from_nilable<T: Clone>(value: Option<&T>) -> Maybe<T> {
    Maybe::from_nilable(value)
}

/// Create a container holding the reference itself, if there is one
pub fn ptr_from_nilable<T>(value: Option<&T>) -> Maybe<&T> {
    Maybe::ptr_from_nilable(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_constructors() {
        assert_eq!(some(1), Maybe::Some(1));
        assert_eq!(none::<i32>(), Maybe::None);

        let x = 5;
        assert_eq!(from_nilable(Some(&x)), some(5));
        assert_eq!(ptr_from_nilable(Some(&x)), some(&x));
        assert!(from_nilable::<i32>(None).is_none());
    }
}
