//! The presence container
//!
//! A `Maybe` either holds a value (`Some`) or holds nothing (`None`). There is
//! no payload behind the absent variant, so nothing can read one by mistake.

/// Message used when unwrapping an absent container.
const UNWRAP_NONE: &str = "cannot unwrap none/nil value";

/// A container that may or may not hold a value
///
/// Build one with [`Maybe::some`], [`Maybe::none`], [`Maybe::from_nilable`] or
/// [`Maybe::ptr_from_nilable`] (or the matching free functions in
/// [`crate::option`]).
///
/// `some` accepts any value, including values that are themselves "empty" such
/// as `None::<i32>` or an empty `Maybe`. Those produce a present container
/// holding an empty value. There is no untyped null that could slip through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// Holds a value
    Some(T),
    /// Holds nothing
    None,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    /// Create a container holding `value`
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Create an empty container
    pub fn none() -> Self {
        Maybe::None
    }

    /// Create a container from a borrowed value, cloning it when present.
    ///
    /// The container owns its copy; later changes to the original are not
    /// visible through it.
    pub fn from_nilable(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(v) => Maybe::Some(v.clone()),
            None => Maybe::None,
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Maybe::None)
    }

    /// Call `f` with the value if one is present
    pub fn if_some<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Maybe::Some(v) = self {
            f(v);
        }
    }

    /// Call `f` if the container is empty
    pub fn if_none<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
    }

    /// Keep the value only if `predicate` accepts it
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        if let Maybe::Some(v) = self {
            if predicate(&v) {
                return Maybe::Some(v);
            }
        }
        Maybe::None
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Extract the value without panicking
    pub fn get(self) -> Option<T> {
        match self {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }

    /// Split into the value and a presence flag.
    ///
    /// An empty container yields `T::default()` alongside `false`.
    pub fn into_parts(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Maybe::Some(v) => (v, true),
            Maybe::None => (T::default(), false),
        }
    }

    /// Return the value.
    ///
    /// # Panics
    ///
    /// Panics if the container is empty. Check [`Maybe::is_some`] first, or use
    /// [`Maybe::unwrap_or`] / [`Maybe::if_some`] instead.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => panic!("{}", UNWRAP_NONE),
        }
    }

    /// Return the value, or `fallback` when empty
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => fallback,
        }
    }

    /// Return the value, or the result of `supplier` when empty.
    ///
    /// `supplier` only runs on the empty path.
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => supplier(),
        }
    }

    /// Return the value, panicking with `msg` when empty.
    ///
    /// Useful when a required setting or field must be present.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => panic!("{}", msg),
        }
    }
}

impl<'a, T> Maybe<&'a T> {
    /// Create a container holding the reference itself (no copy)
    pub fn ptr_from_nilable(value: Option<&'a T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_some() {
        let opt = Maybe::some(42);
        assert!(opt.is_some());
        assert!(!opt.is_none());
        assert_eq!(opt.unwrap(), 42);
    }

    #[test]
    fn test_none() {
        let opt = Maybe::<i32>::none();
        assert!(opt.is_none());
        assert!(!opt.is_some());
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }

    #[test]
    #[should_panic(expected = "cannot unwrap none/nil value")]
    fn test_unwrap_none_panics() {
        Maybe::<i32>::none().unwrap();
    }

    #[test]
    fn test_some_of_empty_value_is_present() {
        let inner: Option<i32> = None;
        let opt = Maybe::some(inner);
        assert!(opt.is_some());
        assert_eq!(opt.unwrap(), None);

        let nested = Maybe::some(Maybe::<i32>::None);
        assert!(nested.is_some());
    }

    #[test]
    fn test_from_nilable() {
        assert!(Maybe::<String>::from_nilable(None).is_none());

        let mut name = String::from("Billy");
        let opt = Maybe::from_nilable(Some(&name));
        name.push_str(" Bob");

        assert_eq!(opt.unwrap(), "Billy");
        assert_eq!(name, "Billy Bob");
    }

    #[test]
    fn test_ptr_from_nilable() {
        let value = vec![1, 2, 3];
        let opt = Maybe::ptr_from_nilable(Some(&value));
        assert!(std::ptr::eq(opt.unwrap(), &value));

        assert!(Maybe::<&Vec<i32>>::ptr_from_nilable(None).is_none());
    }

    #[test]
    fn test_if_some_and_if_none() {
        let hits = Cell::new(0);

        Maybe::some(5).if_some(|v| hits.set(hits.get() + *v));
        Maybe::<i32>::none().if_some(|_| hits.set(100));
        assert_eq!(hits.get(), 5);

        Maybe::<i32>::none().if_none(|| hits.set(hits.get() + 1));
        Maybe::some(1).if_none(|| hits.set(100));
        assert_eq!(hits.get(), 6);
    }

    #[test]
    fn test_filter() {
        let billy = Maybe::some("Billy Bob".to_string());
        assert_eq!(
            billy.filter(|s| s.contains("Billy")),
            Maybe::some("Billy Bob".to_string())
        );

        let joe = Maybe::some("Joe Joe".to_string());
        assert_eq!(joe.filter(|s| s.contains("Billy")), Maybe::none());

        let called = Cell::new(false);
        let empty = Maybe::<String>::none().filter(|_| {
            called.set(true);
            true
        });
        assert!(empty.is_none());
        assert!(!called.get());
    }

    #[test]
    fn test_filter_leaves_receiver_untouched() {
        let opt = Maybe::some(3);
        let filtered = opt.filter(|v| *v > 10);
        assert!(filtered.is_none());
        assert_eq!(opt, Maybe::some(3));
    }

    #[test]
    fn test_get_and_into_parts() {
        assert_eq!(Maybe::some(7).get(), Some(7));
        assert_eq!(Maybe::<i32>::none().get(), None);

        assert_eq!(Maybe::some(7).into_parts(), (7, true));
        assert_eq!(Maybe::<i32>::none().into_parts(), (0, false));
    }

    #[test]
    fn test_unwrap_or() {
        assert_eq!(Maybe::some(1).unwrap_or(9), 1);
        assert_eq!(Maybe::none().unwrap_or(9), 9);
    }

    #[test]
    fn test_unwrap_or_else_is_lazy() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            9
        };

        assert_eq!(Maybe::some(1).unwrap_or_else(supplier), 1);
        assert_eq!(calls.get(), 0);

        assert_eq!(Maybe::none().unwrap_or_else(supplier), 9);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_expect_some() {
        assert_eq!(Maybe::some("port").expect("port is required"), "port");
    }

    #[test]
    #[should_panic(expected = "port is required")]
    fn test_expect_none_panics_with_message() {
        Maybe::<u16>::none().expect("port is required");
    }

    #[test]
    fn test_std_conversions() {
        let opt: Maybe<i32> = Some(4).into();
        assert_eq!(opt, Maybe::some(4));

        let back: Option<i32> = Maybe::<i32>::none().into();
        assert_eq!(back, None);
    }
}
