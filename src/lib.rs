//! Sumbox - presence and failure containers
//!
//! [`Maybe`] holds a value or nothing, [`Outcome`] holds a value or a failure.
//! Both come with the same inspection and extraction methods, and free
//! combinators in [`option`] and [`result`] change the held type without
//! matching by hand. `Maybe` encodes to JSON as its value, or `null` when
//! empty.
//!
//! # Example
//!
//! ```
//! use sumbox::option::{self, Maybe};
//! use sumbox::result::{self, Outcome};
//!
//! let port = option::map(Maybe::some("8080"), |p| p.len());
//! assert_eq!(port.unwrap_or(0), 4);
//!
//! let parsed: Outcome<u16, std::num::ParseIntError> = "8080".parse::<u16>().into();
//! let next = result::map(parsed, |p| p + 1);
//! assert_eq!(next.unwrap(), 8081);
//!
//! assert_eq!(option::to_json(&Maybe::<u16>::none()).unwrap(), "null");
//! ```

pub mod cli;
pub mod error;
pub mod inspect;
pub mod option;
pub mod output;
pub mod result;

pub use error::{Result, SumboxError};
pub use option::Maybe;
pub use output::{format_output, OutputFormat};
pub use result::{Failure, Outcome};
