//! Output formatting module

pub mod formatter;

pub use formatter::{format_output, OutputFormat};
