//! Document inspection
//!
//! Reads a JSON document into a `Maybe<Value>` and walks dotted paths through
//! it. Each step is a `flat_map`, so a missing key or index anywhere along the
//! path leaves the lookup empty instead of failing.

use regex::Regex;
use serde_json::Value;

use crate::error::{Result, SumboxError};
use crate::option::{self, Maybe};
use crate::result::Outcome;

/// Decode a JSON document. Empty input and `null` give `None`.
pub fn decode_document(input: &str) -> Result<Maybe<Value>> {
    let doc = option::from_json::<Value>(input.as_bytes())?;
    log::debug!("decoded document, present: {}", doc.is_some());
    Ok(doc)
}

/// Split a dotted path such as `servers.0.host` into its segments.
pub fn parse_path(path: &str) -> Result<Vec<String>> {
    if path.is_empty() {
        return Ok(Vec::new());
    }

    path.split('.')
        .map(|segment| {
            if segment.is_empty() {
                Err(SumboxError::InvalidPath(path.to_string()))
            } else {
                Ok(segment.to_string())
            }
        })
        .collect()
}

/// Look up one segment inside a value.
///
/// Objects are indexed by key and arrays by position. A value held at a key
/// as `null` counts as absent.
fn step(value: Value, segment: &str) -> Maybe<Value> {
    let child = match value {
        Value::Object(mut map) => map.remove(segment),
        Value::Array(mut items) => match segment.parse::<usize>() {
            Ok(index) if index < items.len() => Some(items.swap_remove(index)),
            _ => None,
        },
        _ => None,
    };

    option::flat_map(Maybe::from(child), |v| match v {
        Value::Null => Maybe::none(),
        other => Maybe::some(other),
    })
}

/// Walk `segments` through `doc`
pub fn lookup(doc: Maybe<Value>, segments: &[String]) -> Maybe<Value> {
    segments.iter().fold(doc, |current, segment| {
        let found = option::flat_map(current, |v| step(v, segment));
        log::trace!("segment {:?} present: {}", segment, found.is_some());
        found
    })
}

pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(pattern)?)
}

/// Keep a string value only if it matches `pattern`. Other values pass through.
pub fn filter_matching(found: Maybe<Value>, pattern: &Regex) -> Maybe<Value> {
    found.filter(|v| match v {
        Value::String(s) => pattern.is_match(s),
        _ => true,
    })
}

/// Parse a fallback given on the command line.
///
/// Valid JSON is used as is; anything else is taken as a plain string.
pub fn parse_fallback(raw: &str) -> Value {
    let parsed: Outcome<Value, serde_json::Error> = serde_json::from_str::<Value>(raw).into();
    parsed.unwrap_or_else(|| Value::String(raw.to_string()))
}
