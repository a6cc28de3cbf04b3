//! Output formatting

use serde_json::Value;

use crate::option::{self, Maybe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

pub fn format_output(found: &Maybe<Value>, format: &OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Human => format_human(found, pretty),
        OutputFormat::Json => format_json(found, pretty),
    }
}

fn render(value: &Value, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_else(|_| "null".to_string())
}

/// `some: <value>` or `none`
pub fn format_human(found: &Maybe<Value>, pretty: bool) -> String {
    option::map_or(found.as_ref(), "none".to_string(), |v| {
        format!("some: {}", render(v, pretty))
    })
}

/// The value itself, or `null` when absent
pub fn format_json(found: &Maybe<Value>, pretty: bool) -> String {
    let encoded = if pretty {
        serde_json::to_string_pretty(found)
    } else {
        serde_json::to_string(found)
    };
    encoded.unwrap_or_else(|_| "null".to_string())
}
