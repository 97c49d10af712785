//! Helpers shared by the scheme- and rule-level property-list marshaling.

use plist::{Dictionary, Value};
use tracing::warn;

use crate::scheme::color::Color;

/// Copies `dict[key]` into `color` when it holds a parseable hex string.
/// Absent keys, non-string values, and malformed strings leave the previous
/// value in place (malformed strings are logged).
pub(crate) fn assign_color(color: &mut Color, dict: &Dictionary, key: &str) {
    let Some(text) = dict.get(key).and_then(Value::as_string) else {
        return;
    };
    match Color::from_hex(text) {
        Ok(parsed) => *color = parsed,
        Err(err) => warn!(key, value = text, "ignoring malformed color: {err}"),
    }
}

/// Stores `color` under `key` as a hex string, but only when it is visible.
/// Invisible colors are dropped from the serialized form entirely.
pub(crate) fn put_color_if_visible(dict: &mut Dictionary, key: &str, color: Color) {
    if color.is_visible() {
        dict.insert(key.to_owned(), Value::String(color.to_hex()));
    }
}
