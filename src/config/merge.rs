//! Deep merge of configuration layers.
//!
//! Merging operates on raw [`serde_json::Value`] trees rather than typed
//! structs, so a key absent from an override never resets the base value.
//!
//! Rules for each key of the override:
//! - keyed structure over keyed structure: merged recursively
//! - keyed structure over a missing key: taken as is
//! - anything else (primitive, sequence, null): replaces the base wholesale
//!
//! Keys only present in the base are carried through unchanged.

use serde_json::{Map, Value};

/// Marker key of a TOML datetime after conversion to JSON.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

/// Shape of a value as seen by the merger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Keyed,
    Sequence,
    Primitive,
}

impl Shape {
    fn of(value: &Value) -> Self {
        match value {
            Value::Object(map) if is_datetime(map) => Self::Primitive,
            Value::Object(_) => Self::Keyed,
            Value::Array(_) => Self::Sequence,
            _ => Self::Primitive,
        }
    }
}

/// Datetimes are opaque values, never recursed into.
fn is_datetime(map: &Map<String, Value>) -> bool {
    map.len() == 1 && map.contains_key(TOML_DATETIME_KEY)
}

/// Merge `overlay` onto `base`, returning a new value.
///
/// Neither input is modified. A non-keyed overlay replaces `base` entirely.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map))
            if Shape::of(base) == Shape::Keyed && Shape::of(overlay) == Shape::Keyed =>
        {
            Value::Object(merge_maps(base_map, overlay_map))
        }
        _ => overlay.clone(),
    }
}

fn merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut output = base.clone();

    for (key, value) in overlay {
        let merged = match (Shape::of(value), base.get(key)) {
            (Shape::Keyed, Some(existing)) => deep_merge(existing, value),
            _ => value.clone(),
        };
        output.insert(key.clone(), merged);
    }

    output
}

/// Fold several layers onto `base`, later layers taking precedence.
pub fn deep_merge_all<'a>(base: &Value, layers: impl IntoIterator<Item = &'a Value>) -> Value {
    layers
        .into_iter()
        .fold(base.clone(), |acc, layer| deep_merge(&acc, layer))
}
