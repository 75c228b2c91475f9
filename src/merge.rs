//! Locale overlay merging.
//!
//! The merge is overlay-dominant: the overlay decides what changes, the base
//! supplies everything the overlay leaves alone. Only objects merge; every
//! other overlay value replaces the base value wholesale. In particular an
//! array in the overlay replaces a base array in its entirety; overrides that
//! touch a list must restate the whole list. Element-wise list merging is
//! deliberately unsupported: callers rely on replacement semantics, so
//! changing it would alter generated output.

use serde_json::{Map, Value};

/// Merge `overlay` over `base`, returning the combined document.
///
/// `base` is never mutated and can be reused against further overlays.
pub fn merge(base: &Value, overlay: &Value) -> Value {
    let Value::Object(src) = overlay else {
        // non-object overlays (scalars, arrays) win outright, top level included
        return overlay.clone();
    };
    let mut dest = match base {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };
    merge_into(&mut dest, src);
    Value::Object(dest)
}

fn merge_into(dest: &mut Map<String, Value>, src: &Map<String, Value>) {
    for (key, value) in src {
        if let Value::Object(src_fields) = value {
            if let Some(Value::Object(dest_fields)) = dest.get_mut(key) {
                merge_into(dest_fields, src_fields);
                continue;
            }
        }
        dest.insert(key.clone(), value.clone());
    }
}

// -------------------------------- Tests ---------------------------------- //
