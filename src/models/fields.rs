//! Lenient field-assignment helpers shared by the model variants.
//!
//! Population must never fail: a source value that does not match the
//! declared type of a field is kept verbatim in the variant's extension bag
//! under the same name, so no field is ever dropped.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

/// Assign an integer field, stashing non-integer values in the bag.
pub(crate) fn set_i64(slot: &mut Option<i64>, bag: &mut Map<String, Value>, name: &str, value: Value) {
    match value.as_i64() {
        Some(v) => *slot = Some(v),
        None => stash(bag, name, value),
    }
}

/// Assign a boolean field, stashing non-boolean values in the bag.
pub(crate) fn set_bool(slot: &mut Option<bool>, bag: &mut Map<String, Value>, name: &str, value: Value) {
    match value.as_bool() {
        Some(v) => *slot = Some(v),
        None => stash(bag, name, value),
    }
}

/// Assign a string field, stashing non-string values in the bag.
pub(crate) fn set_string(slot: &mut Option<String>, bag: &mut Map<String, Value>, name: &str, value: Value) {
    match value {
        Value::String(v) => *slot = Some(v),
        other => stash(bag, name, other),
    }
}

/// Assign an id-list field (e.g. `categories`), stashing anything that is not
/// an array of integers.
pub(crate) fn set_ids(slot: &mut Option<Vec<i64>>, bag: &mut Map<String, Value>, name: &str, value: Value) {
    match serde_json::from_value::<Vec<i64>>(value.clone()) {
        Ok(v) => *slot = Some(v),
        Err(_) => stash(bag, name, value),
    }
}

/// Assign a string-list field (e.g. `types`), stashing anything else.
pub(crate) fn set_strings(slot: &mut Option<Vec<String>>, bag: &mut Map<String, Value>, name: &str, value: Value) {
    match serde_json::from_value::<Vec<String>>(value.clone()) {
        Ok(v) => *slot = Some(v),
        Err(_) => stash(bag, name, value),
    }
}

/// Assign a structured field kept as raw JSON (rendered wrappers, metadata
/// maps, avatar URL maps). Accepts any shape.
pub(crate) fn set_value(slot: &mut Option<Value>, value: Value) {
    *slot = Some(value);
}

fn stash(bag: &mut Map<String, Value>, name: &str, value: Value) {
    bag.insert(name.to_string(), value);
}

/// Pull the `rendered` sub-string out of a rendered-text wrapper field.
pub(crate) fn rendered_text(value: &Option<Value>) -> Option<&str> {
    value.as_ref()?.get("rendered")?.as_str()
}

/// Parse the REST API's timezone-less date format (`2024-01-15T10:30:00`).
pub(crate) fn parse_date(value: &Option<String>) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.as_deref()?, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Uniform get-by-name over declared fields and the extension bag.
///
/// Variants serialize to a single flat JSON object (the bag is flattened and
/// unset declared fields are skipped), so a serialize-then-index lookup sees
/// exactly the populated field set.
pub(crate) fn lookup<T: Serialize>(model: &T, name: &str) -> Option<Value> {
    match serde_json::to_value(model) {
        Ok(Value::Object(map)) => map.get(name).cloned(),
        _ => None,
    }
}

/// All populated field names, sorted.
pub(crate) fn field_names<T: Serialize>(model: &T) -> Vec<String> {
    match serde_json::to_value(model) {
        Ok(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mismatched_scalar_lands_in_bag() {
        let mut slot = None;
        let mut bag = Map::new();
        set_i64(&mut slot, &mut bag, "id", json!("not-a-number"));
        assert_eq!(slot, None);
        assert_eq!(bag.get("id"), Some(&json!("not-a-number")));
    }

    #[test]
    fn matching_scalar_fills_slot_and_skips_bag() {
        let mut slot = None;
        let mut bag = Map::new();
        set_i64(&mut slot, &mut bag, "id", json!(42));
        assert_eq!(slot, Some(42));
        assert!(bag.is_empty());
    }

    #[test]
    fn rendered_text_reads_wrapper() {
        let wrapped = Some(json!({"rendered": "Hello", "protected": false}));
        assert_eq!(rendered_text(&wrapped), Some("Hello"));
        assert_eq!(rendered_text(&Some(json!("bare string"))), None);
        assert_eq!(rendered_text(&None), None);
    }

    #[test]
    fn parse_date_handles_rest_format() {
        let date = Some("2024-01-15T10:30:00".to_string());
        let parsed = parse_date(&date).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");
        assert_eq!(parse_date(&Some("yesterday".to_string())), None);
    }
}
