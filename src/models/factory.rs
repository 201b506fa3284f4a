//! The classify-then-populate model factory.
//!
//! `create` turns one untyped API record into a populated model instance in
//! two steps:
//!
//! - **classify**: inspect marker fields to pick a variant, apply any caller
//!   override, then confirm the choice is constructible (unknown names
//!   degrade to `Base`)
//! - **populate**: copy every field of the record onto the fresh instance,
//!   entity-decoding `rendered` wrappers on the way
//!
//! Classification never fails: a record of any shape comes back as *some*
//! populated variant, worst case a `Base`.

use serde_json::{Map, Value};

use crate::models::Model;
use crate::models::registry::{ClassOverride, VariantKind};

/// Classify `record`, construct the resolved variant, and populate it with
/// every field the record carries.
pub fn create(record: &Map<String, Value>, class_override: Option<&ClassOverride>) -> Model {
    let kind = resolve_variant(record, class_override);
    let mut model = kind.construct();
    populate(&mut model, record);
    model
}

/// Copy every field of `record` onto `model`.
///
/// Values are copied whole; the only transformation is entity-decoding the
/// `rendered` sub-field of wrapper objects. Fields the variant doesn't
/// declare land in its extension bag, so nothing is dropped.
pub fn populate(model: &mut Model, record: &Map<String, Value>) {
    for (name, value) in record {
        model.assign(name, decode_rendered(value.clone()));
    }
}

/// Resolve the concrete variant for a record: marker detection, then
/// override resolution, then the registry existence check (last, so a
/// dangling override degrades to `Base` instead of failing).
fn resolve_variant(record: &Map<String, Value>, class_override: Option<&ClassOverride>) -> VariantKind {
    let detected = detect_type(record);

    let override_name = match class_override {
        Some(ClassOverride::Variant(name)) => Some(name.as_str()),
        // Keyed by the raw detected type string, not the mapped variant name.
        Some(ClassOverride::ByType(map)) => map.get(&detected).map(String::as_str),
        None => None,
    };

    let name = override_name.unwrap_or_else(|| builtin_variant(&detected).name());
    VariantKind::from_name(name).unwrap_or(VariantKind::Base)
}

/// Detect the record's type from its field set.
///
/// The checks run in a fixed order and later matches overwrite earlier ones;
/// the order encodes real field-set ambiguity in the upstream API (e.g. both
/// taxonomies and content types carry `hierarchical`) and must not be
/// reordered.
fn detect_type(record: &Map<String, Value>) -> String {
    let mut kind = "post";

    if has(record, "avatar_urls") {
        kind = "user";
    }
    if has(record, "media_type") {
        kind = "media";
    }
    if has(record, "hierarchical") && has(record, "types") {
        kind = "taxonomy";
    }
    if has(record, "hierarchical") && has(record, "taxonomies") {
        kind = "posttype";
    }
    if has(record, "taxonomy") {
        kind = "term";
    }
    if record.get("type").and_then(Value::as_str) == Some("page") {
        kind = "page";
    }

    // Anything still post-shaped adopts its own `type` field verbatim, which
    // is how custom content types keep their name through classification.
    if kind == "post" {
        if let Some(custom) = record.get("type").and_then(Value::as_str) {
            return custom.to_string();
        }
    }

    kind.to_string()
}

/// Built-in type-name → variant mapping. Unrecognized names (custom content
/// types included) map to `Base`.
fn builtin_variant(kind: &str) -> VariantKind {
    match kind {
        "user" => VariantKind::User,
        "term" => VariantKind::Term,
        "taxonomy" => VariantKind::Taxonomy,
        "media" => VariantKind::Attachment,
        "page" => VariantKind::Page,
        "posttype" => VariantKind::PostType,
        _ => VariantKind::Base,
    }
}

/// Marker presence: a field set to `null` does not count.
fn has(record: &Map<String, Value>, key: &str) -> bool {
    matches!(record.get(key), Some(v) if !v.is_null())
}

/// Entity-decode the `rendered` sub-field of wrapper objects, leaving
/// sibling fields (and every other value shape) untouched.
fn decode_rendered(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        if let Some(Value::String(text)) = map.get_mut("rendered") {
            *text = html_escape::decode_html_entities(text).into_owned();
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn markerless_record_classifies_base() {
        let rec = record(json!({"id": 1, "title": {"rendered": "Post"}}));
        assert_eq!(create(&rec, None).variant(), VariantKind::Base);
    }

    #[test]
    fn marker_fields_pick_variants() {
        let user = record(json!({"avatar_urls": {"96": "u"}}));
        assert_eq!(create(&user, None).variant(), VariantKind::User);

        let media = record(json!({"media_type": "image"}));
        assert_eq!(create(&media, None).variant(), VariantKind::Attachment);

        let taxonomy = record(json!({"hierarchical": true, "types": ["post"]}));
        assert_eq!(create(&taxonomy, None).variant(), VariantKind::Taxonomy);

        let post_type = record(json!({"hierarchical": false, "taxonomies": ["category"]}));
        assert_eq!(create(&post_type, None).variant(), VariantKind::PostType);

        let term = record(json!({"taxonomy": "category"}));
        assert_eq!(create(&term, None).variant(), VariantKind::Term);
    }

    #[test]
    fn page_type_wins_regardless_of_other_fields() {
        let rec = record(json!({"taxonomy": "category", "type": "page"}));
        assert_eq!(create(&rec, None).variant(), VariantKind::Page);
    }

    #[test]
    fn later_markers_overwrite_earlier_ones() {
        // Term check runs after the taxonomy check, so a record carrying both
        // field sets is a term.
        let rec = record(json!({
            "hierarchical": true,
            "types": ["post"],
            "taxonomy": "category"
        }));
        assert_eq!(create(&rec, None).variant(), VariantKind::Term);
    }

    #[test]
    fn null_markers_do_not_count() {
        let rec = record(json!({"taxonomy": null, "avatar_urls": null}));
        assert_eq!(create(&rec, None).variant(), VariantKind::Base);
    }

    #[test]
    fn unknown_custom_type_falls_back_to_base_and_keeps_its_name() {
        let rec = record(json!({"type": "event", "id": 12}));
        let model = create(&rec, None);
        assert_eq!(model.variant(), VariantKind::Base);
        assert_eq!(model.field("type"), Some(json!("event")));
    }

    #[test]
    fn single_variant_override_beats_detection() {
        let rec = record(json!({"avatar_urls": {"96": "u"}}));
        let force = ClassOverride::variant("attachment");
        assert_eq!(create(&rec, Some(&force)).variant(), VariantKind::Attachment);
    }

    #[test]
    fn mapping_override_wins_only_for_matching_type() {
        let mapping = ClassOverride::by_type([("book", "page")]);

        let book = record(json!({"type": "book"}));
        assert_eq!(create(&book, Some(&mapping)).variant(), VariantKind::Page);

        let movie = record(json!({"type": "movie"}));
        assert_eq!(create(&movie, Some(&mapping)).variant(), VariantKind::Base);
    }

    #[test]
    fn mapping_override_keys_match_raw_type_strings() {
        // The user path never sets the type string to "user" (the avatar
        // marker maps straight to the variant), so a "user" key can't match.
        let mapping = ClassOverride::by_type([("user", "page")]);
        let rec = record(json!({"avatar_urls": {"96": "u"}}));
        assert_eq!(create(&rec, Some(&mapping)).variant(), VariantKind::User);

        // "post" is the default type string, so a "post" key does match.
        let mapping = ClassOverride::by_type([("post", "page")]);
        let rec = record(json!({"id": 1}));
        assert_eq!(create(&rec, Some(&mapping)).variant(), VariantKind::Page);
    }

    #[test]
    fn dangling_override_degrades_to_base() {
        let rec = record(json!({"avatar_urls": {"96": "u"}}));
        let force = ClassOverride::variant("event");
        let model = create(&rec, Some(&force));
        assert_eq!(model.variant(), VariantKind::Base);
        // Fields are still fully copied.
        assert_eq!(model.field("avatar_urls"), Some(json!({"96": "u"})));

        let mapping = ClassOverride::by_type([("post", "nonexistent")]);
        let rec = record(json!({"id": 1}));
        assert_eq!(create(&rec, Some(&mapping)).variant(), VariantKind::Base);
    }

    #[test]
    fn every_source_field_is_copied() {
        let rec = record(json!({
            "id": 5,
            "status": "publish",
            "custom_number": 3.5,
            "custom_list": [1, "two", null],
            "custom_nested": {"a": {"b": 2}},
            "nothing": null
        }));
        let model = create(&rec, None);
        for (name, value) in &rec {
            assert_eq!(model.field(name).as_ref(), Some(value), "field {name} lost or changed");
        }
    }

    #[test]
    fn rendered_subfields_are_entity_decoded_in_place() {
        let rec = record(json!({
            "title": {"rendered": "A &amp; B", "protected": false},
            "content": {"rendered": "2 &lt; 3 &gt; 1"},
            "plain": "A &amp; B"
        }));
        let model = create(&rec, None);
        assert_eq!(
            model.field("title"),
            Some(json!({"rendered": "A & B", "protected": false}))
        );
        assert_eq!(model.field("content"), Some(json!({"rendered": "2 < 3 > 1"})));
        // Only `rendered` wrappers are transformed.
        assert_eq!(model.field("plain"), Some(json!("A &amp; B")));
    }

    #[test]
    fn rendered_decode_skips_non_string_rendered() {
        let rec = record(json!({"odd": {"rendered": 7, "other": "x"}}));
        let model = create(&rec, None);
        assert_eq!(model.field("odd"), Some(json!({"rendered": 7, "other": "x"})));
    }

    #[test]
    fn population_is_idempotent() {
        let rec = record(json!({
            "taxonomy": "category",
            "id": 2,
            "name": "News",
            "custom": {"rendered": "x &amp; y"}
        }));
        let first = create(&rec, None);
        let second = create(&rec, None);
        assert_eq!(first, second);

        // Re-populating an already-populated instance changes nothing either.
        let mut repopulated = first.clone();
        populate(&mut repopulated, &rec);
        assert_eq!(repopulated, first);
    }

    #[test]
    fn mismatched_declared_fields_survive_in_the_bag() {
        let rec = record(json!({"id": "not-a-number", "taxonomy": "category"}));
        let model = create(&rec, None);
        assert_eq!(model.variant(), VariantKind::Term);
        assert_eq!(model.field("id"), Some(json!("not-a-number")));
    }
}
