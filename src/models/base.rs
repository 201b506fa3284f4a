//! Post-shaped model, and the universal fallback variant.
//!
//! `Base` carries the declared schema shared by every post-like resource
//! (posts, pages, attachments, custom content types). Records for content
//! types the catalogue doesn't know about are populated into a `Base`, with
//! their unanticipated fields landing in the extension bag.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Base {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_gmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_gmt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The resource's content type (the API's `type` field).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Rendered-text wrapper (`{"rendered": ..., "protected": ...}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_media: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,

    /// Fields the declared schema doesn't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Base {
    /// Assign one source field by name. Declared fields are filled directly;
    /// everything else goes to the extension bag.
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "id" => fields::set_i64(&mut self.id, &mut self.extra, name, value),
            "date" => fields::set_string(&mut self.date, &mut self.extra, name, value),
            "date_gmt" => fields::set_string(&mut self.date_gmt, &mut self.extra, name, value),
            "guid" => fields::set_value(&mut self.guid, value),
            "modified" => fields::set_string(&mut self.modified, &mut self.extra, name, value),
            "modified_gmt" => fields::set_string(&mut self.modified_gmt, &mut self.extra, name, value),
            "slug" => fields::set_string(&mut self.slug, &mut self.extra, name, value),
            "status" => fields::set_string(&mut self.status, &mut self.extra, name, value),
            "type" => fields::set_string(&mut self.kind, &mut self.extra, name, value),
            "link" => fields::set_string(&mut self.link, &mut self.extra, name, value),
            "title" => fields::set_value(&mut self.title, value),
            "content" => fields::set_value(&mut self.content, value),
            "excerpt" => fields::set_value(&mut self.excerpt, value),
            "author" => fields::set_i64(&mut self.author, &mut self.extra, name, value),
            "featured_media" => fields::set_i64(&mut self.featured_media, &mut self.extra, name, value),
            "comment_status" => fields::set_string(&mut self.comment_status, &mut self.extra, name, value),
            "ping_status" => fields::set_string(&mut self.ping_status, &mut self.extra, name, value),
            "sticky" => fields::set_bool(&mut self.sticky, &mut self.extra, name, value),
            "template" => fields::set_string(&mut self.template, &mut self.extra, name, value),
            "format" => fields::set_string(&mut self.format, &mut self.extra, name, value),
            "meta" => fields::set_value(&mut self.meta, value),
            "categories" => fields::set_ids(&mut self.categories, &mut self.extra, name, value),
            "tags" => fields::set_ids(&mut self.tags, &mut self.extra, name, value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }

    /// Rendered title text, if present.
    pub fn title(&self) -> Option<&str> {
        fields::rendered_text(&self.title)
    }

    /// Rendered body text, if present.
    pub fn content(&self) -> Option<&str> {
        fields::rendered_text(&self.content)
    }

    /// Rendered excerpt text, if present.
    pub fn excerpt(&self) -> Option<&str> {
        fields::rendered_text(&self.excerpt)
    }

    /// Publication date parsed from the API's timezone-less format.
    pub fn date(&self) -> Option<NaiveDateTime> {
        fields::parse_date(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declared_fields_fill_directly() {
        let mut base = Base::default();
        base.assign("id", json!(7));
        base.assign("slug", json!("hello-world"));
        base.assign("sticky", json!(true));
        base.assign("categories", json!([3, 5]));
        assert_eq!(base.id, Some(7));
        assert_eq!(base.slug.as_deref(), Some("hello-world"));
        assert_eq!(base.sticky, Some(true));
        assert_eq!(base.categories, Some(vec![3, 5]));
        assert!(base.extra.is_empty());
    }

    #[test]
    fn undeclared_fields_land_in_bag() {
        let mut base = Base::default();
        base.assign("acf", json!({"color": "red"}));
        assert_eq!(base.extra.get("acf"), Some(&json!({"color": "red"})));
    }

    #[test]
    fn mismatched_declared_field_is_kept_verbatim() {
        let mut base = Base::default();
        base.assign("id", json!("seven"));
        assert_eq!(base.id, None);
        assert_eq!(base.extra.get("id"), Some(&json!("seven")));
    }

    #[test]
    fn accessors_read_rendered_wrappers_and_dates() {
        let mut base = Base::default();
        base.assign("title", json!({"rendered": "Hello"}));
        base.assign("date", json!("2024-01-15T10:30:00"));
        assert_eq!(base.title(), Some("Hello"));
        let date = base.date().unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-01-15");
    }
}
