//! Media attachment model: the post-shaped core plus media fields.

use serde::Serialize;
use serde_json::Value;

use crate::models::Base;
use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attachment {
    /// Post-shaped core (id, dates, title, ...). Serialized flat.
    #[serde(flatten)]
    pub core: Base,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Rendered-text wrapper, like `title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<Value>,
    /// `image`, `file`, `video`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size/exif breakdown; shape varies by media type, kept raw.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Id of the post this media is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<i64>,
}

impl Attachment {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "alt_text" => fields::set_string(&mut self.alt_text, &mut self.core.extra, name, value),
            "caption" => fields::set_value(&mut self.caption, value),
            "media_type" => fields::set_string(&mut self.media_type, &mut self.core.extra, name, value),
            "mime_type" => fields::set_string(&mut self.mime_type, &mut self.core.extra, name, value),
            "media_details" => fields::set_value(&mut self.media_details, value),
            "source_url" => fields::set_string(&mut self.source_url, &mut self.core.extra, name, value),
            "post" => fields::set_i64(&mut self.post, &mut self.core.extra, name, value),
            _ => self.core.assign(name, value),
        }
    }

    /// Rendered caption text, if present.
    pub fn caption(&self) -> Option<&str> {
        fields::rendered_text(&self.caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_fields_and_core_fields_coexist() {
        let mut media = Attachment::default();
        media.assign("id", json!(31));
        media.assign("media_type", json!("image"));
        media.assign("source_url", json!("https://example.com/cat.jpg"));
        media.assign("caption", json!({"rendered": "A cat"}));
        assert_eq!(media.core.id, Some(31));
        assert_eq!(media.media_type.as_deref(), Some("image"));
        assert_eq!(media.caption(), Some("A cat"));
    }
}
