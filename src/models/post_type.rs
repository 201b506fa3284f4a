//! Content type model (`post`, `page`, `attachment`, and custom types).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_archive: Option<bool>,
    /// Taxonomies attached to this content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_namespace: Option<String>,

    /// Fields the declared schema doesn't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostType {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "name" => fields::set_string(&mut self.name, &mut self.extra, name, value),
            "slug" => fields::set_string(&mut self.slug, &mut self.extra, name, value),
            "description" => fields::set_string(&mut self.description, &mut self.extra, name, value),
            "hierarchical" => fields::set_bool(&mut self.hierarchical, &mut self.extra, name, value),
            "has_archive" => fields::set_bool(&mut self.has_archive, &mut self.extra, name, value),
            "taxonomies" => fields::set_strings(&mut self.taxonomies, &mut self.extra, name, value),
            "icon" => fields::set_string(&mut self.icon, &mut self.extra, name, value),
            "rest_base" => fields::set_string(&mut self.rest_base, &mut self.extra, name, value),
            "rest_namespace" => fields::set_string(&mut self.rest_namespace, &mut self.extra, name, value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }
}
