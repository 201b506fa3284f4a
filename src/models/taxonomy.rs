//! Taxonomy model (the taxonomy itself, not its terms).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Taxonomy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Content types this taxonomy is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_namespace: Option<String>,

    /// Fields the declared schema doesn't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Taxonomy {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "name" => fields::set_string(&mut self.name, &mut self.extra, name, value),
            "slug" => fields::set_string(&mut self.slug, &mut self.extra, name, value),
            "description" => fields::set_string(&mut self.description, &mut self.extra, name, value),
            "types" => fields::set_strings(&mut self.types, &mut self.extra, name, value),
            "hierarchical" => fields::set_bool(&mut self.hierarchical, &mut self.extra, name, value),
            "rest_base" => fields::set_string(&mut self.rest_base, &mut self.extra, name, value),
            "rest_namespace" => fields::set_string(&mut self.rest_namespace, &mut self.extra, name, value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }
}
