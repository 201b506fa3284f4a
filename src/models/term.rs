//! Taxonomy term model (categories, tags, and custom taxonomy terms).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Term {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Number of published posts carrying this term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Slug of the taxonomy this term belongs to (`category`, `post_tag`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Fields the declared schema doesn't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Term {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "id" => fields::set_i64(&mut self.id, &mut self.extra, name, value),
            "count" => fields::set_i64(&mut self.count, &mut self.extra, name, value),
            "description" => fields::set_string(&mut self.description, &mut self.extra, name, value),
            "link" => fields::set_string(&mut self.link, &mut self.extra, name, value),
            "name" => fields::set_string(&mut self.name, &mut self.extra, name, value),
            "slug" => fields::set_string(&mut self.slug, &mut self.extra, name, value),
            "taxonomy" => fields::set_string(&mut self.taxonomy, &mut self.extra, name, value),
            "parent" => fields::set_i64(&mut self.parent, &mut self.extra, name, value),
            "meta" => fields::set_value(&mut self.meta, value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }
}
