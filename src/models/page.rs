//! Page model: the post-shaped core plus page hierarchy fields.

use serde::Serialize;
use serde_json::Value;

use crate::models::Base;
use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Post-shaped core (id, dates, title, content, ...). Serialized flat,
    /// so a `Page` still reads as one record.
    #[serde(flatten)]
    pub core: Base,

    /// Id of the parent page, 0 for top-level pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,
}

impl Page {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "parent" => fields::set_i64(&mut self.parent, &mut self.core.extra, name, value),
            "menu_order" => fields::set_i64(&mut self.menu_order, &mut self.core.extra, name, value),
            _ => self.core.assign(name, value),
        }
    }
}
