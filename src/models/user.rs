//! User model.
//!
//! Public requests only see the `view`-context subset (id, name, link,
//! avatar URLs, ...); the account fields (`username`, `email`, `roles`, ...)
//! appear when the client is authenticated for `edit` context.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::fields;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    /// Map from pixel size to avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Fields the declared schema doesn't know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match name {
            "id" => fields::set_i64(&mut self.id, &mut self.extra, name, value),
            "username" => fields::set_string(&mut self.username, &mut self.extra, name, value),
            "name" => fields::set_string(&mut self.name, &mut self.extra, name, value),
            "first_name" => fields::set_string(&mut self.first_name, &mut self.extra, name, value),
            "last_name" => fields::set_string(&mut self.last_name, &mut self.extra, name, value),
            "email" => fields::set_string(&mut self.email, &mut self.extra, name, value),
            "url" => fields::set_string(&mut self.url, &mut self.extra, name, value),
            "description" => fields::set_string(&mut self.description, &mut self.extra, name, value),
            "link" => fields::set_string(&mut self.link, &mut self.extra, name, value),
            "locale" => fields::set_string(&mut self.locale, &mut self.extra, name, value),
            "nickname" => fields::set_string(&mut self.nickname, &mut self.extra, name, value),
            "slug" => fields::set_string(&mut self.slug, &mut self.extra, name, value),
            "registered_date" => fields::set_string(&mut self.registered_date, &mut self.extra, name, value),
            "roles" => fields::set_strings(&mut self.roles, &mut self.extra, name, value),
            "avatar_urls" => fields::set_value(&mut self.avatar_urls, value),
            "meta" => fields::set_value(&mut self.meta, value),
            _ => {
                self.extra.insert(name.to_string(), value);
            }
        }
    }

    /// Avatar URL for a given pixel size, if the API served one.
    pub fn avatar_url(&self, size: u32) -> Option<&str> {
        self.avatar_urls.as_ref()?.get(size.to_string())?.as_str()
    }
}
