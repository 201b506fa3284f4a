//! WordPress REST API client.
//!
//! A blocking client for `/wp-json/wp/v2/...` that:
//!
//! - follows page-based pagination (`page`/`per_page` + `X-WP-TotalPages`)
//! - sends HTTP Basic auth when application-password credentials are set
//! - runs every fetched record through the model factory, so callers only
//!   ever see populated, type-appropriate models

use clap::ValueEnum;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::{ClassOverride, Model, factory};

const API_PREFIX: &str = "wp-json/wp/v2";
/// Server-side cap on `per_page`.
const MAX_PER_PAGE: usize = 100;

/// Built-in resource collections the CLI can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Posts,
    Pages,
    Users,
    Categories,
    Tags,
    Media,
    Taxonomies,
    Types,
}

impl Resource {
    pub fn route(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Pages => "pages",
            Self::Users => "users",
            Self::Categories => "categories",
            Self::Tags => "tags",
            Self::Media => "media",
            Self::Taxonomies => "taxonomies",
            Self::Types => "types",
        }
    }
}

/// Collection query options.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Items per request page (clamped to the server cap).
    pub per_page: usize,
    /// Stop after this many items in total; `None` fetches everything.
    pub limit: Option<usize>,
    /// Full-text search term passed through to the API.
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            per_page: 20,
            limit: None,
            search: None,
        }
    }
}

/// One fetched page of a collection.
struct PageChunk {
    records: Vec<Map<String, Value>>,
    total_pages: Option<usize>,
    /// The body was a name-keyed object (`/types`, `/taxonomies`) rather
    /// than an array; such collections arrive whole.
    keyed: bool,
}

pub struct WpClient {
    client: Client,
    base_url: String,
    auth: Option<(String, String)>,
}

impl WpClient {
    /// Build a client from `WP_URL` (+ optional `WP_USER`/`WP_APP_PASSWORD`)
    /// in the environment or a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("WP_URL")
            .map_err(|_| AppError::config("Missing WP_URL in environment (.env)."))?;
        let auth = match (std::env::var("WP_USER"), std::env::var("WP_APP_PASSWORD")) {
            (Ok(user), Ok(password)) => Some((user, password)),
            _ => None,
        };
        Ok(Self::new(base_url, auth))
    }

    pub fn new(base_url: impl Into<String>, auth: Option<(String, String)>) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url.into()),
            auth,
        }
    }

    /// Fetch a collection, following pagination, classifying every record.
    pub fn list(&self, resource: Resource, query: &ListQuery) -> Result<Vec<Model>, AppError> {
        self.list_as(resource, query, None)
    }

    /// `list`, with a classification override applied to every record.
    pub fn list_as(
        &self,
        resource: Resource,
        query: &ListQuery,
        class_override: Option<&ClassOverride>,
    ) -> Result<Vec<Model>, AppError> {
        let records = self.fetch_collection(resource.route(), query)?;
        Ok(records.iter().map(|r| factory::create(r, class_override)).collect())
    }

    /// Fetch and classify a single resource by id.
    pub fn get(&self, resource: Resource, id: u64) -> Result<Model, AppError> {
        self.get_as(resource, id, None)
    }

    /// `get`, with a classification override.
    pub fn get_as(
        &self,
        resource: Resource,
        id: u64,
        class_override: Option<&ClassOverride>,
    ) -> Result<Model, AppError> {
        let route = format!("{}/{id}", resource.route());
        let resp = self
            .request(&route)
            .send()
            .map_err(|e| AppError::remote(format!("Request to {route} failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(AppError::remote(format!(
                "Request to {route} failed with status {}.",
                resp.status()
            )));
        }
        let body: Value = resp
            .json()
            .map_err(|e| AppError::remote(format!("Failed to parse response from {route}: {e}")))?;
        match body {
            Value::Object(record) => Ok(factory::create(&record, class_override)),
            other => Err(AppError::remote(format!(
                "Expected a JSON object from {route}, got {}.",
                json_kind(&other)
            ))),
        }
    }

    fn fetch_collection(&self, route: &str, query: &ListQuery) -> Result<Vec<Map<String, Value>>, AppError> {
        let per_page = query.per_page.clamp(1, MAX_PER_PAGE);
        let mut out = Vec::new();
        let mut page = 1;

        loop {
            let chunk = self.fetch_page(route, page, per_page, query.search.as_deref())?;
            let is_last = is_last_page(&chunk, page, per_page);
            out.extend(chunk.records);

            if let Some(limit) = query.limit {
                if out.len() >= limit {
                    out.truncate(limit);
                    break;
                }
            }
            if is_last {
                break;
            }
            page += 1;
        }

        Ok(out)
    }

    fn fetch_page(
        &self,
        route: &str,
        page: usize,
        per_page: usize,
        search: Option<&str>,
    ) -> Result<PageChunk, AppError> {
        let mut req = self
            .request(route)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())]);
        if let Some(term) = search {
            req = req.query(&[("search", term)]);
        }

        let resp = req
            .send()
            .map_err(|e| AppError::remote(format!("Request to {route} failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(AppError::remote(format!(
                "Request to {route} failed with status {}.",
                resp.status()
            )));
        }

        let total_pages = resp
            .headers()
            .get("x-wp-totalpages")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let body: Value = resp
            .json()
            .map_err(|e| AppError::remote(format!("Failed to parse response from {route}: {e}")))?;
        let (records, keyed) = collection_records(body);

        Ok(PageChunk {
            records,
            total_pages,
            keyed,
        })
    }

    fn request(&self, route: &str) -> RequestBuilder {
        let mut req = self.client.get(format!("{}/{API_PREFIX}/{route}", self.base_url));
        if let Some((user, password)) = &self.auth {
            req = req.basic_auth(user, Some(password));
        }
        req
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Split a collection body into records. Most routes serve arrays; `/types`
/// and `/taxonomies` serve one object keyed by resource name.
fn collection_records(body: Value) -> (Vec<Map<String, Value>>, bool) {
    match body {
        Value::Array(items) => (items.into_iter().filter_map(into_object).collect(), false),
        Value::Object(map) => (map.into_values().filter_map(into_object).collect(), true),
        _ => (Vec::new(), false),
    }
}

fn into_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Whether `page` was the last page worth fetching.
fn is_last_page(chunk: &PageChunk, page: usize, per_page: usize) -> bool {
    if chunk.keyed || chunk.records.is_empty() {
        return true;
    }
    match chunk.total_pages {
        Some(total) => page >= total,
        // No pagination header: a short page is the only stop signal left.
        None => chunk.records.len() < per_page,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chunk(n: usize, total_pages: Option<usize>, keyed: bool) -> PageChunk {
        PageChunk {
            records: vec![Map::new(); n],
            total_pages,
            keyed,
        }
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        assert_eq!(normalize_base_url("https://example.com/".into()), "https://example.com");
        assert_eq!(normalize_base_url("https://example.com".into()), "https://example.com");
    }

    #[test]
    fn array_bodies_become_records() {
        let (records, keyed) = collection_records(json!([{"id": 1}, {"id": 2}, "junk"]));
        assert_eq!(records.len(), 2);
        assert!(!keyed);
    }

    #[test]
    fn keyed_bodies_flatten_to_their_members() {
        let body = json!({
            "category": {"name": "Categories", "hierarchical": true},
            "post_tag": {"name": "Tags", "hierarchical": false}
        });
        let (records, keyed) = collection_records(body);
        assert_eq!(records.len(), 2);
        assert!(keyed);
    }

    #[test]
    fn pagination_stops_on_header_short_page_or_keyed_body() {
        // Header-driven.
        assert!(!is_last_page(&chunk(10, Some(3), false), 1, 10));
        assert!(is_last_page(&chunk(10, Some(3), false), 3, 10));
        // No header: a short page is the stop signal.
        assert!(!is_last_page(&chunk(10, None, false), 1, 10));
        assert!(is_last_page(&chunk(4, None, false), 1, 10));
        // Keyed collections arrive whole.
        assert!(is_last_page(&chunk(30, None, true), 1, 10));
        // An empty page never continues, header or not.
        assert!(is_last_page(&chunk(0, Some(9), false), 1, 10));
    }

    #[test]
    fn routes_match_the_rest_api() {
        assert_eq!(Resource::Posts.route(), "posts");
        assert_eq!(Resource::Media.route(), "media");
        assert_eq!(Resource::Types.route(), "types");
    }
}
