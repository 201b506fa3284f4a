//! Typed model variants and the classify-then-populate factory.
//!
//! This module defines:
//!
//! - the variant structs (`Base`, `User`, `Term`, ...): declared fields plus
//!   an extension bag for anything the schema doesn't anticipate
//! - the closed variant catalogue (`registry`)
//! - the `factory` that turns a raw API record into a populated variant

use serde::Serialize;
use serde_json::{Map, Value};

pub mod attachment;
pub mod base;
pub mod factory;
mod fields;
pub mod page;
pub mod post_type;
pub mod registry;
pub mod taxonomy;
pub mod term;
pub mod user;

pub use attachment::Attachment;
pub use base::Base;
pub use page::Page;
pub use post_type::PostType;
pub use registry::{ClassOverride, VariantKind};
pub use taxonomy::Taxonomy;
pub use term::Term;
pub use user::User;

/// A populated model instance of some registered variant.
///
/// Serializes untagged: a `Model` reads back as the flat record it was
/// populated from (declared fields plus the flattened extension bag).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Model {
    User(User),
    Term(Term),
    Taxonomy(Taxonomy),
    Attachment(Attachment),
    Page(Page),
    PostType(PostType),
    Base(Base),
}

impl Model {
    /// Which registered variant this instance is.
    pub fn variant(&self) -> VariantKind {
        match self {
            Self::User(_) => VariantKind::User,
            Self::Term(_) => VariantKind::Term,
            Self::Taxonomy(_) => VariantKind::Taxonomy,
            Self::Attachment(_) => VariantKind::Attachment,
            Self::Page(_) => VariantKind::Page,
            Self::PostType(_) => VariantKind::PostType,
            Self::Base(_) => VariantKind::Base,
        }
    }

    /// Assign one source field by name (populator-only entry point).
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        match self {
            Self::User(m) => m.assign(name, value),
            Self::Term(m) => m.assign(name, value),
            Self::Taxonomy(m) => m.assign(name, value),
            Self::Attachment(m) => m.assign(name, value),
            Self::Page(m) => m.assign(name, value),
            Self::PostType(m) => m.assign(name, value),
            Self::Base(m) => m.assign(name, value),
        }
    }

    /// Uniform get-by-name over declared fields and the extension bag.
    pub fn field(&self, name: &str) -> Option<Value> {
        fields::lookup(self, name)
    }

    /// All populated field names, sorted.
    pub fn field_names(&self) -> Vec<String> {
        fields::field_names(self)
    }

    /// Set-by-name accessor for the extension bag.
    pub fn set_extra(&mut self, name: impl Into<String>, value: Value) {
        self.extra_mut().insert(name.into(), value);
    }

    /// The variant's extension bag.
    pub fn extra(&self) -> &Map<String, Value> {
        match self {
            Self::User(m) => &m.extra,
            Self::Term(m) => &m.extra,
            Self::Taxonomy(m) => &m.extra,
            Self::Attachment(m) => &m.core.extra,
            Self::Page(m) => &m.core.extra,
            Self::PostType(m) => &m.extra,
            Self::Base(m) => &m.extra,
        }
    }

    fn extra_mut(&mut self) -> &mut Map<String, Value> {
        match self {
            Self::User(m) => &mut m.extra,
            Self::Term(m) => &mut m.extra,
            Self::Taxonomy(m) => &mut m.extra,
            Self::Attachment(m) => &mut m.core.extra,
            Self::Page(m) => &mut m.core.extra,
            Self::PostType(m) => &mut m.extra,
            Self::Base(m) => &mut m.extra,
        }
    }

    /// Numeric resource id, where the variant has one.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::User(m) => m.id,
            Self::Term(m) => m.id,
            Self::Taxonomy(_) | Self::PostType(_) => None,
            Self::Attachment(m) => m.core.id,
            Self::Page(m) => m.core.id,
            Self::Base(m) => m.id,
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::User(m) => m.slug.as_deref(),
            Self::Term(m) => m.slug.as_deref(),
            Self::Taxonomy(m) => m.slug.as_deref(),
            Self::Attachment(m) => m.core.slug.as_deref(),
            Self::Page(m) => m.core.slug.as_deref(),
            Self::PostType(m) => m.slug.as_deref(),
            Self::Base(m) => m.slug.as_deref(),
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::User(m) => m.link.as_deref(),
            Self::Term(m) => m.link.as_deref(),
            Self::Taxonomy(_) | Self::PostType(_) => None,
            Self::Attachment(m) => m.core.link.as_deref(),
            Self::Page(m) => m.core.link.as_deref(),
            Self::Base(m) => m.link.as_deref(),
        }
    }

    /// Best human-readable label: rendered title for post-shaped variants,
    /// `name` for the rest.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::User(m) => m.name.as_deref(),
            Self::Term(m) => m.name.as_deref(),
            Self::Taxonomy(m) => m.name.as_deref(),
            Self::Attachment(m) => m.core.title(),
            Self::Page(m) => m.core.title(),
            Self::PostType(m) => m.name.as_deref(),
            Self::Base(m) => m.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_sees_declared_and_bag_uniformly() {
        let mut model = VariantKind::Base.construct();
        model.assign("id", json!(9));
        model.assign("custom_flag", json!(true));
        assert_eq!(model.field("id"), Some(json!(9)));
        assert_eq!(model.field("custom_flag"), Some(json!(true)));
        assert_eq!(model.field("absent"), None);
    }

    #[test]
    fn set_extra_is_visible_through_field() {
        let mut model = VariantKind::Term.construct();
        model.set_extra("color", json!("teal"));
        assert_eq!(model.field("color"), Some(json!("teal")));
        assert_eq!(model.extra().get("color"), Some(&json!("teal")));
    }

    #[test]
    fn serializes_flat_with_type_key() {
        let mut model = VariantKind::Page.construct();
        model.assign("type", json!("page"));
        model.assign("parent", json!(3));
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["type"], json!("page"));
        assert_eq!(value["parent"], json!(3));
    }
}
