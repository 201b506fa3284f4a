//! The variant catalogue: a closed, compile-time set of constructible models.
//!
//! The upstream API can serve arbitrary custom content types, so the factory
//! probes this registry by name and falls back to `Base` when a name has no
//! constructible variant. The catalogue is fixed at startup and never
//! mutated, so concurrent readers need no coordination.

use std::collections::HashMap;

use crate::models::{Attachment, Base, Model, Page, PostType, Taxonomy, Term, User};

/// One constructible model variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Base,
    User,
    Term,
    Taxonomy,
    Attachment,
    Page,
    PostType,
}

impl VariantKind {
    pub const ALL: [Self; 7] = [
        Self::Base,
        Self::User,
        Self::Term,
        Self::Taxonomy,
        Self::Attachment,
        Self::Page,
        Self::PostType,
    ];

    /// Registry name, as used by override references.
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::User => "user",
            Self::Term => "term",
            Self::Taxonomy => "taxonomy",
            Self::Attachment => "attachment",
            Self::Page => "page",
            Self::PostType => "post_type",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::User => "User",
            Self::Term => "Term",
            Self::Taxonomy => "Taxonomy",
            Self::Attachment => "Attachment",
            Self::Page => "Page",
            Self::PostType => "PostType",
        }
    }

    /// Look a variant up by registry name. `None` means "not constructible"
    /// and callers are expected to degrade to `Base`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Construct a fresh, empty instance of this variant.
    pub fn construct(self) -> Model {
        match self {
            Self::Base => Model::Base(Base::default()),
            Self::User => Model::User(User::default()),
            Self::Term => Model::Term(Term::default()),
            Self::Taxonomy => Model::Taxonomy(Taxonomy::default()),
            Self::Attachment => Model::Attachment(Attachment::default()),
            Self::Page => Model::Page(Page::default()),
            Self::PostType => Model::PostType(PostType::default()),
        }
    }
}

/// Caller-supplied classification override.
///
/// References are registry *names* rather than `VariantKind` values so a
/// dangling reference is representable; the factory resolves names against
/// the registry last and degrades to `Base` instead of failing.
#[derive(Debug, Clone)]
pub enum ClassOverride {
    /// Replace the resolved variant unconditionally.
    Variant(String),
    /// Replace the resolved variant only when the *raw detected type string*
    /// matches a key. Note the namespace: keys match the detected type
    /// (`"post"`, `"media"`, `"book"`, ...), not registry names.
    ByType(HashMap<String, String>),
}

impl ClassOverride {
    pub fn variant(name: impl Into<String>) -> Self {
        Self::Variant(name.into())
    }

    pub fn by_type<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::ByType(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips_every_variant() {
        for kind in VariantKind::ALL {
            assert_eq!(VariantKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unknown_names_are_not_constructible() {
        assert_eq!(VariantKind::from_name("event"), None);
        assert_eq!(VariantKind::from_name("Base"), None);
        assert_eq!(VariantKind::from_name(""), None);
    }

    #[test]
    fn construct_matches_kind() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.construct().variant(), kind);
        }
    }
}
