//! Component traits and the empty-marker types that suppress wire members.
//!
//! A resource object is assembled from four optional components:
//! attributes, relationships, metadata, and links. Each component slot is
//! filled either by a concrete serializable type or by one of the empty
//! markers ([`NoAttributes`], [`NoRelationships`], [`NoMetadata`],
//! [`NoLinks`]). A marker means the corresponding JSON member is entirely
//! absent from the wire representation — not present-but-empty.
//!
//! The four component traits carry a defaulted `absent()` hook that the
//! codec consults at compile time (monomorphization reduces it to a
//! constant): `None` means the member is real and required on the wire,
//! `Some(singleton)` means the member is skipped on encode and synthesized
//! on decode without reading the wire.
//!
//! # Implementing a Component
//!
//! Concrete components implement the matching trait with an empty body:
//!
//! ```rust
//! use jsonapi_resource::{Attribute, Attributes};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct ArticleAttributes {
//!     title: Attribute<String>,
//! }
//!
//! impl Attributes for ArticleAttributes {}
//! ```

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The attributes component of a resource object.
///
/// A struct of named [`TransformedAttribute`](crate::resource::TransformedAttribute)
/// fields (or anything serializable). Use [`NoAttributes`] for resource
/// shapes that carry zero domain attributes.
pub trait Attributes: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Returns the marker singleton for empty-marker types, `None` for
    /// concrete attribute types. Do not override outside marker types.
    #[must_use]
    fn absent() -> Option<Self> {
        None
    }
}

/// The relationships component of a resource object.
///
/// A struct of named relation containers. Use [`NoRelationships`] for
/// resource shapes that carry zero relationships.
pub trait Relationships: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Returns the marker singleton for empty-marker types, `None` for
    /// concrete relationship types. Do not override outside marker types.
    #[must_use]
    fn absent() -> Option<Self> {
        None
    }
}

/// Arbitrary serializable metadata packaged with a resource object.
///
/// Use [`NoMetadata`] to suppress the `meta` member entirely.
pub trait Meta: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Returns the marker singleton for empty-marker types, `None` for
    /// concrete metadata types. Do not override outside marker types.
    #[must_use]
    fn absent() -> Option<Self> {
        None
    }
}

/// Arbitrary serializable navigation links for a resource object.
///
/// Use [`NoLinks`] to suppress the `links` member entirely.
pub trait Links: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Returns the marker singleton for empty-marker types, `None` for
    /// concrete link types. Do not override outside marker types.
    #[must_use]
    fn absent() -> Option<Self> {
        None
    }
}

/// Attributes marker for resources with no domain attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoAttributes;

impl NoAttributes {
    /// Returns the canonical singleton.
    #[must_use]
    pub const fn none() -> Self {
        Self
    }
}

impl Attributes for NoAttributes {
    fn absent() -> Option<Self> {
        Some(Self)
    }
}

/// Relationships marker for resources with no relationships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoRelationships;

impl NoRelationships {
    /// Returns the canonical singleton.
    #[must_use]
    pub const fn none() -> Self {
        Self
    }
}

impl Relationships for NoRelationships {
    fn absent() -> Option<Self> {
        Some(Self)
    }
}

/// Metadata marker for resources that package no metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoMetadata;

impl NoMetadata {
    /// Returns the canonical singleton.
    #[must_use]
    pub const fn none() -> Self {
        Self
    }
}

impl Meta for NoMetadata {
    fn absent() -> Option<Self> {
        Some(Self)
    }
}

/// Links marker for resources with no navigation links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoLinks;

impl NoLinks {
    /// Returns the canonical singleton.
    #[must_use]
    pub const fn none() -> Self {
        Self
    }
}

impl Links for NoLinks {
    fn absent() -> Option<Self> {
        Some(Self)
    }
}
