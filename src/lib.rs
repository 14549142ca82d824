//! # jsonapi-resource
//!
//! Typed JSON:API resource objects with compile-time shape declarations.
//!
//! ## Overview
//!
//! A JSON:API resource object is a keyed record with a `type` name, an
//! `id`, and optional `attributes`, `relationships`, `meta`, and `links`
//! members. This crate lets you declare a resource's shape once, via type
//! parameters, and derives the wire encoding from the declaration: members
//! whose types are the designated empty markers are statically known to be
//! absent and never touch the wire, while present members round-trip
//! losslessly, including attribute value transformation and null handling.
//!
//! This crate provides:
//! - Resource shape declarations via [`ResourceDescription`]
//! - A generic, immutable [`ResourceObject`] record with a conditional
//!   serde codec
//! - Attribute wrappers with pluggable transformation via
//!   [`TransformedAttribute`] and [`Transformer`]
//! - Phantom-typed identifiers via [`Id`], so ids of unrelated resource
//!   kinds cannot be mixed up
//! - Identifier kinds for identified, client-creatable, and
//!   not-yet-identified resources
//! - Field-path projections for attributes and relationship targets
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_resource::{
//!     Attribute, Attributes, Id, NoLinks, NoMetadata, NoRelationships,
//!     ResourceDescription, ResourceObject,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! // 1. Declare the attributes component.
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct ArticleAttributes {
//!     title: Attribute<String>,
//! }
//!
//! impl Attributes for ArticleAttributes {}
//!
//! // 2. Declare the resource shape.
//! enum Article {}
//!
//! impl ResourceDescription for Article {
//!     type Attributes = ArticleAttributes;
//!     type Relationships = NoRelationships;
//!     const TYPE: &'static str = "articles";
//! }
//!
//! type ArticleObject = ResourceObject<Article, NoMetadata, NoLinks, u64>;
//!
//! // 3. Encode and decode.
//! let article = ArticleObject::new(
//!     Id::new(1),
//!     ArticleAttributes {
//!         title: Attribute::new("Measuring Coastlines".to_string()),
//!     },
//!     NoRelationships::none(),
//!     NoMetadata::none(),
//!     NoLinks::none(),
//! );
//!
//! let json = serde_json::to_value(&article).unwrap();
//! assert_eq!(json["type"], "articles");
//! assert_eq!(json["id"], 1);
//! // Marker components never appear on the wire.
//! assert!(json.get("relationships").is_none());
//!
//! let decoded: ArticleObject = serde_json::from_value(json).unwrap();
//! assert_eq!(decoded, article);
//! ```
//!
//! ## Transformed Attributes
//!
//! Attributes can carry a [`Transformer`] that derives a domain value from
//! the raw wire value during decoding. Only the raw value is serialized;
//! a transformer that rejects a raw value aborts the whole decode:
//!
//! ```rust
//! use jsonapi_resource::{TransformError, TransformedAttribute, Transformer};
//!
//! enum Percent {}
//!
//! impl Transformer for Percent {
//!     type Raw = u8;
//!     type Value = f64;
//!
//!     fn transform(raw: &u8) -> Result<f64, TransformError> {
//!         if *raw > 100 {
//!             return Err(TransformError::new(format!("{raw} exceeds 100")));
//!         }
//!         Ok(f64::from(*raw) / 100.0)
//!     }
//! }
//!
//! let attr = TransformedAttribute::<Percent>::try_new(40).unwrap();
//! assert_eq!(*attr.value(), 0.4);
//! ```
//!
//! ## Design Principles
//!
//! - **Shapes are types**: Presence and absence of wire members is decided
//!   by the type system, not by runtime inspection
//! - **Immutable values**: Resource objects never mutate after
//!   construction and are safe to share across threads
//! - **All-or-nothing decoding**: A decode either yields a complete record
//!   or fails; errors are never swallowed, partial records never escape
//! - **Fail-fast validation**: Type-name mismatch aborts a decode before
//!   any other member is examined

pub mod resource;

// Re-export public types at crate root for convenience
pub use resource::{
    Attribute, Attributes, BuildError, CreatableRawIdType, Id, IdentityTransformer, Links,
    MaybeRawId, Meta, NoAttributes, NoLinks, NoMetadata, NoRelationships, RawIdType,
    Relationships, ResourceDescription, ResourceError, ResourceObject, ResourceObjectBuilder,
    ToManyRelation, ToOneRelation, TransformError, TransformedAttribute, Transformer,
    Unidentified,
};
