//! Typed resource object infrastructure.
//!
//! This module provides the core machinery for declaring and encoding
//! resource objects:
//!
//! - **[`ResourceDescription`] trait**: A compile-time declaration of a
//!   resource shape (type name, attributes, relationships)
//! - **[`ResourceObject`]**: The generic record, with a codec that
//!   statically omits absent components
//! - **[`TransformedAttribute`] / [`Attribute`]**: Attribute wrappers with
//!   pluggable, fallible value transformation
//! - **[`Id`]**: Phantom-typed identifiers bound to their resource kind
//! - **Empty markers**: [`NoAttributes`], [`NoRelationships`],
//!   [`NoMetadata`], [`NoLinks`], and [`Unidentified`]
//! - **[`ResourceError`] / [`TransformError`] / [`BuildError`]**: The error
//!   taxonomy for decode, transformation, and construction failures
//!
//! # Overview
//!
//! A resource shape is declared once by implementing [`ResourceDescription`]
//! plus the component traits ([`Attributes`], [`Relationships`], [`Meta`],
//! [`Links`]) on the concrete component types. The wire form is then fully
//! determined: `type` always appears, and every other member appears
//! exactly when its type parameter is not an empty marker.

mod attribute;
mod codec;
mod component;
mod errors;
mod identifier;
mod object;
mod relation;

// Public exports
pub use attribute::{Attribute, IdentityTransformer, TransformedAttribute, Transformer};
pub use component::{
    Attributes, Links, Meta, NoAttributes, NoLinks, NoMetadata, NoRelationships, Relationships,
};
pub use errors::{BuildError, ResourceError, TransformError};
pub use identifier::{CreatableRawIdType, Id, MaybeRawId, RawIdType, Unidentified};
pub use object::{ResourceDescription, ResourceObject, ResourceObjectBuilder};
pub use relation::{ToManyRelation, ToOneRelation};
