//! The resource object data model: description, record, builder, and
//! field-path projections.
//!
//! A resource shape is declared once, at compile time, by implementing
//! [`ResourceDescription`] on an (uninhabited) marker type. The record
//! itself is a [`ResourceObject`], generic over the description plus the
//! metadata, links, and identifier-kind types. Components whose types are
//! the empty markers never appear on the wire; the codec doing the
//! conditional work lives in this module's sibling.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_resource::{
//!     Attribute, Attributes, Id, NoLinks, NoMetadata, NoRelationships,
//!     ResourceDescription, ResourceObject,
//! };
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct ArticleAttributes {
//!     title: Attribute<String>,
//! }
//!
//! impl Attributes for ArticleAttributes {}
//!
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
//! let article = ArticleObject::builder()
//!     .id(Id::new(1))
//!     .attributes(ArticleAttributes {
//!         title: Attribute::new("Measuring Coastlines".to_string()),
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(article.attr(|a| &a.title), "Measuring Coastlines");
//! let json = serde_json::to_value(&article).unwrap();
//! assert_eq!(json["type"], "articles");
//! assert!(json.get("relationships").is_none());
//! ```

use std::fmt;

use crate::resource::attribute::{TransformedAttribute, Transformer};
use crate::resource::component::{Attributes, Links, Meta, Relationships};
use crate::resource::errors::BuildError;
use crate::resource::identifier::{CreatableRawIdType, Id, MaybeRawId, Unidentified};
use crate::resource::relation::{ToManyRelation, ToOneRelation};

/// Compile-time description of a resource object shape.
///
/// Implementors are pure type-level markers and are never instantiated; an
/// uninhabited `enum` is the conventional shape. The description binds the
/// resource's wire `type` name and its attribute/relationship types, and it
/// tags [`Id`] values so identifiers of unrelated resource kinds cannot be
/// mixed up.
pub trait ResourceDescription {
    /// The attributes component type, or [`NoAttributes`](crate::resource::NoAttributes).
    type Attributes: Attributes;

    /// The relationships component type, or [`NoRelationships`](crate::resource::NoRelationships).
    type Relationships: Relationships;

    /// The JSON:API `type` name bound to this resource kind.
    ///
    /// Always serialized, and enforced exactly on deserialization: a wire
    /// record with a different `type` fails to decode.
    const TYPE: &'static str;
}

/// A single typed resource object.
///
/// Immutable after construction; safe to share across threads. The four
/// type parameters are the [`ResourceDescription`], the metadata type, the
/// links type, and the identifier kind. Instantiating a component parameter
/// with its empty marker removes that member from the wire form entirely.
pub struct ResourceObject<D: ResourceDescription, M, L, R> {
    id: Id<R, D>,
    attributes: D::Attributes,
    relationships: D::Relationships,
    meta: M,
    links: L,
}

impl<D, M, L, R> ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    /// The canonical constructor: assembles a resource object from all five
    /// components.
    pub fn new(
        id: Id<R, D>,
        attributes: D::Attributes,
        relationships: D::Relationships,
        meta: M,
        links: L,
    ) -> Self {
        Self {
            id,
            attributes,
            relationships,
            meta,
            links,
        }
    }

    /// Returns a builder that defaults any empty-marker component to its
    /// singleton.
    #[must_use]
    pub fn builder() -> ResourceObjectBuilder<D, M, L, R> {
        ResourceObjectBuilder::new()
    }

    /// Returns the resource's wire `type` name.
    #[must_use]
    pub fn resource_type() -> &'static str {
        D::TYPE
    }

    /// Returns the resource's identifier.
    #[must_use]
    pub fn id(&self) -> &Id<R, D> {
        &self.id
    }

    /// Returns the attributes component.
    #[must_use]
    pub fn attributes(&self) -> &D::Attributes {
        &self.attributes
    }

    /// Returns the relationships component.
    #[must_use]
    pub fn relationships(&self) -> &D::Relationships {
        &self.relationships
    }

    /// Returns the metadata component.
    #[must_use]
    pub fn meta(&self) -> &M {
        &self.meta
    }

    /// Returns the links component.
    #[must_use]
    pub fn links(&self) -> &L {
        &self.links
    }

    /// Projects the derived value of a transformed attribute.
    ///
    /// The path closure navigates the attributes component to a
    /// [`TransformedAttribute`]; the projection returns its already-derived
    /// value without exposing the wrapper.
    ///
    /// ```rust,ignore
    /// let title: &String = article.attr(|a| &a.title);
    /// ```
    pub fn attr<'a, T, F>(&'a self, path: F) -> &'a T::Value
    where
        T: Transformer + 'a,
        F: FnOnce(&'a D::Attributes) -> &'a TransformedAttribute<T>,
    {
        path(&self.attributes).value()
    }

    /// Projects the derived value of an optional attribute field.
    ///
    /// An absent attribute yields an absent result; a present attribute
    /// yields its derived value.
    pub fn attr_opt<'a, T, F>(&'a self, path: F) -> Option<&'a T::Value>
    where
        T: Transformer + 'a,
        F: FnOnce(&'a D::Attributes) -> Option<&'a TransformedAttribute<T>>,
    {
        path(&self.attributes).map(TransformedAttribute::value)
    }

    /// Projects an optional attribute whose derived value is itself
    /// optional, unwrapping exactly one level.
    ///
    /// Both "the attribute field is absent" and "the attribute is present
    /// with an absent value" read as `None`; the two levels of optionality
    /// are never flattened further than that.
    pub fn attr_flat<'a, T, F, U>(&'a self, path: F) -> Option<&'a U>
    where
        T: Transformer<Value = Option<U>> + 'a,
        F: FnOnce(&'a D::Attributes) -> Option<&'a TransformedAttribute<T>>,
    {
        path(&self.attributes).and_then(|attr| attr.value().as_ref())
    }

    /// Projects the target identifier of a to-one relation.
    pub fn related_id<'a, Rel, F>(&'a self, path: F) -> &'a Rel::Identifier
    where
        Rel: ToOneRelation + 'a,
        F: FnOnce(&'a D::Relationships) -> &'a Rel,
    {
        path(&self.relationships).id()
    }

    /// Projects the ordered target identifiers of a to-many relation.
    pub fn related_ids<'a, Rel, F>(&'a self, path: F) -> &'a [Rel::Identifier]
    where
        Rel: ToManyRelation + 'a,
        F: FnOnce(&'a D::Relationships) -> &'a Rel,
    {
        path(&self.relationships).ids()
    }
}

impl<D, M, L, R> ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: CreatableRawIdType,
{
    /// Constructs a resource object with a freshly generated identifier.
    pub fn create(
        attributes: D::Attributes,
        relationships: D::Relationships,
        meta: M,
        links: L,
    ) -> Self {
        Self::new(Id::create(), attributes, relationships, meta, links)
    }
}

impl<D, M, L> ResourceObject<D, M, L, Unidentified>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
{
    /// Constructs a not-yet-identified resource object, e.g. one the server
    /// will assign an id to.
    pub fn unidentified(
        attributes: D::Attributes,
        relationships: D::Relationships,
        meta: M,
        links: L,
    ) -> Self {
        Self::new(Id::unidentified(), attributes, relationships, meta, links)
    }
}

impl<D, M, L, R> Clone for ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            attributes: self.attributes.clone(),
            relationships: self.relationships.clone(),
            meta: self.meta.clone(),
            links: self.links.clone(),
        }
    }
}

impl<D, M, L, R> fmt::Debug for ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceObject")
            .field("type", &D::TYPE)
            .field("id", &self.id)
            .field("attributes", &self.attributes)
            .field("relationships", &self.relationships)
            .field("meta", &self.meta)
            .field("links", &self.links)
            .finish()
    }
}

impl<D, M, L, R> PartialEq for ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.attributes == other.attributes
            && self.relationships == other.relationships
            && self.meta == other.meta
            && self.links == other.links
    }
}

/// Builder for [`ResourceObject`].
///
/// Replaces a combinatorial set of convenience constructors: components
/// whose types are empty markers default to their singletons, the
/// identifier defaults to the [`Unidentified`] sentinel when the identifier
/// kind allows it, and anything else must be set explicitly.
///
/// # Errors
///
/// `build()` returns [`BuildError::MissingField`] for any required
/// component that was never supplied.
pub struct ResourceObjectBuilder<D: ResourceDescription, M, L, R> {
    id: Option<Id<R, D>>,
    attributes: Option<D::Attributes>,
    relationships: Option<D::Relationships>,
    meta: Option<M>,
    links: Option<L>,
}

impl<D, M, L, R> ResourceObjectBuilder<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: None,
            attributes: None,
            relationships: None,
            meta: None,
            links: None,
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn id(mut self, id: Id<R, D>) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the attributes component.
    #[must_use]
    pub fn attributes(mut self, attributes: D::Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Sets the relationships component.
    #[must_use]
    pub fn relationships(mut self, relationships: D::Relationships) -> Self {
        self.relationships = Some(relationships);
        self
    }

    /// Sets the metadata component.
    #[must_use]
    pub fn meta(mut self, meta: M) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets the links component.
    #[must_use]
    pub fn links(mut self, links: L) -> Self {
        self.links = Some(links);
        self
    }

    /// Builds the resource object, defaulting marker components.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingField`] if a non-marker component (or
    /// the identifier, for identified kinds) was never set.
    pub fn build(self) -> Result<ResourceObject<D, M, L, R>, BuildError> {
        let id = match self.id {
            Some(id) => id,
            None => match R::unidentified() {
                Some(sentinel) => Id::new(sentinel),
                None => return Err(BuildError::MissingField { field: "id" }),
            },
        };
        let attributes = match self.attributes {
            Some(attributes) => attributes,
            None => <D::Attributes as Attributes>::absent()
                .ok_or(BuildError::MissingField { field: "attributes" })?,
        };
        let relationships = match self.relationships {
            Some(relationships) => relationships,
            None => <D::Relationships as Relationships>::absent().ok_or(BuildError::MissingField {
                field: "relationships",
            })?,
        };
        let meta = match self.meta {
            Some(meta) => meta,
            None => M::absent().ok_or(BuildError::MissingField { field: "meta" })?,
        };
        let links = match self.links {
            Some(links) => links,
            None => L::absent().ok_or(BuildError::MissingField { field: "links" })?,
        };
        Ok(ResourceObject::new(
            id,
            attributes,
            relationships,
            meta,
            links,
        ))
    }
}

impl<D, M, L, R> ResourceObjectBuilder<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: CreatableRawIdType,
{
    /// Sets a freshly generated identifier.
    #[must_use]
    pub fn generated_id(mut self) -> Self {
        self.id = Some(Id::create());
        self
    }
}

impl<D, M, L, R> Default for ResourceObjectBuilder<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn default() -> Self {
        Self::new()
    }
}
