//! Access interfaces for relationship containers.
//!
//! Concrete relationship containers (the values stored in a resource
//! object's relationships component) are defined by the embedding
//! application; this crate only consumes them through these two traits so
//! that [`related_id`](crate::resource::ResourceObject::related_id) and
//! [`related_ids`](crate::resource::ResourceObject::related_ids) can
//! project target identifiers without knowing the container's wire shape.
//!
//! A to-one relation whose target may not yet be known uses an
//! `Option<Id<..>>` identifier type; the absent target then reads as
//! `None` rather than a dedicated sentinel.

/// A relationship container pointing at exactly one related resource.
pub trait ToOneRelation {
    /// The target identifier type, typically `Id<R, D>` or
    /// `Option<Id<R, D>>` when the target may be unknown.
    type Identifier;

    /// Returns the target identifier.
    fn id(&self) -> &Self::Identifier;
}

/// A relationship container pointing at an ordered collection of related
/// resources.
pub trait ToManyRelation {
    /// The target identifier type.
    type Identifier;

    /// Returns the target identifiers in insertion order, duplicates
    /// preserved.
    fn ids(&self) -> &[Self::Identifier];
}
