//! Phantom-typed resource identifiers and identifier kinds.
//!
//! An [`Id`] binds a raw identifier representation (string, integer, ...)
//! to the resource description that owns it, so two resource kinds sharing
//! the same raw representation still produce non-interchangeable identifier
//! types. The binding is a zero-size phantom tag; no runtime cost.
//!
//! Identifier *kinds* distinguish three situations:
//!
//! - A concrete identifier is present ([`RawIdType`])
//! - The client can generate one itself ([`CreatableRawIdType`])
//! - The record is not yet identified, e.g. a client-constructed record
//!   awaiting a server-assigned id ([`Unidentified`])
//!
//! A resource object whose identifier kind is [`Unidentified`] omits the
//! `id` member from its wire form entirely.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_resource::{Id, NoAttributes, NoRelationships, ResourceDescription};
//!
//! enum Article {}
//! enum Person {}
//!
//! impl ResourceDescription for Article {
//!     type Attributes = NoAttributes;
//!     type Relationships = NoRelationships;
//!     const TYPE: &'static str = "articles";
//! }
//!
//! impl ResourceDescription for Person {
//!     type Attributes = NoAttributes;
//!     type Relationships = NoRelationships;
//!     const TYPE: &'static str = "people";
//! }
//!
//! let article_id: Id<u64, Article> = Id::new(7);
//! let person_id: Id<u64, Person> = Id::new(7);
//! // `article_id == person_id` would not compile: the kinds differ.
//! assert_eq!(*article_id.raw(), *person_id.raw());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};

/// Length of client-generated string identifiers.
const CREATED_ID_LEN: usize = 20;

/// The capability shared by every identifier kind, identified or not.
///
/// Implemented by raw identifier types (via [`RawIdType`]) and by the
/// [`Unidentified`] marker. The defaulted `unidentified` hook returns the
/// marker's sentinel; raw id types leave it at `None`, which is what the
/// codec uses to decide whether the `id` member appears on the wire.
pub trait MaybeRawId: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug {
    /// Returns the "not yet identified" sentinel for marker kinds, `None`
    /// for real raw id types.
    #[must_use]
    fn unidentified() -> Option<Self> {
        None
    }
}

/// A raw identifier representation that actually identifies a resource.
///
/// Implemented for [`String`], [`u64`], and [`i64`]; downstream crates
/// implement it for their own raw representations.
pub trait RawIdType: MaybeRawId {}

/// A raw identifier kind the client may generate itself.
///
/// Used for client-constructed records in systems where the client, not
/// the server, mints identifiers.
pub trait CreatableRawIdType: RawIdType {
    /// Generates a fresh raw identifier.
    #[must_use]
    fn create() -> Self;
}

/// Marker for resources that are not yet identified.
///
/// A resource object parameterized over `Unidentified` never serializes an
/// `id` member, and decoding such a resource synthesizes this sentinel
/// without reading the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unidentified;

impl MaybeRawId for Unidentified {
    fn unidentified() -> Option<Self> {
        Some(Self)
    }
}

impl MaybeRawId for String {}
impl RawIdType for String {}

impl CreatableRawIdType for String {
    fn create() -> Self {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(CREATED_ID_LEN)
            .map(char::from)
            .collect()
    }
}

impl MaybeRawId for u64 {}
impl RawIdType for u64 {}

impl MaybeRawId for i64 {}
impl RawIdType for i64 {}

/// A resource identifier: a raw representation bound to its resource kind.
///
/// The second parameter is the owning
/// [`ResourceDescription`](crate::resource::ResourceDescription); it never
/// exists at runtime. `Id<u64, Article>` and `Id<u64, Person>` are distinct
/// types even though both carry a `u64`.
///
/// Serializes transparently as the raw value.
pub struct Id<R, D> {
    raw: R,
    _kind: PhantomData<fn() -> D>,
}

impl<R, D> Id<R, D> {
    /// Creates an identifier from a raw representation.
    #[must_use]
    pub const fn new(raw: R) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// Returns the raw representation.
    #[must_use]
    pub fn raw(&self) -> &R {
        &self.raw
    }

    /// Consumes the identifier, returning the raw representation.
    #[must_use]
    pub fn into_raw(self) -> R {
        self.raw
    }
}

impl<R: CreatableRawIdType, D> Id<R, D> {
    /// Generates a fresh identifier for a client-constructed resource.
    #[must_use]
    pub fn create() -> Self {
        Self::new(R::create())
    }
}

impl<D> Id<Unidentified, D> {
    /// Returns the "not yet identified" sentinel identifier.
    #[must_use]
    pub const fn unidentified() -> Self {
        Self::new(Unidentified)
    }
}

impl<R: Clone, D> Clone for Id<R, D> {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl<R: Copy, D> Copy for Id<R, D> {}

impl<R: fmt::Debug, D> fmt::Debug for Id<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.raw).finish()
    }
}

impl<R: fmt::Display, D> fmt::Display for Id<R, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

impl<R: PartialEq, D> PartialEq for Id<R, D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<R: Eq, D> Eq for Id<R, D> {}

impl<R: Hash, D> Hash for Id<R, D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<R: Serialize, D> Serialize for Id<R, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, R: Deserialize<'de>, D> Deserialize<'de> for Id<R, D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Self::new)
    }
}
