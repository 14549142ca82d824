//! Attribute wrappers with pluggable, fallible value transformation.
//!
//! Attributes on a resource object carry two faces of the same value: the
//! raw form that travels on the wire and a derived domain form produced by
//! a [`Transformer`]. [`TransformedAttribute`] holds both and guarantees
//! they never drift apart. [`Attribute`] is the common untransformed case.
//!
//! # Overview
//!
//! - [`Transformer`]: A pure, stateless mapping from a raw wire type to a
//!   domain type, which may reject the raw value.
//! - [`IdentityTransformer`]: The default transformer; raw and domain types
//!   coincide and transformation always succeeds.
//! - [`TransformedAttribute`]: Stores `raw` plus the derived `value`; only
//!   `raw` is ever serialized.
//! - [`Attribute`]: Alias for `TransformedAttribute<IdentityTransformer<V>>`
//!   with an infallible constructor.
//!
//! # Nullable attributes
//!
//! An attribute that may be `null` on the wire declares an `Option<_>` raw
//! type. Serde's native `Option` handling then decodes a wire `null` to
//! `None` and re-encodes `None` as `null`:
//!
//! ```rust
//! use jsonapi_resource::Attribute;
//!
//! let attr: Attribute<Option<i64>> = serde_json::from_str("null").unwrap();
//! assert_eq!(*attr.value(), None);
//! assert_eq!(serde_json::to_string(&attr).unwrap(), "null");
//! ```
//!
//! # Example
//!
//! ```rust
//! use jsonapi_resource::{TransformError, TransformedAttribute, Transformer};
//!
//! // Parses a count that must be non-negative.
//! enum NonNegative {}
//!
//! impl Transformer for NonNegative {
//!     type Raw = i64;
//!     type Value = u64;
//!
//!     fn transform(raw: &i64) -> Result<u64, TransformError> {
//!         u64::try_from(*raw)
//!             .map_err(|_| TransformError::new(format!("negative count: {raw}")))
//!     }
//! }
//!
//! let attr = TransformedAttribute::<NonNegative>::try_new(7).unwrap();
//! assert_eq!(*attr.value(), 7u64);
//! assert!(TransformedAttribute::<NonNegative>::try_new(-1).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::resource::errors::{ResourceError, TransformError};

/// A pure, stateless, fallible mapping from a raw wire type to a domain type.
///
/// Implementors are never instantiated; `transform` is an associated
/// function, so an uninhabited `enum` is the conventional implementor shape.
///
/// # Contract
///
/// `transform` must be pure and side-effect-free. The library does not
/// verify this; it is a documented caller obligation. Rejecting a raw value
/// returns a [`TransformError`] carrying the transformer's diagnostic.
pub trait Transformer {
    /// The wire-representable raw type.
    type Raw;

    /// The derived domain type.
    type Value;

    /// Maps a raw value to its domain value, or rejects it.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] if the raw value violates the
    /// transformer's domain constraint.
    fn transform(raw: &Self::Raw) -> Result<Self::Value, TransformError>;
}

/// The default transformer: raw and domain types coincide and
/// transformation always succeeds.
pub struct IdentityTransformer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Clone> Transformer for IdentityTransformer<T> {
    type Raw = T;
    type Value = T;

    fn transform(raw: &T) -> Result<T, TransformError> {
        Ok(raw.clone())
    }
}

/// An attribute value paired with its transformed domain projection.
///
/// Holds the raw value as received (or about to be sent) on the wire
/// alongside the domain value derived by applying `T::transform`. The two
/// are set together at construction and never independently mutated.
///
/// Only `raw` is serialized; `value` is a decode-time derived projection
/// and never touches the wire.
///
/// Equality is structural equality of `raw`, defined when both the raw and
/// domain types support equality.
pub struct TransformedAttribute<T: Transformer> {
    raw: T::Raw,
    value: T::Value,
}

impl<T: Transformer> TransformedAttribute<T> {
    /// Creates an attribute from an already-known raw value, applying the
    /// transformer.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] if the transformer rejects the raw value.
    pub fn try_new(raw: T::Raw) -> Result<Self, TransformError> {
        let value = T::transform(&raw)?;
        Ok(Self { raw, value })
    }

    /// Returns the raw wire value.
    #[must_use]
    pub fn raw(&self) -> &T::Raw {
        &self.raw
    }

    /// Returns the derived domain value.
    #[must_use]
    pub fn value(&self) -> &T::Value {
        &self.value
    }

    /// Consumes the attribute, returning the derived domain value.
    #[must_use]
    pub fn into_value(self) -> T::Value {
        self.value
    }
}

/// An untransformed attribute: the wire value is the domain value.
pub type Attribute<V> = TransformedAttribute<IdentityTransformer<V>>;

impl<V: Clone> Attribute<V> {
    /// Creates an untransformed attribute from its value.
    ///
    /// Identity transformation cannot fail, so this constructor is
    /// infallible.
    pub fn new(value: V) -> Self {
        Self {
            raw: value.clone(),
            value,
        }
    }
}

impl<T: Transformer> Clone for TransformedAttribute<T>
where
    T::Raw: Clone,
    T::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            value: self.value.clone(),
        }
    }
}

impl<T: Transformer> fmt::Debug for TransformedAttribute<T>
where
    T::Raw: fmt::Debug,
    T::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformedAttribute")
            .field("raw", &self.raw)
            .field("value", &self.value)
            .finish()
    }
}

impl<T: Transformer> PartialEq for TransformedAttribute<T>
where
    T::Raw: PartialEq,
    T::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        // value is a pure function of raw, so raw equality is sufficient.
        self.raw == other.raw
    }
}

impl<T: Transformer> Eq for TransformedAttribute<T>
where
    T::Raw: Eq,
    T::Value: Eq,
{
}

impl<T: Transformer> Serialize for TransformedAttribute<T>
where
    T::Raw: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: Transformer> Deserialize<'de> for TransformedAttribute<T>
where
    T::Raw: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = T::Raw::deserialize(deserializer)?;
        Self::try_new(raw).map_err(|err| de::Error::custom(ResourceError::Transformation(err)))
    }
}
