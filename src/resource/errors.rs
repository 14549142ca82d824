//! Error types for resource object construction, transformation, and decoding.
//!
//! This module contains the error taxonomy for the resource object codec:
//!
//! - [`TransformError`]: A [`Transformer`](crate::resource::Transformer)
//!   rejected a raw value
//! - [`ResourceError`]: Decode-path failures (type mismatch, missing or
//!   malformed members)
//! - [`BuildError`]: A required component was not supplied to the builder
//!
//! # Error Handling
//!
//! All errors surface immediately to the caller; nothing is retried or
//! recovered internally, and no partially-constructed resource object is
//! ever produced. Decode-path errors cross the serde boundary via
//! `serde::de::Error::custom`, so the full diagnostic survives in the
//! deserializer's error message.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_resource::ResourceError;
//!
//! let error = ResourceError::TypeMismatch {
//!     expected: "articles",
//!     found: "people".to_string(),
//! };
//! assert!(error.to_string().contains("articles"));
//! assert!(error.to_string().contains("people"));
//! ```

use thiserror::Error;

/// Error produced by a [`Transformer`](crate::resource::Transformer) that
/// rejected a raw value.
///
/// Transformers return this error when a wire value violates a domain
/// constraint (out of range, malformed, etc.). The message is the
/// transformer's own diagnostic and is preserved verbatim when the error
/// propagates out of a decode.
///
/// # Example
///
/// ```rust
/// use jsonapi_resource::TransformError;
///
/// let error = TransformError::new("expected a non-negative count");
/// assert_eq!(error.to_string(), "expected a non-negative count");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    /// Creates a new transformation error with the given diagnostic.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the transformer's diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error type for resource object decoding.
///
/// Decoding a resource object is all-or-nothing: any of these errors aborts
/// the decode, and the caller receives no partial record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The decoded `type` member differs from the resource description's
    /// bound type name.
    ///
    /// Type-name mismatch is a hard decode error, not a silent coercion:
    /// the remaining members are not examined.
    #[error("resource type mismatch: expected `{expected}`, found `{found}`")]
    TypeMismatch {
        /// The type name bound to the resource description.
        expected: &'static str,
        /// The type name found on the wire.
        found: String,
    },

    /// A transformer rejected a raw attribute value during decoding.
    #[error("attribute transformation failed: {0}")]
    Transformation(#[from] TransformError),

    /// A required member was present on the wire but wrongly shaped.
    #[error("invalid `{member}` member: {detail}")]
    Member {
        /// The name of the offending member (e.g. `"attributes"`).
        member: &'static str,
        /// The underlying decode diagnostic.
        detail: String,
    },

    /// A required, non-marker member was missing from the wire record.
    #[error("missing required `{0}` member")]
    MissingMember(&'static str),
}

/// Error type for [`ResourceObjectBuilder`](crate::resource::ResourceObjectBuilder).
///
/// Returned by `build()` when a component whose type is not one of the
/// empty markers was never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required component was not set before building.
    #[error("missing required component: '{field}'. This component must be set before building the resource object.")]
    MissingField {
        /// The name of the missing component.
        field: &'static str,
    },
}
