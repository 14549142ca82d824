//! Wire codec for [`ResourceObject`]: conditional member encoding and
//! order-independent, all-or-nothing decoding.
//!
//! # Encoding
//!
//! A resource object encodes to a keyed record containing exactly the
//! `type` member plus each statically-present component, in the stable
//! order `type`, `id`, `attributes`, `relationships`, `meta`, `links`.
//! A component is skipped iff its type is an empty marker; the `id` member
//! is skipped iff the identifier kind is
//! [`Unidentified`](crate::resource::Unidentified). Each check
//! monomorphizes to a constant, so the skip decisions cost nothing at
//! run time.
//!
//! # Decoding
//!
//! Members are read in any order (decoders must not depend on the encode
//! order) and unknown members are ignored. The `type` member is validated
//! first: a mismatch against the description's bound name fails the whole
//! decode with [`ResourceError::TypeMismatch`] before any other member is
//! examined. Marker components are synthesized without reading the wire —
//! the decode succeeds whether the member is absent or unexpectedly
//! present. Non-marker members are required; absence or a shape mismatch
//! fails the decode. No partial record is ever produced.

use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::resource::component::{Attributes, Links, Meta, Relationships};
use crate::resource::errors::ResourceError;
use crate::resource::identifier::{Id, MaybeRawId};
use crate::resource::object::{ResourceDescription, ResourceObject};

impl<D, M, L, R> Serialize for ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut members = 1;
        if R::unidentified().is_none() {
            members += 1;
        }
        if <D::Attributes as Attributes>::absent().is_none() {
            members += 1;
        }
        if <D::Relationships as Relationships>::absent().is_none() {
            members += 1;
        }
        if M::absent().is_none() {
            members += 1;
        }
        if L::absent().is_none() {
            members += 1;
        }

        let mut record = serializer.serialize_struct("ResourceObject", members)?;
        record.serialize_field("type", D::TYPE)?;
        if R::unidentified().is_none() {
            record.serialize_field("id", self.id())?;
        }
        if <D::Attributes as Attributes>::absent().is_none() {
            record.serialize_field("attributes", self.attributes())?;
        }
        if <D::Relationships as Relationships>::absent().is_none() {
            record.serialize_field("relationships", self.relationships())?;
        }
        if M::absent().is_none() {
            record.serialize_field("meta", self.meta())?;
        }
        if L::absent().is_none() {
            record.serialize_field("links", self.links())?;
        }
        record.end()
    }
}

/// Buffered wire members, captured before any per-member decoding so that
/// type-name validation always runs first regardless of member order.
#[derive(Deserialize)]
struct RawMembers {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    attributes: Option<Value>,
    #[serde(default)]
    relationships: Option<Value>,
    #[serde(default)]
    meta: Option<Value>,
    #[serde(default)]
    links: Option<Value>,
}

/// Decodes a required, non-marker member from its buffered wire value.
fn member<T, E>(name: &'static str, value: Option<Value>) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    let value = value.ok_or_else(|| {
        tracing::debug!(member = name, "required member missing from resource object");
        E::custom(ResourceError::MissingMember(name))
    })?;
    serde_json::from_value(value).map_err(|err| {
        E::custom(ResourceError::Member {
            member: name,
            detail: err.to_string(),
        })
    })
}

impl<'de, D, M, L, R> Deserialize<'de> for ResourceObject<D, M, L, R>
where
    D: ResourceDescription,
    M: Meta,
    L: Links,
    R: MaybeRawId,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let members = RawMembers::deserialize(deserializer)?;

        if members.type_name != D::TYPE {
            tracing::debug!(
                expected = D::TYPE,
                found = %members.type_name,
                "resource type mismatch"
            );
            return Err(de::Error::custom(ResourceError::TypeMismatch {
                expected: D::TYPE,
                found: members.type_name,
            }));
        }

        let id = match R::unidentified() {
            Some(sentinel) => Id::new(sentinel),
            None => Id::new(member("id", members.id)?),
        };
        let attributes = match <D::Attributes as Attributes>::absent() {
            Some(marker) => marker,
            None => member("attributes", members.attributes)?,
        };
        let relationships = match <D::Relationships as Relationships>::absent() {
            Some(marker) => marker,
            None => member("relationships", members.relationships)?,
        };
        let meta = match M::absent() {
            Some(marker) => marker,
            None => member("meta", members.meta)?,
        };
        let links = match L::absent() {
            Some(marker) => marker,
            None => member("links", members.links)?,
        };

        Ok(Self::new(id, attributes, relationships, meta, links))
    }
}
