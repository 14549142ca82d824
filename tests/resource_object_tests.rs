//! Integration tests for resource object encoding and decoding.
//!
//! These tests verify the conditional codec: marker suppression, type-name
//! enforcement, order-independent decoding, nullable attribute handling,
//! and transformation failure propagation.

use jsonapi_resource::{
    Attribute, Attributes, Id, Links, Meta, NoAttributes, NoLinks, NoMetadata, NoRelationships,
    Relationships, ResourceDescription, ResourceObject, ToManyRelation, ToOneRelation,
    TransformError, TransformedAttribute, Transformer, Unidentified,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// Test Resource Shapes
// ============================================================================

enum Author {}

impl ResourceDescription for Author {
    type Attributes = NoAttributes;
    type Relationships = NoRelationships;
    const TYPE: &'static str = "authors";
}

enum Comment {}

impl ResourceDescription for Comment {
    type Attributes = NoAttributes;
    type Relationships = NoRelationships;
    const TYPE: &'static str = "comments";
}

/// A fully concrete article: every optional component is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ArticleAttributes {
    title: Attribute<String>,
    /// Nullable on the wire: the raw type is `Option<i64>`.
    rating: Attribute<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<Attribute<String>>,
}

impl Attributes for ArticleAttributes {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AuthorRef(Id<u64, Author>);

impl ToOneRelation for AuthorRef {
    type Identifier = Id<u64, Author>;

    fn id(&self) -> &Id<u64, Author> {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CommentRefs(Vec<Id<u64, Comment>>);

impl ToManyRelation for CommentRefs {
    type Identifier = Id<u64, Comment>;

    fn ids(&self) -> &[Id<u64, Comment>] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ArticleRelationships {
    author: AuthorRef,
    comments: CommentRefs,
}

impl Relationships for ArticleRelationships {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ArticleMeta {
    revision: u32,
}

impl Meta for ArticleMeta {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ArticleLinks {
    #[serde(rename = "self")]
    self_link: String,
}

impl Links for ArticleLinks {}

enum Article {}

impl ResourceDescription for Article {
    type Attributes = ArticleAttributes;
    type Relationships = ArticleRelationships;
    const TYPE: &'static str = "articles";
}

type ArticleObject = ResourceObject<Article, ArticleMeta, ArticleLinks, u64>;

/// A bare resource: every optional component is an empty marker.
enum Tag {}

impl ResourceDescription for Tag {
    type Attributes = NoAttributes;
    type Relationships = NoRelationships;
    const TYPE: &'static str = "tags";
}

type TagObject = ResourceObject<Tag, NoMetadata, NoLinks, u64>;
type NewTagObject = ResourceObject<Tag, NoMetadata, NoLinks, Unidentified>;

/// Rejects the raw value 5, accepts everything else unchanged.
enum RejectFive {}

impl Transformer for RejectFive {
    type Raw = i64;
    type Value = i64;

    fn transform(raw: &i64) -> Result<i64, TransformError> {
        if *raw == 5 {
            Err(TransformError::new("value 5 is not allowed"))
        } else {
            Ok(*raw)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TallyAttributes {
    count: TransformedAttribute<RejectFive>,
}

impl Attributes for TallyAttributes {}

enum Tally {}

impl ResourceDescription for Tally {
    type Attributes = TallyAttributes;
    type Relationships = NoRelationships;
    const TYPE: &'static str = "tallies";
}

type TallyObject = ResourceObject<Tally, NoMetadata, NoLinks, u64>;

fn sample_article() -> ArticleObject {
    ArticleObject::new(
        Id::new(1),
        ArticleAttributes {
            title: Attribute::new("Measuring Coastlines".to_string()),
            rating: Attribute::new(Some(4)),
            subtitle: Some(Attribute::new("A survey".to_string())),
        },
        ArticleRelationships {
            author: AuthorRef(Id::new(9)),
            comments: CommentRefs(vec![Id::new(2), Id::new(3), Id::new(2)]),
        },
        ArticleMeta { revision: 7 },
        ArticleLinks {
            self_link: "/articles/1".to_string(),
        },
    )
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_round_trip_preserves_fully_concrete_resource() {
    let article = sample_article();
    let json = serde_json::to_value(&article).unwrap();
    let decoded: ArticleObject = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, article);
}

#[test]
fn test_encode_emits_members_in_stable_order() {
    let text = serde_json::to_string(&sample_article()).unwrap();
    let keys = [
        "\"type\"",
        "\"id\"",
        "\"attributes\"",
        "\"relationships\"",
        "\"meta\"",
        "\"links\"",
    ];
    let mut last = 0;
    for key in keys {
        let pos = text.find(key).unwrap_or_else(|| panic!("missing {key}"));
        assert!(pos >= last, "{key} out of order in {text}");
        last = pos;
    }
}

#[test]
fn test_decode_accepts_any_member_order() {
    let json = json!({
        "links": { "self": "/articles/1" },
        "meta": { "revision": 7 },
        "relationships": { "author": 9, "comments": [2, 3, 2] },
        "attributes": { "title": "Measuring Coastlines", "rating": 4, "subtitle": "A survey" },
        "id": 1,
        "type": "articles"
    });
    let decoded: ArticleObject = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, sample_article());
}

#[test]
fn test_decode_ignores_unknown_members() {
    let json = json!({
        "type": "tags",
        "id": 4,
        "unknown": { "anything": [1, 2, 3] }
    });
    let decoded: TagObject = serde_json::from_value(json).unwrap();
    assert_eq!(*decoded.id(), Id::new(4));
}

// ============================================================================
// Marker Suppression
// ============================================================================

#[test]
fn test_marker_components_never_encoded() {
    let tag = TagObject::new(
        Id::new(4),
        NoAttributes::none(),
        NoRelationships::none(),
        NoMetadata::none(),
        NoLinks::none(),
    );
    let json = serde_json::to_value(&tag).unwrap();
    assert_eq!(json, json!({ "type": "tags", "id": 4 }));
}

#[test]
fn test_marker_decode_succeeds_without_members() {
    let decoded: TagObject = serde_json::from_value(json!({ "type": "tags", "id": 4 })).unwrap();
    assert_eq!(decoded.attributes(), &NoAttributes::none());
    assert_eq!(decoded.relationships(), &NoRelationships::none());
    assert_eq!(decoded.meta(), &NoMetadata::none());
    assert_eq!(decoded.links(), &NoLinks::none());
}

#[test]
fn test_marker_decode_tolerates_unexpected_members() {
    // A marker member unexpectedly present on the wire is not read at all.
    let json = json!({
        "type": "tags",
        "id": 4,
        "attributes": { "stray": true },
        "meta": 12
    });
    let decoded: TagObject = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.attributes(), &NoAttributes::none());
    assert_eq!(decoded.meta(), &NoMetadata::none());
}

// ============================================================================
// Type-Name Enforcement
// ============================================================================

#[test]
fn test_type_mismatch_fails_naming_both_values() {
    let json = json!({ "type": "people", "id": 4 });
    let error = serde_json::from_value::<TagObject>(json).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("tags"), "{message}");
    assert!(message.contains("people"), "{message}");
}

#[test]
fn test_type_mismatch_wins_over_malformed_members() {
    // Even with a malformed attributes member, the type check fails first.
    let json = json!({
        "attributes": "not an object",
        "type": "people",
        "id": 1
    });
    let error = serde_json::from_value::<ArticleObject>(json).unwrap_err();
    assert!(error.to_string().contains("people"));
}

#[test]
fn test_missing_type_member_fails() {
    let json = json!({ "id": 4 });
    assert!(serde_json::from_value::<TagObject>(json).is_err());
}

// ============================================================================
// Required Members
// ============================================================================

#[test]
fn test_missing_required_member_fails() {
    let json = json!({
        "type": "articles",
        "id": 1,
        "relationships": { "author": 9, "comments": [] },
        "meta": { "revision": 7 },
        "links": { "self": "/articles/1" }
    });
    let error = serde_json::from_value::<ArticleObject>(json).unwrap_err();
    assert!(error.to_string().contains("attributes"), "{error}");
}

#[test]
fn test_wrongly_shaped_member_fails() {
    let json = json!({
        "type": "articles",
        "id": 1,
        "attributes": 42,
        "relationships": { "author": 9, "comments": [] },
        "meta": { "revision": 7 },
        "links": { "self": "/articles/1" }
    });
    let error = serde_json::from_value::<ArticleObject>(json).unwrap_err();
    assert!(error.to_string().contains("attributes"), "{error}");
}

// ============================================================================
// Nullable Attributes
// ============================================================================

#[test]
fn test_null_attribute_round_trips() {
    let json = json!({
        "type": "articles",
        "id": 1,
        "attributes": { "title": "Untitled", "rating": null },
        "relationships": { "author": 9, "comments": [] },
        "meta": { "revision": 0 },
        "links": { "self": "/articles/1" }
    });
    let decoded: ArticleObject = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(*decoded.attributes().rating.raw(), None);
    assert_eq!(*decoded.attributes().rating.value(), None);
    assert!(decoded.attributes().subtitle.is_none());

    // Re-encoding emits the wire null again.
    let encoded = serde_json::to_value(&decoded).unwrap();
    assert_eq!(encoded["attributes"]["rating"], json!(null));
    assert_eq!(encoded, json);
}

// ============================================================================
// Transformation Failures
// ============================================================================

#[test]
fn test_transformer_failure_aborts_decode() {
    let json = json!({ "type": "tallies", "id": 1, "attributes": { "count": 5 } });
    let error = serde_json::from_value::<TallyObject>(json).unwrap_err();
    assert!(error.to_string().contains("value 5 is not allowed"), "{error}");
}

#[test]
fn test_transformer_success_round_trips() {
    let json = json!({ "type": "tallies", "id": 1, "attributes": { "count": 7 } });
    let decoded: TallyObject = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(*decoded.attributes().count.value(), 7);
    assert_eq!(serde_json::to_value(&decoded).unwrap(), json);
}

// ============================================================================
// Identifier Kinds
// ============================================================================

#[test]
fn test_unidentified_resource_never_encodes_id() {
    let tag = NewTagObject::unidentified(
        NoAttributes::none(),
        NoRelationships::none(),
        NoMetadata::none(),
        NoLinks::none(),
    );
    let json = serde_json::to_value(&tag).unwrap();
    assert_eq!(json, json!({ "type": "tags" }));
}

#[test]
fn test_unidentified_decode_yields_sentinel() {
    let decoded: NewTagObject = serde_json::from_value(json!({ "type": "tags" })).unwrap();
    assert_eq!(decoded.id(), &Id::unidentified());
}

#[test]
fn test_unidentified_decode_ignores_present_id() {
    // An id on the wire is irrelevant to an unidentified shape.
    let decoded: NewTagObject =
        serde_json::from_value(json!({ "type": "tags", "id": 99 })).unwrap();
    assert_eq!(decoded.id(), &Id::unidentified());
}

#[test]
fn test_string_and_numeric_raw_ids() {
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Named {
        name: Attribute<String>,
    }

    impl Attributes for Named {}

    enum Badge {}

    impl ResourceDescription for Badge {
        type Attributes = Named;
        type Relationships = NoRelationships;
        const TYPE: &'static str = "badges";
    }

    let json = json!({ "type": "badges", "id": "gold-7", "attributes": { "name": "Gold" } });
    let decoded: ResourceObject<Badge, NoMetadata, NoLinks, String> =
        serde_json::from_value(json).unwrap();
    assert_eq!(decoded.id().raw(), "gold-7");
}
