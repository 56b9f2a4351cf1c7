//! Descriptors for collections, fields and permission grants.
//!
//! The structs serialize 1:1 into the bodies the Directus schema API
//! expects (`POST /collections`, `POST|PATCH /fields/...`,
//! `POST /permissions`), so the HTTP client can pass them straight to
//! `RequestBuilder::json`. Optional keys are omitted rather than sent
//! as `null` — Directus treats an explicit `null` as a value.

use serde::Serialize;
use serde_json::{Value, json};

/// Column data types used by the articles schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    String,
    Text,
    Timestamp,
}

/// Admin-panel column width hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Full,
    Half,
}

/// One entry of a dropdown choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub text: String,
    pub value: String,
}

impl Choice {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Database-level constraints of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_auto_increment: Option<bool>,
}

/// Dropdown options container (`meta.options`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    pub choices: Vec<Choice>,
}

/// Admin-panel presentation of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Width>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
    /// System behaviors such as `date-created` / `date-updated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<Vec<String>>,
}

/// Full declarative description of one field.
///
/// The name is immutable once the field exists remotely; reconciliation
/// updates type, constraints and presentation, never the name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    pub meta: FieldMeta,
}

impl FieldSpec {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            field_type,
            schema: None,
            meta: FieldMeta::default(),
        }
    }

    pub fn with_schema(mut self, schema: FieldSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn name(&self) -> &str {
        &self.field
    }
}

/// Admin-panel presentation of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionMeta {
    pub icon: String,
    pub note: String,
    pub display_template: String,
    pub archive_field: String,
    pub archive_value: String,
    pub unarchive_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSchema {
    pub name: String,
}

/// Declarative description of a collection, carrying exactly the
/// primary-key field. The primary key is created with the collection
/// and never touched again; ordinary fields are reconciled separately.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSpec {
    pub collection: String,
    pub meta: CollectionMeta,
    pub schema: CollectionSchema,
    pub fields: Vec<FieldSpec>,
}

impl CollectionSpec {
    pub fn name(&self) -> &str {
        &self.collection
    }
}

/// A permission granted to the anonymous (public) principal.
///
/// `role` serializes as `null`, which is how Directus addresses the
/// public role. At most one grant per (role, collection, action) is
/// needed; an existing grant is a success condition, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermissionGrant {
    pub role: Option<String>,
    pub collection: String,
    pub action: String,
    pub fields: Vec<String>,
    /// Row filter: which records the grant exposes.
    pub permissions: Value,
}

/// Name of the provisioned collection.
pub const COLLECTION_NAME: &str = "articles";

/// The `articles` collection descriptor, including its auto-increment
/// integer primary key (hidden and read-only in the admin panel).
pub fn articles_collection() -> CollectionSpec {
    CollectionSpec {
        collection: COLLECTION_NAME.to_string(),
        meta: CollectionMeta {
            icon: "article".to_string(),
            note: "Content management for articles".to_string(),
            display_template: "{{title}}".to_string(),
            archive_field: "status".to_string(),
            archive_value: "archived".to_string(),
            unarchive_value: "draft".to_string(),
        },
        schema: CollectionSchema {
            name: COLLECTION_NAME.to_string(),
        },
        fields: vec![
            FieldSpec::new("id", FieldType::Integer)
                .with_schema(FieldSchema {
                    is_primary_key: Some(true),
                    has_auto_increment: Some(true),
                    ..FieldSchema::default()
                })
                .with_meta(FieldMeta {
                    hidden: Some(true),
                    interface: Some("input".to_string()),
                    readonly: Some(true),
                    ..FieldMeta::default()
                }),
        ],
    }
}

/// The declared field set, in declaration order. Order matters only
/// for report readability; the fields are mutually independent.
pub fn article_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("status", FieldType::String)
            .with_schema(FieldSchema {
                default_value: Some(json!("draft")),
                max_length: Some(20),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                width: Some(Width::Full),
                interface: Some("select-dropdown".to_string()),
                options: Some(FieldOptions {
                    choices: vec![
                        Choice::new("Draft", "draft"),
                        Choice::new("Published", "published"),
                        Choice::new("Archived", "archived"),
                    ],
                }),
                ..FieldMeta::default()
            }),
        FieldSpec::new("title", FieldType::String)
            .with_schema(FieldSchema {
                max_length: Some(255),
                is_nullable: Some(false),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                width: Some(Width::Full),
                interface: Some("input".to_string()),
                required: Some(true),
                ..FieldMeta::default()
            }),
        FieldSpec::new("slug", FieldType::String)
            .with_schema(FieldSchema {
                max_length: Some(255),
                is_unique: Some(true),
                is_nullable: Some(false),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                width: Some(Width::Full),
                interface: Some("input".to_string()),
                required: Some(true),
                ..FieldMeta::default()
            }),
        FieldSpec::new("excerpt", FieldType::Text).with_meta(FieldMeta {
            width: Some(Width::Full),
            interface: Some("input-multiline".to_string()),
            ..FieldMeta::default()
        }),
        FieldSpec::new("content", FieldType::Text).with_meta(FieldMeta {
            width: Some(Width::Full),
            interface: Some("input-rich-text-html".to_string()),
            ..FieldMeta::default()
        }),
        FieldSpec::new("category", FieldType::String)
            .with_schema(FieldSchema {
                max_length: Some(50),
                is_nullable: Some(false),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                width: Some(Width::Half),
                interface: Some("select-dropdown".to_string()),
                required: Some(true),
                options: Some(FieldOptions {
                    choices: vec![
                        Choice::new("Emotions", "emotions"),
                        Choice::new("Self-help", "self_help"),
                        Choice::new("Relationships", "relationships"),
                        Choice::new("Stress", "stress"),
                        Choice::new("Other", "other"),
                    ],
                }),
                ..FieldMeta::default()
            }),
        FieldSpec::new("read_time", FieldType::Integer).with_meta(FieldMeta {
            width: Some(Width::Half),
            interface: Some("input".to_string()),
            ..FieldMeta::default()
        }),
        FieldSpec::new("image_url", FieldType::String)
            .with_schema(FieldSchema {
                max_length: Some(500),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                width: Some(Width::Full),
                interface: Some("input".to_string()),
                ..FieldMeta::default()
            }),
        FieldSpec::new("created_at", FieldType::Timestamp)
            .with_schema(FieldSchema {
                default_value: Some(json!("CURRENT_TIMESTAMP")),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                interface: Some("datetime".to_string()),
                readonly: Some(true),
                special: Some(vec!["date-created".to_string()]),
                ..FieldMeta::default()
            }),
        FieldSpec::new("updated_at", FieldType::Timestamp)
            .with_schema(FieldSchema {
                default_value: Some(json!("CURRENT_TIMESTAMP")),
                ..FieldSchema::default()
            })
            .with_meta(FieldMeta {
                interface: Some("datetime".to_string()),
                readonly: Some(true),
                special: Some(vec!["date-updated".to_string()]),
                ..FieldMeta::default()
            }),
    ]
}

/// Public read access to published articles. `updated_at` is
/// deliberately not exposed.
pub fn public_read_grant() -> PermissionGrant {
    PermissionGrant {
        role: None,
        collection: COLLECTION_NAME.to_string(),
        action: "read".to_string(),
        fields: [
            "id",
            "status",
            "title",
            "slug",
            "excerpt",
            "content",
            "category",
            "read_time",
            "image_url",
            "created_at",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
        permissions: json!({ "status": { "_eq": "published" } }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_fields_in_order() {
        let fields = article_fields();
        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "status",
                "title",
                "slug",
                "excerpt",
                "content",
                "category",
                "read_time",
                "image_url",
                "created_at",
                "updated_at",
            ]
        );
    }

    #[test]
    fn status_field_wire_shape() {
        let fields = article_fields();
        let status = serde_json::to_value(&fields[0]).unwrap();
        assert_eq!(
            status,
            json!({
                "field": "status",
                "type": "string",
                "schema": { "default_value": "draft", "max_length": 20 },
                "meta": {
                    "width": "full",
                    "interface": "select-dropdown",
                    "options": {
                        "choices": [
                            { "text": "Draft", "value": "draft" },
                            { "text": "Published", "value": "published" },
                            { "text": "Archived", "value": "archived" },
                        ]
                    }
                }
            })
        );
    }

    #[test]
    fn optional_keys_are_omitted() {
        let excerpt = &article_fields()[3];
        let value = serde_json::to_value(excerpt).unwrap();
        assert!(value.get("schema").is_none());
        let meta = value.get("meta").unwrap().as_object().unwrap();
        assert!(!meta.contains_key("required"));
        assert!(!meta.contains_key("options"));
        assert!(!meta.contains_key("special"));
    }

    #[test]
    fn timestamp_fields_carry_specials() {
        let fields = article_fields();
        let created = fields.iter().find(|f| f.name() == "created_at").unwrap();
        assert_eq!(
            created.meta.special,
            Some(vec!["date-created".to_string()])
        );
        assert_eq!(created.meta.readonly, Some(true));
        let updated = fields.iter().find(|f| f.name() == "updated_at").unwrap();
        assert_eq!(
            updated.meta.special,
            Some(vec!["date-updated".to_string()])
        );
    }

    #[test]
    fn collection_carries_exactly_one_primary_key() {
        let spec = articles_collection();
        assert_eq!(spec.name(), "articles");
        assert_eq!(spec.fields.len(), 1);
        let pk = &spec.fields[0];
        assert_eq!(pk.name(), "id");
        let schema = pk.schema.as_ref().unwrap();
        assert_eq!(schema.is_primary_key, Some(true));
        assert_eq!(schema.has_auto_increment, Some(true));
        assert_eq!(pk.meta.hidden, Some(true));
        assert_eq!(pk.meta.readonly, Some(true));
    }

    #[test]
    fn collection_wire_shape_includes_archive_config() {
        let value = serde_json::to_value(articles_collection()).unwrap();
        assert_eq!(value["collection"], "articles");
        assert_eq!(value["schema"]["name"], "articles");
        assert_eq!(value["meta"]["display_template"], "{{title}}");
        assert_eq!(value["meta"]["archive_field"], "status");
        assert_eq!(value["meta"]["archive_value"], "archived");
        assert_eq!(value["meta"]["unarchive_value"], "draft");
    }

    #[test]
    fn public_grant_targets_anonymous_role() {
        let value = serde_json::to_value(public_read_grant()).unwrap();
        assert_eq!(value["role"], json!(null));
        assert_eq!(value["collection"], "articles");
        assert_eq!(value["action"], "read");
        assert_eq!(value["permissions"], json!({ "status": { "_eq": "published" } }));
    }

    #[test]
    fn public_grant_excludes_updated_at() {
        let grant = public_read_grant();
        assert!(grant.fields.contains(&"created_at".to_string()));
        assert!(!grant.fields.contains(&"updated_at".to_string()));
    }
}
