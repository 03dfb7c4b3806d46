use serde::{Deserialize, Serialize};

use tablecast_schema::Value;

/// Kind of a resource field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Time,
    DateTime,
    Enum,
}

/// A field declaration on a resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field_type: FieldType,
    /// Whether the field accepts null values.
    pub null: bool,
    /// Whether the field is a key field.
    pub key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values for enum fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl FieldSpec {
    /// New nullable, non-key field of the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            null: true,
            key: false,
            max_length: None,
            doc_text: None,
            default: None,
            choices: Vec::new(),
        }
    }

    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.null = false;
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_doc_text(mut self, doc_text: impl Into<String>) -> Self {
        self.doc_text = Some(doc_text.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }
}
