use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declared SQL type of a column.
///
/// The category predicates below mirror the subtype lattice of the source
/// metadata model: sized and unsized strings share a category, enumerations
/// are string subtypes, and floats are numeric subtypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlType {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<u32>,
    },
    Text,
    Integer,
    SmallInteger,
    BigInteger,
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        precision: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<u32>,
    },
    Float,
    Boolean,
    Date,
    Time,
    DateTime,
    Enum {
        name: String,
        labels: Vec<String>,
    },
    Uuid,
    LargeBinary,
}

impl SqlType {
    /// Unsized string type.
    pub fn string() -> Self {
        SqlType::String { length: None }
    }

    /// String type with a maximum length.
    pub fn sized_string(length: u32) -> Self {
        SqlType::String {
            length: Some(length),
        }
    }

    /// True for string types, including enumerations (enums subtype strings
    /// in the source metadata model).
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            SqlType::String { .. } | SqlType::Text | SqlType::Enum { .. }
        )
    }

    /// True for the integer family.
    pub fn is_integer_like(&self) -> bool {
        matches!(
            self,
            SqlType::Integer | SqlType::SmallInteger | SqlType::BigInteger
        )
    }

    /// True for arbitrary-precision and floating-point numerics.
    pub fn is_numeric_like(&self) -> bool {
        matches!(self, SqlType::Numeric { .. } | SqlType::Float)
    }

    /// Declared maximum length for sized string types.
    pub fn length(&self) -> Option<u32> {
        match self {
            SqlType::String { length } => *length,
            _ => None,
        }
    }

    /// Labels of an enumeration type.
    pub fn enum_labels(&self) -> Option<&[String]> {
        match self {
            SqlType::Enum { labels, .. } => Some(labels.as_slice()),
            _ => None,
        }
    }
}
