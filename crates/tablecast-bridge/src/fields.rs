use tablecast_resource::{FieldSpec, FieldType};
use tablecast_schema::{Column, SqlType};

/// One conversion rule: a category predicate over the declared type plus a
/// field constructor.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub matches: fn(&SqlType) -> bool,
    pub build: fn(&Column) -> FieldSpec,
}

/// Ordered column-type → field conversion table.
///
/// Rules are consulted top to bottom and the first match wins, so a broad
/// rule placed early shadows narrower rules below it.
#[derive(Debug, Clone)]
pub struct FieldTypeTable {
    rules: Vec<FieldRule>,
}

impl Default for FieldTypeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl FieldTypeTable {
    /// The standard table, preserving the historical rule order.
    ///
    /// Ordering hazard: the string rule also matches enum columns (enums
    /// subtype strings), so the dedicated enum rule at the bottom never
    /// fires here. Kept as-is; use `with_enum_fields` to promote it.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                FieldRule {
                    matches: SqlType::is_string_like,
                    build: string_field,
                },
                FieldRule {
                    matches: SqlType::is_integer_like,
                    build: |column| base_field(FieldType::Integer, column),
                },
                FieldRule {
                    matches: SqlType::is_numeric_like,
                    build: |column| base_field(FieldType::Float, column),
                },
                FieldRule {
                    matches: |sql_type| matches!(sql_type, SqlType::Boolean),
                    build: |column| base_field(FieldType::Boolean, column),
                },
                FieldRule {
                    matches: |sql_type| matches!(sql_type, SqlType::Date),
                    build: |column| base_field(FieldType::Date, column),
                },
                FieldRule {
                    matches: |sql_type| matches!(sql_type, SqlType::Time),
                    build: |column| base_field(FieldType::Time, column),
                },
                FieldRule {
                    matches: |sql_type| matches!(sql_type, SqlType::DateTime),
                    build: |column| base_field(FieldType::DateTime, column),
                },
                FieldRule {
                    matches: |sql_type| matches!(sql_type, SqlType::Enum { .. }),
                    build: enum_field,
                },
            ],
        }
    }

    /// Variant of the standard table with the enum rule promoted ahead of
    /// the string rule, so enum columns become dedicated enum fields.
    pub fn with_enum_fields() -> Self {
        let mut rules = vec![FieldRule {
            matches: |sql_type| matches!(sql_type, SqlType::Enum { .. }),
            build: enum_field,
        }];
        rules.extend(Self::standard().rules);
        Self { rules }
    }

    /// Append a rule at the end of the table.
    pub fn push_rule(&mut self, rule: FieldRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}

fn base_field(field_type: FieldType, column: &Column) -> FieldSpec {
    let mut spec = FieldSpec::new(field_type);
    spec.null = column.nullable;
    spec.key = column.primary_key;
    spec.doc_text = column.doc.clone();
    spec.default = column.default.clone();
    spec
}

fn string_field(column: &Column) -> FieldSpec {
    let mut spec = base_field(FieldType::String, column);
    spec.max_length = column.sql_type.length();
    spec
}

fn enum_field(column: &Column) -> FieldSpec {
    let mut spec = base_field(FieldType::Enum, column);
    spec.choices = column
        .sql_type
        .enum_labels()
        .map(|labels| labels.to_vec())
        .unwrap_or_default();
    spec
}

/// Convert one column into a resource field through the table.
///
/// Returns `None` when no rule matches the declared type; unknown column
/// types are dropped rather than raised, so callers must verify expected
/// fields exist after construction.
pub fn field_factory(table: &FieldTypeTable, column: &Column) -> Option<FieldSpec> {
    table
        .rules()
        .iter()
        .find(|rule| (rule.matches)(&column.sql_type))
        .map(|rule| (rule.build)(column))
}
