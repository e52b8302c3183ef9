//! Table metadata consumed from the host generator's introspection.
//!
//! A [`TableDescriptor`] is read-only input: the host introspects the
//! database and hands one descriptor per table to the transformation
//! stage. Entity and criteria type names are configurable per table, with
//! defaults derived from the table name.

use serde::{Deserialize, Serialize};

use crate::TypeRef;
use crate::naming::to_pascal_case;

/// A primary-key column with its resolved semantic Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Column name as introspected.
    pub name: String,
    /// Semantic Rust type mapped from the column's SQL type.
    pub ty: TypeRef,
}

impl ColumnRef {
    /// Creates a column reference.
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

/// Read-only description of one introspected table.
///
/// # Examples
///
/// ```
/// use repogen_core::{ColumnRef, TableDescriptor, TypeRef};
///
/// let orders = TableDescriptor::new("orders", "crate::model")
///     .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
///
/// assert_eq!(orders.entity_name, "Orders");
/// assert_eq!(orders.entity_type().qualified(), "crate::model::Orders");
/// assert_eq!(orders.criteria_type().name, "OrdersCriteria");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Table name as introspected (e.g. `"line_items"`).
    pub table_name: String,
    /// Configured entity type name; defaults to the PascalCase table name.
    pub entity_name: String,
    /// Configured criteria type name; `None` defaults to `<Entity>Criteria`.
    #[serde(default)]
    pub criteria_name: Option<String>,
    /// Module path the entity, criteria, and key types live in.
    pub entity_module: String,
    /// Primary-key columns in ordinal order.
    #[serde(default)]
    pub key_columns: Vec<ColumnRef>,
}

impl TableDescriptor {
    /// Creates a descriptor with the entity name derived from the table
    /// name.
    pub fn new(table_name: &str, entity_module: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            entity_name: to_pascal_case(table_name),
            criteria_name: None,
            entity_module: entity_module.to_string(),
            key_columns: Vec::new(),
        }
    }

    /// Overrides the configured entity type name.
    pub fn with_entity_name(mut self, name: &str) -> Self {
        self.entity_name = name.to_string();
        self
    }

    /// Overrides the configured criteria type name.
    pub fn with_criteria_name(mut self, name: &str) -> Self {
        self.criteria_name = Some(name.to_string());
        self
    }

    /// Appends a primary-key column.
    pub fn with_key_column(mut self, column: ColumnRef) -> Self {
        self.key_columns.push(column);
        self
    }

    /// The entity type for this table.
    pub fn entity_type(&self) -> TypeRef {
        TypeRef::in_module(&self.entity_module, &self.entity_name)
    }

    /// The criteria type for this table, falling back to
    /// `<Entity>Criteria` when none is configured.
    pub fn criteria_type(&self) -> TypeRef {
        let name = self
            .criteria_name
            .clone()
            .unwrap_or_else(|| format!("{}Criteria", self.entity_name));
        TypeRef::in_module(&self.entity_module, &name)
    }
}
