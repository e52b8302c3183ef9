//! Primary-key type resolution.
//!
//! Every table resolves to exactly one key representation. The policy is a
//! pure function of the table's key-column count, so two passes over the
//! same descriptor always agree with the generic arguments bound later by
//! the interface binder.

use serde::{Deserialize, Serialize};

use repogen_core::{TableDescriptor, TypeRef};

/// Key columns beyond this count resolve to a synthetic composite type.
pub const COMPOSITE_KEY_THRESHOLD: usize = 1;

/// Resolved primary-key representation for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// Single key column: that column's semantic type.
    Column(TypeRef),
    /// Multi-column key: the synthetic `<Entity>Key` type.
    ///
    /// The composite type is generated elsewhere; the resolver only names
    /// it.
    Composite(TypeRef),
    /// No key columns: the entity type stands in.
    Entity(TypeRef),
}

impl KeyType {
    /// The underlying type reference.
    pub fn type_ref(&self) -> &TypeRef {
        match self {
            KeyType::Column(ty) | KeyType::Composite(ty) | KeyType::Entity(ty) => ty,
        }
    }
}

/// Resolves the key type for a table.
///
/// Total over every input: zero key columns fall back to the entity type,
/// a single column uses that column's semantic type, and more than
/// [`COMPOSITE_KEY_THRESHOLD`] columns name the synthetic `<Entity>Key`
/// in the entity's module.
///
/// # Examples
///
/// ```
/// use repogen_core::{ColumnRef, TableDescriptor, TypeRef};
/// use repogen_plugin::{KeyType, resolve_key_type};
///
/// let orders = TableDescriptor::new("orders", "crate::model")
///     .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
/// assert_eq!(resolve_key_type(&orders), KeyType::Column(TypeRef::new("i64")));
/// ```
pub fn resolve_key_type(table: &TableDescriptor) -> KeyType {
    match table.key_columns.len() {
        0 => KeyType::Entity(table.entity_type()),
        n if n > COMPOSITE_KEY_THRESHOLD => KeyType::Composite(TypeRef::in_module(
            &table.entity_module,
            &format!("{}Key", table.entity_name),
        )),
        _ => KeyType::Column(table.key_columns[0].ty.clone()),
    }
}
