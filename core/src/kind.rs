//! The closed set of built-in data-access operation kinds.

use serde::{Deserialize, Serialize};

/// One of the built-in operation kinds the host generates per table.
///
/// The six operation categories (insert, delete-by-key, select-by-key,
/// select/delete/count-by-criteria, update variants) expand to fourteen
/// concrete kinds once the selective and blob variants are counted.
/// Declaration order is the stable ordering used by the canonical method
/// catalog and, through it, by the synthesized base trait.
///
/// # Examples
///
/// ```
/// use repogen_core::OperationKind;
///
/// assert_eq!(OperationKind::SelectByKey.method_name(), "select_by_key");
/// assert_eq!(OperationKind::ALL.len(), 14);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// Insert a full row.
    Insert,
    /// Insert only the populated fields.
    InsertSelective,
    /// Select one row by primary key.
    SelectByKey,
    /// Select rows matching criteria, without BLOB columns.
    SelectByCriteria,
    /// Select rows matching criteria, including BLOB columns.
    SelectByCriteriaWithBlobs,
    /// Count rows matching criteria.
    CountByCriteria,
    /// Update a row by primary key, without BLOB columns.
    UpdateByKey,
    /// Update a row by primary key, including BLOB columns.
    UpdateByKeyWithBlobs,
    /// Update only the populated fields of a row, by primary key.
    UpdateByKeySelective,
    /// Update rows matching criteria, without BLOB columns.
    UpdateByCriteria,
    /// Update rows matching criteria, including BLOB columns.
    UpdateByCriteriaWithBlobs,
    /// Update only the populated fields of rows matching criteria.
    UpdateByCriteriaSelective,
    /// Delete one row by primary key.
    DeleteByKey,
    /// Delete rows matching criteria.
    DeleteByCriteria,
}

impl OperationKind {
    /// Every kind, in declaration order.
    pub const ALL: [OperationKind; 14] = [
        OperationKind::Insert,
        OperationKind::InsertSelective,
        OperationKind::SelectByKey,
        OperationKind::SelectByCriteria,
        OperationKind::SelectByCriteriaWithBlobs,
        OperationKind::CountByCriteria,
        OperationKind::UpdateByKey,
        OperationKind::UpdateByKeyWithBlobs,
        OperationKind::UpdateByKeySelective,
        OperationKind::UpdateByCriteria,
        OperationKind::UpdateByCriteriaWithBlobs,
        OperationKind::UpdateByCriteriaSelective,
        OperationKind::DeleteByKey,
        OperationKind::DeleteByCriteria,
    ];

    /// Default method name the host generates for this kind.
    pub fn method_name(self) -> &'static str {
        match self {
            OperationKind::Insert => "insert",
            OperationKind::InsertSelective => "insert_selective",
            OperationKind::SelectByKey => "select_by_key",
            OperationKind::SelectByCriteria => "select_by_criteria",
            OperationKind::SelectByCriteriaWithBlobs => "select_by_criteria_with_blobs",
            OperationKind::CountByCriteria => "count_by_criteria",
            OperationKind::UpdateByKey => "update_by_key",
            OperationKind::UpdateByKeyWithBlobs => "update_by_key_with_blobs",
            OperationKind::UpdateByKeySelective => "update_by_key_selective",
            OperationKind::UpdateByCriteria => "update_by_criteria",
            OperationKind::UpdateByCriteriaWithBlobs => "update_by_criteria_with_blobs",
            OperationKind::UpdateByCriteriaSelective => "update_by_criteria_selective",
            OperationKind::DeleteByKey => "delete_by_key",
            OperationKind::DeleteByCriteria => "delete_by_criteria",
        }
    }
}
