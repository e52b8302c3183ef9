//! Run-scoped canonical method catalog.

use std::collections::BTreeMap;

use tracing::warn;

use repogen_core::OperationKind;

use crate::descriptor::MethodDescriptor;

/// Registry of the canonical method shape per operation kind.
///
/// Scope is one generation run. Writes are last-writer-wins: the
/// normalization rules are pure functions of kind and role, so every table
/// records the same shape for a kind and overwrites are idempotent. An
/// overwrite that would change the shape indicates the host fed
/// structurally inconsistent raw methods and is logged before it lands.
///
/// The catalog is written while tables are normalized and read once at
/// synthesis time; the host's generation sequence must order those phases.
#[derive(Debug, Default)]
pub struct MethodCatalog {
    entries: BTreeMap<OperationKind, MethodDescriptor>,
}

impl MethodCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the canonical shape for a kind.
    pub fn record(&mut self, descriptor: MethodDescriptor) {
        if let Some(existing) = self.entries.get(&descriptor.kind) {
            if *existing != descriptor {
                warn!(
                    kind = ?descriptor.kind,
                    "Canonical method shape diverged across tables; keeping the newest"
                );
            }
        }
        self.entries.insert(descriptor.kind, descriptor);
    }

    /// Looks up the canonical shape for a kind.
    pub fn get(&self, kind: OperationKind) -> Option<&MethodDescriptor> {
        self.entries.get(&kind)
    }

    /// Returns whether a kind has been recorded.
    pub fn contains(&self, kind: OperationKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Number of recorded kinds.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Descriptors in stable kind order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ParamRole, ParamSlot, ReturnShape};
    use repogen_core::TypeRef;

    fn descriptor(kind: OperationKind, role: ParamRole) -> MethodDescriptor {
        MethodDescriptor {
            kind,
            name: kind.method_name().to_string(),
            params: vec![ParamSlot::new(role, "arg")],
            ret: ReturnShape::Other(Some(TypeRef::new("u64"))),
        }
    }

    #[test]
    fn test_record_and_get() {
        let mut catalog = MethodCatalog::new();
        catalog.record(descriptor(OperationKind::DeleteByKey, ParamRole::Key));
        assert!(catalog.contains(OperationKind::DeleteByKey));
        assert_eq!(
            catalog.get(OperationKind::DeleteByKey).unwrap().name,
            "delete_by_key"
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_identical_overwrite_is_idempotent() {
        let mut catalog = MethodCatalog::new();
        catalog.record(descriptor(OperationKind::Insert, ParamRole::Entity));
        catalog.record(descriptor(OperationKind::Insert, ParamRole::Entity));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_divergent_overwrite_keeps_newest() {
        let mut catalog = MethodCatalog::new();
        catalog.record(descriptor(OperationKind::Insert, ParamRole::Entity));
        catalog.record(descriptor(OperationKind::Insert, ParamRole::Key));
        assert_eq!(
            catalog.get(OperationKind::Insert).unwrap().params[0].role,
            ParamRole::Key
        );
    }

    #[test]
    fn test_iteration_follows_kind_order() {
        let mut catalog = MethodCatalog::new();
        catalog.record(descriptor(OperationKind::DeleteByKey, ParamRole::Key));
        catalog.record(descriptor(OperationKind::Insert, ParamRole::Entity));
        catalog.record(descriptor(OperationKind::SelectByKey, ParamRole::Key));

        let kinds: Vec<OperationKind> = catalog.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                OperationKind::Insert,
                OperationKind::SelectByKey,
                OperationKind::DeleteByKey,
            ]
        );
    }
}
