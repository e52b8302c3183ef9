//! Canonical method shapes.
//!
//! A [`MethodDescriptor`] expresses one operation kind's signature purely
//! in terms of Entity/Key/Criteria roles, independent of any specific
//! table. The normalizer records one per rewritten method; the base-trait
//! synthesizer materializes them back into generic-parameter signatures.

use serde::{Deserialize, Serialize};

use repogen_core::{OperationKind, TypeRef};

/// Canonical role a parameter slot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamRole {
    /// The table's entity type.
    Entity,
    /// The table's resolved primary-key type.
    Key,
    /// The table's criteria type.
    Criteria,
}

/// Canonical return shape of a rewritten method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnShape {
    /// The table's entity type.
    Entity,
    /// A list of the entity type.
    EntityList,
    /// Whatever the raw method declared (affected-row counts and the
    /// like); `None` when the raw method returned nothing.
    Other(Option<TypeRef>),
}

/// One canonical parameter slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSlot {
    /// Role the slot plays in the canonical signature.
    pub role: ParamRole,
    /// Parameter name in generated source.
    pub name: String,
    /// Statement binding, present only on multi-parameter shapes.
    pub binding: Option<String>,
}

impl ParamSlot {
    /// Creates an unbound slot.
    pub fn new(role: ParamRole, name: &str) -> Self {
        Self {
            role,
            name: name.to_string(),
            binding: None,
        }
    }

    /// Attaches a statement binding name.
    pub fn with_binding(mut self, binding: &str) -> Self {
        self.binding = Some(binding.to_string());
        self
    }
}

/// Table-independent shape of one operation kind's method.
///
/// Structural equality is the cross-table identity check: two tables'
/// rewritten methods for the same kind must produce equal descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Operation kind this shape belongs to.
    pub kind: OperationKind,
    /// Method name as generated by the host.
    pub name: String,
    /// Ordered canonical parameter slots.
    pub params: Vec<ParamSlot>,
    /// Canonical return shape.
    pub ret: ReturnShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_equality_is_structural() {
        let a = MethodDescriptor {
            kind: OperationKind::DeleteByKey,
            name: "delete_by_key".to_string(),
            params: vec![ParamSlot::new(ParamRole::Key, "key")],
            ret: ReturnShape::Other(Some(TypeRef::new("u64"))),
        };
        let b = a.clone();
        assert_eq!(a, b);

        let different = MethodDescriptor {
            params: vec![ParamSlot::new(ParamRole::Entity, "entity")],
            ..a.clone()
        };
        assert_ne!(a, different);
    }

    #[test]
    fn test_param_slot_binding() {
        let slot = ParamSlot::new(ParamRole::Entity, "entity").with_binding("entity");
        assert_eq!(slot.binding.as_deref(), Some("entity"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let descriptor = MethodDescriptor {
            kind: OperationKind::SelectByCriteria,
            name: "select_by_criteria".to_string(),
            params: vec![ParamSlot::new(ParamRole::Criteria, "criteria")],
            ret: ReturnShape::EntityList,
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: MethodDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }
}
