//! Method-signature normalization rules.
//!
//! The host generates each table's raw methods with parameter lists shaped
//! by that table's columns. Normalization rewrites them in place into the
//! canonical Entity/Key/Criteria shape shared by every table, and records
//! the resulting [`MethodDescriptor`] in the run's [`MethodCatalog`].
//!
//! The policy is ordinary data: [`rule_for`] maps each [`OperationKind`]
//! to a [`NormalizeRule`] and is exhaustive over the closed kind set.

use tracing::debug;

use repogen_core::{Method, OperationKind, Parameter, TableDescriptor, TypeRef};

use crate::catalog::MethodCatalog;
use crate::descriptor::{MethodDescriptor, ParamRole, ParamSlot, ReturnShape};
use crate::keytype::resolve_key_type;

/// How a kind's parameter list is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRule {
    /// Single parameter of the table's resolved key type.
    Key,
    /// Single parameter of the entity type.
    Entity,
    /// Single parameter of the criteria type.
    Criteria,
    /// Entity then criteria, each with a distinct statement binding.
    EntityThenCriteria,
}

/// How a kind's return type is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnRule {
    /// Leave the raw return type alone.
    Keep,
    /// Return the entity type.
    Entity,
    /// Return a list of the entity type.
    EntityList,
}

/// The normalization rule for one operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeRule {
    /// Parameter-list rewrite.
    pub param: ParamRule,
    /// Return-type rewrite.
    pub ret: ReturnRule,
}

impl NormalizeRule {
    /// Whether this rule only applies when criteria generics are enabled.
    pub fn needs_criteria(&self) -> bool {
        matches!(self.param, ParamRule::Criteria | ParamRule::EntityThenCriteria)
    }
}

/// The rule for each operation kind.
pub fn rule_for(kind: OperationKind) -> NormalizeRule {
    use OperationKind::*;

    let (param, ret) = match kind {
        Insert | InsertSelective => (ParamRule::Entity, ReturnRule::Keep),
        SelectByKey => (ParamRule::Key, ReturnRule::Entity),
        SelectByCriteria | SelectByCriteriaWithBlobs => {
            (ParamRule::Criteria, ReturnRule::EntityList)
        }
        CountByCriteria => (ParamRule::Criteria, ReturnRule::Keep),
        UpdateByKey | UpdateByKeyWithBlobs | UpdateByKeySelective => {
            (ParamRule::Entity, ReturnRule::Keep)
        }
        UpdateByCriteria | UpdateByCriteriaWithBlobs | UpdateByCriteriaSelective => {
            (ParamRule::EntityThenCriteria, ReturnRule::Keep)
        }
        DeleteByKey => (ParamRule::Key, ReturnRule::Keep),
        DeleteByCriteria => (ParamRule::Criteria, ReturnRule::Keep),
    };

    NormalizeRule { param, ret }
}

/// Rewrites a raw per-table method into canonical form and records the
/// resulting shape in the catalog.
///
/// Criteria-gated kinds are left untouched, and stay out of the catalog,
/// when `criteria_enabled` is false. Returns whether the method was
/// rewritten; the host emits its statement-backed implementation either
/// way.
pub fn normalize_method(
    table: &TableDescriptor,
    method: &mut Method,
    kind: OperationKind,
    criteria_enabled: bool,
    catalog: &mut MethodCatalog,
) -> bool {
    let rule = rule_for(kind);
    if rule.needs_criteria() && !criteria_enabled {
        debug!(
            table = %table.table_name,
            method = %method.name,
            "Criteria generics disabled; leaving raw signature"
        );
        return false;
    }

    let (params, slots) = canonical_params(table, method, rule.param);
    method.params = params;

    let ret = match rule.ret {
        ReturnRule::Keep => ReturnShape::Other(method.ret.clone()),
        ReturnRule::Entity => {
            method.ret = Some(table.entity_type());
            ReturnShape::Entity
        }
        ReturnRule::EntityList => {
            method.ret = Some(TypeRef::vec_of(table.entity_type()));
            ReturnShape::EntityList
        }
    };

    debug!(
        table = %table.table_name,
        method = %method.name,
        kind = ?kind,
        "Normalized method signature"
    );

    catalog.record(MethodDescriptor {
        kind,
        name: method.name.clone(),
        params: slots,
        ret,
    });
    true
}

fn canonical_params(
    table: &TableDescriptor,
    method: &Method,
    rule: ParamRule,
) -> (Vec<Parameter>, Vec<ParamSlot>) {
    match rule {
        ParamRule::Key => {
            let key = resolve_key_type(table).type_ref().clone();
            single("key", key, ParamRole::Key)
        }
        ParamRule::Entity => single("entity", table.entity_type(), ParamRole::Entity),
        ParamRule::Criteria => single("criteria", table.criteria_type(), ParamRole::Criteria),
        ParamRule::EntityThenCriteria => {
            // A single raw parameter means the host produced no entity
            // parameter for this variant; only the criteria slot applies.
            if method.params.len() == 1 {
                single("criteria", table.criteria_type(), ParamRole::Criteria)
            } else {
                let params = vec![
                    Parameter::new("entity", table.entity_type()).with_binding("entity"),
                    Parameter::new("criteria", table.criteria_type()).with_binding("criteria"),
                ];
                let slots = vec![
                    ParamSlot::new(ParamRole::Entity, "entity").with_binding("entity"),
                    ParamSlot::new(ParamRole::Criteria, "criteria").with_binding("criteria"),
                ];
                (params, slots)
            }
        }
    }
}

fn single(name: &str, ty: TypeRef, role: ParamRole) -> (Vec<Parameter>, Vec<ParamSlot>) {
    (
        vec![Parameter::new(name, ty)],
        vec![ParamSlot::new(role, name)],
    )
}
