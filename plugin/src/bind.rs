//! Binding per-table traits to the base trait.

use tracing::debug;

use repogen_core::{TableDescriptor, TraitUnit, TypeRef};

use crate::config::GeneratorConfig;
use crate::keytype::resolve_key_type;
use crate::synthesize::BASE_TRAIT_NAME;

/// Attaches base-trait inheritance to a finished per-table repository
/// trait.
///
/// Instantiates the base trait's generic parameters with the table's
/// entity, resolved key, and (when enabled) criteria types, adds the
/// imports those references need, and prepends the generated doc header.
/// Declared methods are never touched.
pub fn bind_interface(config: &GeneratorConfig, unit: &mut TraitUnit, table: &TableDescriptor) {
    let entity = table.entity_type();
    let key = resolve_key_type(table).type_ref().clone();

    let mut sup = TypeRef::in_module(&config.target_module, BASE_TRAIT_NAME)
        .with_arg(entity.clone())
        .with_arg(key.clone());
    if config.criteria_enabled() {
        let criteria = table.criteria_type();
        unit.add_import(&criteria);
        sup = sup.with_arg(criteria);
    }

    unit.add_import(&entity);
    unit.add_import(&key);
    unit.add_import(&sup);
    unit.supers.push(sup);

    let mut doc = vec![
        format!("`{}` extends the generated repository base.", unit.name),
        String::new(),
    ];
    if let Some(author) = &config.author {
        doc.push(format!("Author: {author}."));
    }
    doc.push(format!(
        "Generated on {}.",
        chrono::Utc::now().format("%Y/%m/%d")
    ));
    doc.extend(unit.doc.drain(..));
    unit.doc = doc;

    debug!(table = %table.table_name, unit = %unit.name, "Bound repository trait to base");
}

#[cfg(test)]
mod tests {
    use super::*;
    use repogen_core::{ColumnRef, Method};

    fn config(use_criteria: bool) -> GeneratorConfig {
        GeneratorConfig {
            use_criteria,
            author: Some("schema-tools".to_string()),
            ..Default::default()
        }
    }

    fn orders_unit() -> TraitUnit {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.methods.push(Method::new("insert"));
        unit
    }

    #[test]
    fn test_bind_attaches_supertrait_with_concrete_args() {
        let table = TableDescriptor::new("orders", "crate::model")
            .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
        let mut unit = orders_unit();

        bind_interface(&config(false), &mut unit, &table);

        assert_eq!(unit.supers.len(), 1);
        assert_eq!(unit.supers[0].rendered(), "BaseRepository<Orders, i64>");
        assert!(unit.imports.contains("crate::model::Orders"));
        // Base trait lives in the unit's own module; no import for it.
        assert!(!unit.imports.iter().any(|i| i.contains("BaseRepository")));
    }

    #[test]
    fn test_bind_adds_criteria_argument_when_enabled() {
        let table = TableDescriptor::new("orders", "crate::model")
            .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
        let mut unit = orders_unit();

        bind_interface(&config(true), &mut unit, &table);

        assert_eq!(
            unit.supers[0].rendered(),
            "BaseRepository<Orders, i64, OrdersCriteria>"
        );
        assert!(unit.imports.contains("crate::model::OrdersCriteria"));
    }

    #[test]
    fn test_bind_uses_composite_key_for_multi_column_tables() {
        let table = TableDescriptor::new("line_items", "crate::model")
            .with_key_column(ColumnRef::new("order_id", TypeRef::new("i64")))
            .with_key_column(ColumnRef::new("sku", TypeRef::new("String")))
            .with_key_column(ColumnRef::new("seq", TypeRef::new("i32")));
        let mut unit = TraitUnit::new("crate::repo", "LineItemsRepository");

        bind_interface(&config(false), &mut unit, &table);

        assert_eq!(
            unit.supers[0].rendered(),
            "BaseRepository<LineItems, LineItemsKey>"
        );
        assert!(unit.imports.contains("crate::model::LineItemsKey"));
    }

    #[test]
    fn test_bind_imports_base_trait_from_other_module() {
        let table = TableDescriptor::new("orders", "crate::model")
            .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
        let mut unit = TraitUnit::new("crate::repo::orders", "OrdersRepository");

        bind_interface(&config(false), &mut unit, &table);

        assert!(unit.imports.contains("crate::repo::BaseRepository"));
    }

    #[test]
    fn test_bind_prepends_doc_header() {
        let table = TableDescriptor::new("orders", "crate::model")
            .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
        let mut unit = orders_unit();
        unit.add_doc_line("Existing host line.");

        bind_interface(&config(false), &mut unit, &table);

        assert_eq!(
            unit.doc[0],
            "`OrdersRepository` extends the generated repository base."
        );
        assert!(unit.doc.iter().any(|l| l == "Author: schema-tools."));
        assert_eq!(unit.doc.last().unwrap(), "Existing host line.");
    }

    #[test]
    fn test_bind_never_touches_methods() {
        let table = TableDescriptor::new("orders", "crate::model")
            .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
        let mut unit = orders_unit();
        let methods_before = unit.methods.clone();

        bind_interface(&config(false), &mut unit, &table);

        assert_eq!(unit.methods, methods_before);
    }
}
