//! Rendering trait units to Rust source text.
//!
//! The renderer is deterministic: imports come from the unit's sorted
//! import set, methods keep their declared order, and no formatting
//! decisions depend on anything outside the unit. Anything beyond this
//! plain rendering (rustfmt passes, header banners) is the host's concern.

use crate::{Method, Parameter, TraitUnit};

/// Renders a trait unit to Rust source.
///
/// # Examples
///
/// ```
/// use repogen_core::{Method, Parameter, TraitUnit, TypeRef, render_trait};
///
/// let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
/// unit.methods.push(
///     Method::new("select_by_key")
///         .with_param(Parameter::new("key", TypeRef::new("i64")))
///         .returning(TypeRef::new("Orders")),
/// );
///
/// let source = render_trait(&unit);
/// assert!(source.contains("pub trait OrdersRepository {"));
/// assert!(source.contains("fn select_by_key(&self, key: i64) -> Orders;"));
/// ```
pub fn render_trait(unit: &TraitUnit) -> String {
    let mut out = String::new();

    if !unit.imports.is_empty() {
        for import in &unit.imports {
            out.push_str(&format!("use {import};\n"));
        }
        out.push('\n');
    }

    for line in &unit.doc {
        if line.is_empty() {
            out.push_str("///\n");
        } else {
            out.push_str(&format!("/// {line}\n"));
        }
    }

    out.push_str(&format!("pub trait {}", unit.name));
    if !unit.generics.is_empty() {
        out.push_str(&format!("<{}>", unit.generics.join(", ")));
    }
    if !unit.supers.is_empty() {
        let supers: Vec<String> = unit.supers.iter().map(|s| s.rendered()).collect();
        out.push_str(&format!(": {}", supers.join(" + ")));
    }
    out.push_str(" {\n");

    for (i, method) in unit.methods.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_method(&mut out, method);
    }

    out.push_str("}\n");
    out
}

fn render_method(out: &mut String, method: &Method) {
    for line in &method.doc {
        if line.is_empty() {
            out.push_str("    ///\n");
        } else {
            out.push_str(&format!("    /// {line}\n"));
        }
    }
    out.push_str(&format!("    fn {}(&self", method.name));
    for param in &method.params {
        out.push_str(", ");
        out.push_str(&render_param(param));
    }
    out.push(')');
    if let Some(ret) = &method.ret {
        out.push_str(&format!(" -> {}", ret.rendered()));
    }
    out.push_str(";\n");
}

fn render_param(param: &Parameter) -> String {
    match &param.binding {
        Some(binding) => format!(
            "#[bind(\"{binding}\")] {}: {}",
            param.name,
            param.ty.rendered()
        ),
        None => format!("{}: {}", param.name, param.ty.rendered()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    fn base_unit() -> TraitUnit {
        let mut unit = TraitUnit::new("crate::repo", "BaseRepository");
        unit.generics = vec!["E".to_string(), "K".to_string()];
        unit.add_doc_line("Shared base for generated repository traits.");
        unit.methods.push(
            Method::new("insert")
                .with_param(Parameter::new("entity", TypeRef::new("E")))
                .returning(TypeRef::new("u64")),
        );
        unit.methods.push(
            Method::new("select_by_key")
                .with_param(Parameter::new("key", TypeRef::new("K")))
                .returning(TypeRef::new("E")),
        );
        unit
    }

    #[test]
    fn test_render_base_trait_header() {
        let source = render_trait(&base_unit());
        assert!(source.contains("/// Shared base for generated repository traits."));
        assert!(source.contains("pub trait BaseRepository<E, K> {"));
    }

    #[test]
    fn test_render_methods_in_order() {
        let source = render_trait(&base_unit());
        let insert = source.find("fn insert").unwrap();
        let select = source.find("fn select_by_key").unwrap();
        assert!(insert < select);
        assert!(source.contains("fn select_by_key(&self, key: K) -> E;"));
    }

    #[test]
    fn test_render_imports_block() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.add_import(&TypeRef::in_module("crate::model", "Orders"));
        unit.add_import(&TypeRef::in_module("crate::model", "OrdersCriteria"));
        let source = render_trait(&unit);
        assert!(source.starts_with("use crate::model::Orders;\nuse crate::model::OrdersCriteria;\n\n"));
    }

    #[test]
    fn test_render_supertrait_with_args() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.supers.push(
            TypeRef::in_module("crate::repo", "BaseRepository")
                .with_arg(TypeRef::new("Orders"))
                .with_arg(TypeRef::new("i64")),
        );
        let source = render_trait(&unit);
        assert!(source.contains("pub trait OrdersRepository: BaseRepository<Orders, i64> {"));
    }

    #[test]
    fn test_render_bound_parameters() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.methods.push(
            Method::new("update_by_criteria")
                .with_param(Parameter::new("entity", TypeRef::new("Orders")).with_binding("entity"))
                .with_param(
                    Parameter::new("criteria", TypeRef::new("OrdersCriteria"))
                        .with_binding("criteria"),
                )
                .returning(TypeRef::new("u64")),
        );
        let source = render_trait(&unit);
        assert!(source.contains(
            "fn update_by_criteria(&self, #[bind(\"entity\")] entity: Orders, \
             #[bind(\"criteria\")] criteria: OrdersCriteria) -> u64;"
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let unit = base_unit();
        assert_eq!(render_trait(&unit), render_trait(&unit));
    }
}
