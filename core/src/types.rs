//! Generated-code model for repository traits.
//!
//! This module defines the in-memory representation of the Rust traits a
//! table-driven generator produces. The host generator builds one raw
//! [`TraitUnit`] per table with ad-hoc [`Method`] signatures shaped by that
//! table's columns; the transformation stage rewrites those methods in
//! place and attaches supertraits, imports, and doc headers. The types are
//! designed for serialization with [`serde`] and round-trip through JSON.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A reference to a Rust type in generated source.
///
/// Carries the module path the type must be imported from (absent for
/// primitives and prelude types), the short name, and any generic
/// arguments.
///
/// # Examples
///
/// ```
/// use repogen_core::TypeRef;
///
/// let id = TypeRef::new("i64");
/// assert_eq!(id.rendered(), "i64");
/// assert!(id.import_path().is_none());
///
/// let orders = TypeRef::in_module("crate::model", "Orders");
/// assert_eq!(orders.qualified(), "crate::model::Orders");
/// assert_eq!(orders.import_path().as_deref(), Some("crate::model::Orders"));
///
/// let list = TypeRef::vec_of(orders);
/// assert_eq!(list.rendered(), "Vec<Orders>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Module path the type is imported from (e.g. `"crate::model"`).
    pub module: Option<String>,
    /// Short type name (e.g. `"Orders"`).
    pub name: String,
    /// Generic arguments, in declaration order.
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a reference to a type that needs no import.
    pub fn new(name: &str) -> Self {
        Self {
            module: None,
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    /// Creates a reference to a type living in `module`.
    pub fn in_module(module: &str, name: &str) -> Self {
        Self {
            module: Some(module.to_string()),
            name: name.to_string(),
            args: Vec::new(),
        }
    }

    /// Appends a generic argument.
    pub fn with_arg(mut self, arg: TypeRef) -> Self {
        self.args.push(arg);
        self
    }

    /// Creates a `Vec<item>` reference.
    pub fn vec_of(item: TypeRef) -> Self {
        TypeRef::new("Vec").with_arg(item)
    }

    /// Short rendering with generic arguments, e.g. `Vec<Orders>`.
    pub fn rendered(&self) -> String {
        if self.args.is_empty() {
            self.name.clone()
        } else {
            let args: Vec<String> = self.args.iter().map(TypeRef::rendered).collect();
            format!("{}<{}>", self.name, args.join(", "))
        }
    }

    /// Fully qualified path, without generic arguments.
    pub fn qualified(&self) -> String {
        match &self.module {
            Some(module) => format!("{module}::{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Path a `use` declaration must bring into scope, or `None` when the
    /// type is visible without one.
    pub fn import_path(&self) -> Option<String> {
        self.module
            .as_ref()
            .map(|module| format!("{module}::{}", self.name))
    }
}

/// A method parameter in generated source.
///
/// The optional statement binding is rendered as a `#[bind("...")]`
/// attribute so the backing statement can reference the parameter by name
/// when a method takes more than one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (e.g. `"entity"`).
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
    /// Statement binding name, when the parameter needs one.
    pub binding: Option<String>,
}

impl Parameter {
    /// Creates an unbound parameter.
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.to_string(),
            ty,
            binding: None,
        }
    }

    /// Attaches a statement binding name.
    pub fn with_binding(mut self, binding: &str) -> Self {
        self.binding = Some(binding.to_string());
        self
    }
}

/// One method declaration in a generated trait.
///
/// # Examples
///
/// ```
/// use repogen_core::{Method, Parameter, TypeRef};
///
/// let method = Method::new("select_by_key")
///     .with_param(Parameter::new("key", TypeRef::new("i64")))
///     .returning(TypeRef::in_module("crate::model", "Orders"));
/// assert_eq!(method.params.len(), 1);
/// assert_eq!(method.ret.as_ref().unwrap().name, "Orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name (e.g. `"select_by_key"`).
    pub name: String,
    /// Doc lines, without the `///` prefix.
    pub doc: Vec<String>,
    /// Parameters in declaration order.
    pub params: Vec<Parameter>,
    /// Return type; `None` renders as no `->` clause.
    pub ret: Option<TypeRef>,
}

impl Method {
    /// Creates a method with no parameters and no return type.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            doc: Vec::new(),
            params: Vec::new(),
            ret: None,
        }
    }

    /// Appends a parameter.
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Sets the return type.
    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.ret = Some(ty);
        self
    }
}

/// One generated trait: a per-table repository or the shared base.
///
/// Imports are kept sorted and deduplicated. The generic parameter list is
/// only populated for the base trait; per-table traits bind concrete types
/// through their supertrait reference instead.
///
/// # Examples
///
/// ```
/// use repogen_core::{Method, TraitUnit, TypeRef};
///
/// let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
/// unit.add_import(&TypeRef::in_module("crate::model", "Orders"));
/// unit.methods.push(Method::new("insert"));
///
/// assert_eq!(unit.qualified_name(), "crate::repo::OrdersRepository");
/// assert!(unit.imports.contains("crate::model::Orders"));
/// assert!(unit.method_mut("insert").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitUnit {
    /// Module path the trait is generated into (e.g. `"crate::repo"`).
    pub module: String,
    /// Trait name (e.g. `"OrdersRepository"`).
    pub name: String,
    /// Generic parameter names; empty for per-table traits.
    pub generics: Vec<String>,
    /// Doc lines, without the `///` prefix.
    pub doc: Vec<String>,
    /// Import paths for the `use` block.
    pub imports: BTreeSet<String>,
    /// Supertrait references, with concrete or generic arguments.
    pub supers: Vec<TypeRef>,
    /// Declared methods in order.
    pub methods: Vec<Method>,
}

impl TraitUnit {
    /// Creates an empty trait unit in the given module.
    pub fn new(module: &str, name: &str) -> Self {
        Self {
            module: module.to_string(),
            name: name.to_string(),
            generics: Vec::new(),
            doc: Vec::new(),
            imports: BTreeSet::new(),
            supers: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Fully qualified trait path.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// Records the imports a type reference needs, recursing into generic
    /// arguments. Types without a module, and types already local to this
    /// unit's module, need none.
    pub fn add_import(&mut self, ty: &TypeRef) {
        if ty.module.as_deref() != Some(self.module.as_str()) {
            if let Some(path) = ty.import_path() {
                self.imports.insert(path);
            }
        }
        for arg in &ty.args {
            self.add_import(arg);
        }
    }

    /// Appends a doc line.
    pub fn add_doc_line(&mut self, line: &str) {
        self.doc.push(line.to_string());
    }

    /// Looks up a declared method by name.
    pub fn method_mut(&mut self, name: &str) -> Option<&mut Method> {
        self.methods.iter_mut().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_rendered_with_args() {
        let ty = TypeRef::in_module("crate::repo", "BaseRepository")
            .with_arg(TypeRef::in_module("crate::model", "Orders"))
            .with_arg(TypeRef::new("i64"));
        assert_eq!(ty.rendered(), "BaseRepository<Orders, i64>");
        assert_eq!(ty.qualified(), "crate::repo::BaseRepository");
    }

    #[test]
    fn test_type_ref_import_path() {
        assert!(TypeRef::new("u64").import_path().is_none());
        assert_eq!(
            TypeRef::in_module("crate::model", "Orders")
                .import_path()
                .as_deref(),
            Some("crate::model::Orders")
        );
    }

    #[test]
    fn test_vec_of_renders_nested() {
        let list = TypeRef::vec_of(TypeRef::in_module("crate::model", "Orders"));
        assert_eq!(list.rendered(), "Vec<Orders>");
        assert!(list.import_path().is_none());
    }

    #[test]
    fn test_add_import_recurses_into_args() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        let sup = TypeRef::in_module("crate::repo", "BaseRepository")
            .with_arg(TypeRef::in_module("crate::model", "Orders"))
            .with_arg(TypeRef::new("i64"));
        unit.add_import(&sup);

        // Same-module supertrait and primitive key need no import.
        assert_eq!(unit.imports.len(), 1);
        assert!(unit.imports.contains("crate::model::Orders"));
    }

    #[test]
    fn test_add_import_deduplicates() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        let orders = TypeRef::in_module("crate::model", "Orders");
        unit.add_import(&orders);
        unit.add_import(&orders);
        assert_eq!(unit.imports.len(), 1);
    }

    #[test]
    fn test_method_mut_finds_declared_method() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.methods.push(Method::new("insert"));
        assert!(unit.method_mut("insert").is_some());
        assert!(unit.method_mut("missing").is_none());
    }

    #[test]
    fn test_parameter_binding() {
        let param = Parameter::new("entity", TypeRef::new("E")).with_binding("entity");
        assert_eq!(param.binding.as_deref(), Some("entity"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
        unit.methods.push(
            Method::new("select_by_key")
                .with_param(Parameter::new("key", TypeRef::new("i64")))
                .returning(TypeRef::in_module("crate::model", "Orders")),
        );

        let json = serde_json::to_string(&unit).unwrap();
        let back: TraitUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
