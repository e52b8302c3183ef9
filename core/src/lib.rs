//! Core model and table metadata for repository generation.
//!
//! This crate defines the foundational types a table-driven repository
//! generator works on:
//!
//! - [`TraitUnit`], [`Method`], [`Parameter`], [`TypeRef`] — the
//!   generated-code model. The host produces one raw trait unit per table;
//!   the transformation stage rewrites it in place.
//! - [`TableDescriptor`], [`ColumnRef`] — read-only introspection metadata
//!   for one table, including its ordered primary-key columns.
//! - [`OperationKind`] — the closed set of built-in data-access operation
//!   kinds, in the stable order generated artifacts use.
//!
//! Rendering ([`render_trait`]) turns a trait unit into deterministic Rust
//! source text. Validation ([`validate_unit`]) catches structural errors
//! such as duplicate methods and invalid identifiers before emission.
//!
//! # Example
//!
//! ```
//! use repogen_core::*;
//!
//! // A raw per-table trait, the way a host generator would hand it over
//! let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
//! unit.methods.push(
//!     Method::new("select_by_key")
//!         .with_param(Parameter::new("id", TypeRef::new("i64")))
//!         .returning(TypeRef::in_module("crate::model", "Orders")),
//! );
//!
//! assert!(validate_unit(&unit).is_empty());
//! let source = render_trait(&unit);
//! assert!(source.contains("pub trait OrdersRepository {"));
//! ```

mod kind;
mod naming;
mod render;
mod table;
mod types;
mod validate;

pub use kind::OperationKind;
pub use naming::{to_pascal_case, to_snake_case};
pub use render::render_trait;
pub use table::{ColumnRef, TableDescriptor};
pub use types::{Method, Parameter, TraitUnit, TypeRef};
pub use validate::{ValidationError, validate_unit};
