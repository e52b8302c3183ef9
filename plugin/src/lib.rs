//! Uniform repository-trait generation for table-driven codegen.
//!
//! This crate is the transformation stage of a database-table-driven code
//! generator. The host introspects tables and produces one raw client
//! trait per table, with ad-hoc method signatures shaped by that table's
//! columns; this stage rewrites those signatures into a uniform shape all
//! tables share, and synthesizes, once per output module, the generic
//! [`BaseRepository`](BASE_TRAIT_NAME) trait every per-table trait
//! extends.
//!
//! # Main entry points
//!
//! - [`GenerationRun`] — run-scoped context owning the configuration and
//!   the canonical method catalog; exposes the three host callbacks.
//! - [`resolve_key_type`] — total primary-key resolution policy (single
//!   column, synthetic composite key, or entity fallback).
//! - [`rule_for`] — the normalization rule for each operation kind, as
//!   plain data.
//! - [`synthesize_base`] / [`bind_interface`] — the base-trait and
//!   inheritance halves, usable without a [`GenerationRun`].
//!
//! # Example
//!
//! ```
//! use repogen_core::{ColumnRef, Method, OperationKind, Parameter, TableDescriptor, TypeRef};
//! use repogen_plugin::{GenerationRun, GeneratorConfig};
//!
//! let mut run = GenerationRun::new(GeneratorConfig::default());
//!
//! let orders = TableDescriptor::new("orders", "crate::model")
//!     .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
//!
//! // The host hands over each raw method as it is generated
//! let mut select = Method::new("select_by_key")
//!     .with_param(Parameter::new("id", TypeRef::new("i64")));
//! run.normalize_method(&orders, &mut select, OperationKind::SelectByKey);
//!
//! assert_eq!(select.params.len(), 1);
//! assert_eq!(select.params[0].ty, TypeRef::new("i64"));
//! assert_eq!(select.ret.unwrap().name, "Orders");
//! ```

mod bind;
mod catalog;
mod config;
mod descriptor;
mod error;
mod keytype;
mod normalize;
mod run;
mod synthesize;

pub use bind::bind_interface;
pub use catalog::MethodCatalog;
pub use config::{ConfigIssue, GeneratorConfig};
pub use descriptor::{MethodDescriptor, ParamRole, ParamSlot, ReturnShape};
pub use error::{GenError, Result};
pub use keytype::{COMPOSITE_KEY_THRESHOLD, KeyType, resolve_key_type};
pub use normalize::{NormalizeRule, ParamRule, ReturnRule, normalize_method, rule_for};
pub use run::GenerationRun;
pub use synthesize::{
    BASE_TRAIT_NAME, GENERIC_CRITERIA, GENERIC_ENTITY, GENERIC_KEY, GeneratedFile,
    build_base_unit, synthesize_base,
};
