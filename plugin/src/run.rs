//! Run-scoped orchestration context.

use tracing::warn;

use repogen_core::{Method, OperationKind, TableDescriptor, TraitUnit};

use crate::bind;
use crate::catalog::MethodCatalog;
use crate::config::{ConfigIssue, GeneratorConfig};
use crate::normalize;
use crate::synthesize::{self, GeneratedFile};

/// State for one generation run over a set of tables.
///
/// Owns the configuration and the canonical method catalog. The host
/// engine drives a sequential traversal and calls back in this order:
/// [`normalize_method`](Self::normalize_method) once per table ×
/// operation kind, [`bind_interface`](Self::bind_interface) once per
/// table, and [`synthesize_base`](Self::synthesize_base) once per output
/// module after every table in it has been normalized. No two tables are
/// processed concurrently; the catalog's last-writer-wins upsert depends
/// on that.
///
/// Callbacks never fail and never suppress the host's own statement
/// generation: the worst outcome of a bad configuration or a filesystem
/// problem is a missing base artifact, never an aborted run.
///
/// # Examples
///
/// ```
/// use repogen_core::{ColumnRef, Method, OperationKind, Parameter, TableDescriptor, TypeRef};
/// use repogen_plugin::{GenerationRun, GeneratorConfig};
///
/// let mut run = GenerationRun::new(GeneratorConfig::default());
///
/// let orders = TableDescriptor::new("orders", "crate::model")
///     .with_key_column(ColumnRef::new("id", TypeRef::new("i64")));
/// let mut method = Method::new("delete_by_key")
///     .with_param(Parameter::new("id", TypeRef::new("i64")))
///     .returning(TypeRef::new("u64"));
///
/// assert!(run.normalize_method(&orders, &mut method, OperationKind::DeleteByKey));
/// assert_eq!(method.params[0].name, "key");
/// ```
#[derive(Debug)]
pub struct GenerationRun {
    config: GeneratorConfig,
    config_issues: Vec<ConfigIssue>,
    catalog: MethodCatalog,
}

impl GenerationRun {
    /// Creates a run context. Configuration problems are detected once
    /// here and reported; a run with issues passes every interface
    /// through unmodified.
    pub fn new(config: GeneratorConfig) -> Self {
        let config_issues = config.validate();
        if !config_issues.is_empty() {
            warn!(
                issues = ?config_issues,
                "Generation run configured with unusable settings; interfaces pass through unmodified"
            );
        }
        Self {
            config,
            config_issues,
            catalog: MethodCatalog::new(),
        }
    }

    /// The run's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The canonical method catalog accumulated so far.
    pub fn catalog(&self) -> &MethodCatalog {
        &self.catalog
    }

    /// Whether criteria generics are enabled for this run.
    pub fn criteria_enabled(&self) -> bool {
        self.config.criteria_enabled()
    }

    /// Host callback for each raw per-table method.
    ///
    /// Rewrites the signature in place and records the canonical shape.
    /// Always returns `true`: the host still emits its statement-backed
    /// implementation.
    pub fn normalize_method(
        &mut self,
        table: &TableDescriptor,
        method: &mut Method,
        kind: OperationKind,
    ) -> bool {
        if self.config_issues.is_empty() {
            normalize::normalize_method(
                table,
                method,
                kind,
                self.config.criteria_enabled(),
                &mut self.catalog,
            );
        }
        true
    }

    /// Host callback for each finished per-table trait.
    ///
    /// Attaches the base-trait inheritance edge with this table's concrete
    /// type arguments. Always returns `true`.
    pub fn bind_interface(&self, unit: &mut TraitUnit, table: &TableDescriptor) -> bool {
        if self.config_issues.is_empty() {
            bind::bind_interface(&self.config, unit, table);
        }
        true
    }

    /// Host callback for per-module additional-file generation.
    ///
    /// Must run after every table in the module has been normalized.
    /// Returns the written artifact, or `None` when emission was skipped.
    pub fn synthesize_base(&self) -> Option<GeneratedFile> {
        if !self.config_issues.is_empty() {
            return None;
        }
        synthesize::synthesize_base(&self.config, &self.catalog)
    }
}
