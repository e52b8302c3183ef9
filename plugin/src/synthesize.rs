//! Base-trait synthesis and idempotent emission.
//!
//! Once every table in the output module has been normalized, the catalog
//! holds one canonical shape per applicable operation kind. Synthesis
//! materializes those shapes into the shared generic base trait and writes
//! it with a create-if-absent policy: an artifact already on disk, possibly
//! edited by hand since the last run, is never regenerated or diffed.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use repogen_core::{
    Method, Parameter, TraitUnit, TypeRef, render_trait, to_snake_case, validate_unit,
};

use crate::catalog::MethodCatalog;
use crate::config::GeneratorConfig;
use crate::descriptor::{MethodDescriptor, ParamRole, ReturnShape};

/// Name of the shared base trait every generated repository extends.
pub const BASE_TRAIT_NAME: &str = "BaseRepository";

/// Generic parameter name bound to the entity type.
pub const GENERIC_ENTITY: &str = "E";
/// Generic parameter name bound to the resolved key type.
pub const GENERIC_KEY: &str = "K";
/// Generic parameter name bound to the criteria type.
pub const GENERIC_CRITERIA: &str = "C";

/// A rendered artifact and the location it was written to.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path the artifact was written to.
    pub path: PathBuf,
    /// Rendered source text.
    pub source: String,
}

/// Builds and emits the shared base trait for the configured module.
///
/// Returns `None` without error when the artifact already exists, when the
/// configuration is unusable, or when the filesystem cannot be consulted.
/// A filesystem failure is logged and treated as "already exists" rather
/// than aborting the run.
pub fn synthesize_base(
    config: &GeneratorConfig,
    catalog: &MethodCatalog,
) -> Option<GeneratedFile> {
    let issues = config.validate();
    if !issues.is_empty() {
        warn!(?issues, "Skipping base trait synthesis: configuration unusable");
        return None;
    }

    let unit = build_base_unit(config, catalog);
    let errors = validate_unit(&unit);
    if !errors.is_empty() {
        warn!(?errors, "Skipping base trait synthesis: catalog produced an invalid unit");
        return None;
    }

    let path = config
        .module_dir()
        .join(format!("{}.rs", to_snake_case(BASE_TRAIT_NAME)));
    match path.try_exists() {
        Ok(true) => {
            info!(path = %path.display(), "Base trait artifact already present; keeping it");
            return None;
        }
        Ok(false) => {}
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Could not check for an existing base trait; skipping emission"
            );
            return None;
        }
    }

    let source = render_trait(&unit);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!(
                path = %path.display(),
                error = %e,
                "Could not create output directory; skipping emission"
            );
            return None;
        }
    }
    if let Err(e) = fs::write(&path, &source) {
        warn!(
            path = %path.display(),
            error = %e,
            "Could not write base trait artifact; skipping emission"
        );
        return None;
    }

    info!(
        path = %path.display(),
        methods = unit.methods.len(),
        "Synthesized base trait artifact"
    );
    Some(GeneratedFile { path, source })
}

/// Builds the base trait declaration from the catalog.
///
/// Parameter and return types are rewritten from the canonical roles to
/// the generic parameter names; methods appear in stable kind order.
pub fn build_base_unit(config: &GeneratorConfig, catalog: &MethodCatalog) -> TraitUnit {
    let mut unit = TraitUnit::new(&config.target_module, BASE_TRAIT_NAME);
    unit.generics.push(GENERIC_ENTITY.to_string());
    unit.generics.push(GENERIC_KEY.to_string());
    if config.criteria_enabled() {
        unit.generics.push(GENERIC_CRITERIA.to_string());
    }

    unit.add_doc_line("Shared base for generated repository traits.");
    unit.add_doc_line("");
    if config.criteria_enabled() {
        unit.add_doc_line(
            "`E` is the entity type, `K` the primary-key type, and `C` the query criteria type.",
        );
    } else {
        unit.add_doc_line("`E` is the entity type and `K` the primary-key type.");
    }
    if let Some(author) = &config.author {
        unit.add_doc_line(&format!("Author: {author}."));
    }
    unit.add_doc_line(&format!(
        "Generated on {}.",
        chrono::Utc::now().format("%Y/%m/%d")
    ));

    for descriptor in catalog.iter() {
        let method = materialize(descriptor);
        if let Some(ret) = &method.ret {
            unit.add_import(ret);
        }
        unit.methods.push(method);
    }

    unit
}

fn materialize(descriptor: &MethodDescriptor) -> Method {
    let mut method = Method::new(&descriptor.name);
    for slot in &descriptor.params {
        let mut param = Parameter::new(&slot.name, TypeRef::new(generic_name(slot.role)));
        if let Some(binding) = &slot.binding {
            param = param.with_binding(binding);
        }
        method.params.push(param);
    }
    method.ret = match &descriptor.ret {
        ReturnShape::Entity => Some(TypeRef::new(GENERIC_ENTITY)),
        ReturnShape::EntityList => Some(TypeRef::vec_of(TypeRef::new(GENERIC_ENTITY))),
        ReturnShape::Other(ret) => ret.clone(),
    };
    method
}

fn generic_name(role: ParamRole) -> &'static str {
    match role {
        ParamRole::Entity => GENERIC_ENTITY,
        ParamRole::Key => GENERIC_KEY,
        ParamRole::Criteria => GENERIC_CRITERIA,
    }
}
