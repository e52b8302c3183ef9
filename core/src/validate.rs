//! Structural validation for generated trait units.
//!
//! Catches the problems a malformed host handoff or a bad transformation
//! would bake into generated source: empty or invalid identifiers,
//! duplicate method names, duplicate parameter names, and duplicate
//! generic parameters.
//!
//! # Examples
//!
//! ```
//! use repogen_core::{Method, TraitUnit, validate_unit};
//!
//! let mut unit = TraitUnit::new("crate::repo", "OrdersRepository");
//! unit.methods.push(Method::new("insert"));
//! assert!(validate_unit(&unit).is_empty());
//!
//! unit.methods.push(Method::new("insert"));
//! assert!(!validate_unit(&unit).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Method, TraitUnit};

/// Structural problems found in a trait unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Trait name is empty or whitespace-only.
    #[error("trait name cannot be empty")]
    EmptyTraitName,
    /// A trait, method, parameter, or generic name is not a valid
    /// identifier.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    /// Two methods in the unit share a name.
    #[error("duplicate method in trait: {0}")]
    DuplicateMethod(String),
    /// Two parameters of one method share a name.
    #[error("duplicate parameter in method {method}: {param}")]
    DuplicateParameter { method: String, param: String },
    /// Two generic parameters share a name.
    #[error("duplicate generic parameter: {0}")]
    DuplicateGeneric(String),
}

/// Validates a trait unit's structure.
pub fn validate_unit(unit: &TraitUnit) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if unit.name.trim().is_empty() {
        errors.push(ValidationError::EmptyTraitName);
        return errors;
    }
    if !is_valid_identifier(&unit.name) {
        errors.push(ValidationError::InvalidIdentifier(unit.name.clone()));
    }

    let mut seen_generics: HashSet<&str> = HashSet::new();
    for generic in &unit.generics {
        if !is_valid_identifier(generic) {
            errors.push(ValidationError::InvalidIdentifier(generic.clone()));
        }
        if !seen_generics.insert(generic) {
            errors.push(ValidationError::DuplicateGeneric(generic.clone()));
        }
    }

    let mut seen_methods: HashSet<&str> = HashSet::new();
    for method in &unit.methods {
        if !seen_methods.insert(&method.name) {
            errors.push(ValidationError::DuplicateMethod(method.name.clone()));
        }
        errors.extend(validate_method(method));
    }

    errors
}

fn validate_method(method: &Method) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_valid_identifier(&method.name) {
        errors.push(ValidationError::InvalidIdentifier(method.name.clone()));
    }

    let mut seen_params: HashSet<&str> = HashSet::new();
    for param in &method.params {
        if !is_valid_identifier(&param.name) {
            errors.push(ValidationError::InvalidIdentifier(param.name.clone()));
        }
        if !seen_params.insert(&param.name) {
            errors.push(ValidationError::DuplicateParameter {
                method: method.name.clone(),
                param: param.name.clone(),
            });
        }
    }

    errors
}

fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
