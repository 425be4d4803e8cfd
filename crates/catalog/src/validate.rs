//! Catalog validation.
//!
//! Reports structural problems (empty or duplicate ids) as errors and
//! questionable content (no default language, unused `default` flags) as
//! warnings and infos.

use std::collections::HashSet;

use crate::types::{CatalogList, OptionCatalog};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path, e.g. `languages[2].id`, or the bare list key.
    pub path: String,
    pub message: String,
}

/// Result of validating a catalog.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Count diagnostics by severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn push(&mut self, severity: Severity, path: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate every list of `catalog`.
pub fn validate(catalog: &OptionCatalog) -> ValidationResult {
    let mut result = ValidationResult::default();

    for list in CatalogList::ALL {
        let items = catalog.items(list);
        let key = list.key();

        if items.is_empty() && list.is_single_choice() {
            result.push(
                Severity::Warning,
                key,
                "list is empty; this question cannot be answered",
            );
        }

        let mut seen = HashSet::new();
        for (i, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                result.push(Severity::Error, format!("{key}[{i}].id"), "id is empty");
            } else if !seen.insert(item.id.as_str()) {
                result.push(
                    Severity::Error,
                    format!("{key}[{i}].id"),
                    format!("duplicate id \"{}\"", item.id),
                );
            }
            if item.label.trim().is_empty() {
                result.push(Severity::Error, format!("{key}[{i}].label"), "label is empty");
            }
            if item.default && !list.seeds_defaults() {
                result.push(
                    Severity::Info,
                    format!("{key}[{i}].default"),
                    "default flag has no effect on this list",
                );
            }
        }
    }

    if catalog.defaults(CatalogList::Languages).next().is_none() {
        result.push(
            Severity::Warning,
            CatalogList::Languages.key(),
            "no language is flagged default; sessions start with no language selected",
        );
    }

    result
}
