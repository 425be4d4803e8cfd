use std::path::Path;

use {
    agentdesk_config::CatalogSource,
    tracing::{debug, warn},
};

use crate::{
    error::{Context, Error, Result},
    types::OptionCatalog,
    validate::{self, Severity},
};

/// Resolve the catalog named by `source`, falling back to the built-in one.
///
/// A file catalog is validated after loading; error diagnostics are logged
/// and reject the file, warnings are logged only.
pub fn load_catalog(source: &CatalogSource) -> Result<OptionCatalog> {
    match source.path.as_deref() {
        Some(path) => load_catalog_file(path),
        None => {
            debug!("using built-in catalog");
            Ok(OptionCatalog::builtin())
        },
    }
}

/// Load and validate a catalog file (TOML, YAML or JSON).
pub fn load_catalog_file(path: &Path) -> Result<OptionCatalog> {
    if !path.exists() {
        return Err(Error::message(format!(
            "catalog file not found: {}",
            path.display()
        )));
    }
    let catalog: OptionCatalog = agentdesk_config::load_document(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;

    let report = validate::validate(&catalog);
    for d in &report.diagnostics {
        match d.severity {
            Severity::Error | Severity::Warning => {
                warn!(path = %d.path, severity = %d.severity, "{}", d.message)
            },
            Severity::Info => debug!(path = %d.path, "{}", d.message),
        }
    }
    if report.has_errors() {
        return Err(Error::Invalid {
            path: path.display().to_string(),
            errors: report.count(Severity::Error),
        });
    }

    debug!(path = %path.display(), "loaded catalog");
    Ok(catalog)
}
