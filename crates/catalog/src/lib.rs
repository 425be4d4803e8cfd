//! Read-only option catalog consumed by the setup wizard.
//!
//! Lists: business models, team sizes, request volumes, objectives, features,
//! tones, languages, and the three integration categories.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use {
    error::{Context, Error, Result},
    loader::load_catalog,
    types::{CatalogItem, CatalogList, OptionCatalog},
    validate::{Diagnostic, Severity, ValidationResult},
};
