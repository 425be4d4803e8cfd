//! Configuration loading and env substitution.
//!
//! Config files: `agentdesk.toml`, `agentdesk.yaml`, or `agentdesk.json`
//! Searched in `./` then `~/.config/agentdesk/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{
        config_dir, discover_and_load, find_config_file, load_config, load_document,
        parse_document, set_config_dir,
    },
    schema::{AgentdeskConfig, CatalogSource, WizardConfig},
};
