use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use {
    serde::de::DeserializeOwned,
    tracing::{debug, warn},
};

use crate::{env_subst::substitute_env, schema::AgentdeskConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "agentdesk.toml",
    "agentdesk.yaml",
    "agentdesk.yml",
    "agentdesk.json",
];

static CONFIG_DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Override the user-global config directory (e.g. from `--config-dir`).
pub fn set_config_dir(dir: PathBuf) {
    if let Ok(mut guard) = CONFIG_DIR_OVERRIDE.lock() {
        *guard = Some(dir);
    }
}

/// Returns the user-global config directory (`~/.config/agentdesk/`), or the
/// override set with [`set_config_dir`].
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(guard) = CONFIG_DIR_OVERRIDE.lock()
        && let Some(dir) = guard.as_ref()
    {
        return Some(dir.clone());
    }
    directories::ProjectDirs::from("", "", "agentdesk").map(|d| d.config_dir().to_path_buf())
}

/// Load config from the given path (any supported format).
///
/// A relative `catalog.path` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> anyhow::Result<AgentdeskConfig> {
    let mut cfg: AgentdeskConfig = load_document(path)?;
    cfg.validate()
        .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
    if let Some(catalog) = cfg.catalog.path.as_mut()
        && catalog.is_relative()
        && let Some(parent) = path.parent()
    {
        *catalog = parent.join(&*catalog);
    }
    Ok(cfg)
}

/// Read any supported document, expand `${ENV_VAR}`s and deserialize it.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_document(&raw, path)
}

/// Deserialize `raw` using the format implied by `path`'s extension.
///
/// Files without an extension are treated as TOML.
pub fn parse_document<T: DeserializeOwned>(raw: &str, path: &Path) -> anyhow::Result<T> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./agentdesk.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/agentdesk/agentdesk.{toml,yaml,yml,json}` (user-global)
///
/// Returns `AgentdeskConfig::default()` if no config file is found or the
/// one found fails to parse.
pub fn discover_and_load() -> AgentdeskConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    AgentdeskConfig::default()
}

/// Find the first config file in standard locations.
pub fn find_config_file() -> Option<PathBuf> {
    let local = CONFIG_FILENAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists());
    if local.is_some() {
        return local;
    }

    let dir = config_dir()?;
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}
