/// Config schema types for the agentdesk wizard.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentdeskConfig {
    pub catalog: CatalogSource,
    pub wizard: WizardConfig,
}

/// Where the option catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    /// Catalog file (TOML, YAML or JSON). The built-in catalog is used when unset.
    /// Relative paths resolve against the directory of the config file.
    pub path: Option<PathBuf>,
}

/// Wizard session options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Seed a fresh session with one example FAQ entry. Defaults to true.
    pub example_faq: bool,
    /// Optional cap on selected languages. Unbounded when unset.
    pub max_languages: Option<usize>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            example_faq: true,
            max_languages: None,
        }
    }
}

impl AgentdeskConfig {
    /// Reject values that parse but cannot drive a session.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.wizard.max_languages == Some(0) {
            anyhow::bail!("wizard.max_languages must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: AgentdeskConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AgentdeskConfig::default());
        assert!(cfg.wizard.example_faq);
        assert!(cfg.wizard.max_languages.is_none());
        assert!(cfg.catalog.path.is_none());
    }

    #[test]
    fn partial_wizard_section() {
        let cfg: AgentdeskConfig = toml::from_str("[wizard]\nmax_languages = 4\n").unwrap();
        assert_eq!(cfg.wizard.max_languages, Some(4));
        assert!(cfg.wizard.example_faq);
    }

    #[test]
    fn zero_language_cap_is_rejected() {
        let cfg: AgentdeskConfig = toml::from_str("[wizard]\nmax_languages = 0\n").unwrap();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("max_languages"), "{err}");
        assert!(AgentdeskConfig::default().validate().is_ok());
    }
}
