//! The single mutable record a wizard session writes into.

use std::sync::Arc;

use {
    agentdesk_catalog::{CatalogList, OptionCatalog},
    agentdesk_config::WizardConfig,
    tracing::{debug, warn},
};

use crate::{
    data::{Collection, MAX_OBJECTIVES, SingleChoice, WizardData},
    faq::FaqRegistry,
    selection::{SelectionSet, ToggleOutcome},
};

/// Per-session knobs, usually taken from `[wizard]` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub example_faq: bool,
    pub max_languages: Option<usize>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            example_faq: true,
            max_languages: None,
        }
    }
}

impl From<&WizardConfig> for SessionOptions {
    fn from(cfg: &WizardConfig) -> Self {
        Self {
            example_faq: cfg.example_faq,
            max_languages: cfg.max_languages,
        }
    }
}

/// Owns the [`WizardData`] of one session.
///
/// Steps read through [`Aggregator::data`] and write only through the methods
/// below, which keep the record consistent with the catalog: unknown ids,
/// blank FAQ fields and objectives past the cap are dropped silently.
#[derive(Debug, Clone)]
pub struct Aggregator {
    catalog: Arc<OptionCatalog>,
    data: WizardData,
}

impl Aggregator {
    /// Fresh record seeded with the catalog's default features and languages.
    pub fn new(catalog: Arc<OptionCatalog>, options: SessionOptions) -> Self {
        let mut features = SelectionSet::unbounded();
        for id in catalog.defaults(CatalogList::Features) {
            features.insert(id.to_string());
        }
        let default_languages: Vec<&str> = catalog.defaults(CatalogList::Languages).collect();
        let mut languages = SelectionSet::with_bound(language_cap(
            options.max_languages,
            default_languages.len(),
        ));
        for id in default_languages {
            languages.insert(id.to_string());
        }

        let data = WizardData {
            features,
            faqs: if options.example_faq {
                FaqRegistry::with_example()
            } else {
                FaqRegistry::new()
            },
            languages,
            ..WizardData::default()
        };
        debug!(
            features = data.features.len(),
            languages = data.languages.len(),
            faqs = data.faqs.len(),
            "wizard data seeded"
        );
        Self { catalog, data }
    }

    pub fn data(&self) -> &WizardData {
        &self.data
    }

    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    /// Owned copy for handing to a caller.
    pub fn snapshot(&self) -> WizardData {
        self.data.clone()
    }

    pub fn into_data(self) -> WizardData {
        self.data
    }

    /// Overwrite a single-choice answer. Returns `false` for ids not in the
    /// field's catalog list.
    pub fn set_single_choice(&mut self, field: SingleChoice, id: &str) -> bool {
        if !self.catalog.contains(field.list(), id) {
            debug!(field = field.key(), id, "ignoring unknown catalog id");
            return false;
        }
        *self.data.choice_mut(field) = Some(id.to_string());
        true
    }

    /// Toggle an objective, capped at [`MAX_OBJECTIVES`].
    pub fn toggle_objective(&mut self, id: &str) -> ToggleOutcome {
        if !self.catalog.contains(CatalogList::Objectives, id) {
            debug!(id, "ignoring unknown objective");
            return ToggleOutcome::Rejected;
        }
        let outcome = self.data.objectives.toggle(id.to_string());
        if outcome == ToggleOutcome::Rejected {
            debug!(id, max = MAX_OBJECTIVES, "objective cap reached");
        }
        outcome
    }

    /// Toggle an id in one of the uncapped collections.
    pub fn toggle(&mut self, collection: Collection, id: &str) -> ToggleOutcome {
        if !self.catalog.contains(collection.list(), id) {
            debug!(collection = collection.key(), id, "ignoring unknown catalog id");
            return ToggleOutcome::Rejected;
        }
        let outcome = self.data.collection_mut(collection).toggle(id.to_string());
        if outcome == ToggleOutcome::Rejected {
            debug!(collection = collection.key(), id, "selection cap reached");
        }
        outcome
    }

    /// Append a FAQ entry. Returns its id, or `None` when question or answer
    /// is blank.
    pub fn add_faq(&mut self, question: &str, answer: &str, category: Option<&str>) -> Option<String> {
        let id = self.data.faqs.add(question, answer, category);
        if id.is_none() {
            debug!("ignoring faq with blank question or answer");
        }
        id
    }

    pub fn remove_faq(&mut self, id: &str) -> bool {
        self.data.faqs.remove(id).is_some()
    }
}

/// Effective language cap: never below the seeded defaults, and never zero.
fn language_cap(max: Option<usize>, defaults: usize) -> Option<usize> {
    let floor = defaults.max(1);
    match max {
        Some(max) if max < floor => {
            warn!(
                max_languages = max,
                raised_to = floor,
                "max_languages is below the default language count"
            );
            Some(floor)
        },
        other => other,
    }
}
