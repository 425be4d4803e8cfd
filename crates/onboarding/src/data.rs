//! The configuration record built by a wizard session.

use {
    agentdesk_catalog::CatalogList,
    serde::{Deserialize, Deserializer, Serialize, de},
};

use crate::{faq::FaqRegistry, selection::SelectionSet, state::WizardStep};

/// Most objectives an operator may pick.
pub const MAX_OBJECTIVES: usize = 3;

/// Answers holding exactly one catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleChoice {
    BusinessModel,
    TeamSize,
    RequestVolume,
    Tone,
}

impl SingleChoice {
    pub const ALL: [Self; 4] = [
        Self::BusinessModel,
        Self::TeamSize,
        Self::RequestVolume,
        Self::Tone,
    ];

    pub fn list(self) -> CatalogList {
        match self {
            Self::BusinessModel => CatalogList::BusinessModels,
            Self::TeamSize => CatalogList::TeamSizes,
            Self::RequestVolume => CatalogList::RequestVolumes,
            Self::Tone => CatalogList::Tones,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::BusinessModel => "business_model",
            Self::TeamSize => "team_size",
            Self::RequestVolume => "request_volume",
            Self::Tone => "tone",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    fn from_list(list: CatalogList) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.list() == list)
    }
}

/// Uncapped multi-select answers toggled through one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Features,
    Languages,
    CommunicationChannels,
    TicketingSystems,
    EcommerceTools,
}

impl Collection {
    pub const ALL: [Self; 5] = [
        Self::Features,
        Self::Languages,
        Self::CommunicationChannels,
        Self::TicketingSystems,
        Self::EcommerceTools,
    ];
    pub const INTEGRATIONS: [Self; 3] = [
        Self::CommunicationChannels,
        Self::TicketingSystems,
        Self::EcommerceTools,
    ];

    pub fn list(self) -> CatalogList {
        match self {
            Self::Features => CatalogList::Features,
            Self::Languages => CatalogList::Languages,
            Self::CommunicationChannels => CatalogList::CommunicationChannels,
            Self::TicketingSystems => CatalogList::TicketingSystems,
            Self::EcommerceTools => CatalogList::EcommerceTools,
        }
    }

    pub fn key(self) -> &'static str {
        self.list().key()
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Fields flagged required in the wizard. Advisory: nothing blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    BusinessModel,
    TeamSize,
    RequestVolume,
    Objectives,
    Tone,
    Languages,
}

impl RequiredField {
    pub fn step(self) -> WizardStep {
        match self {
            Self::BusinessModel | Self::TeamSize | Self::RequestVolume => WizardStep::Context,
            Self::Objectives => WizardStep::Objectives,
            Self::Tone => WizardStep::Identity,
            Self::Languages => WizardStep::Languages,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessModel => "business model",
            Self::TeamSize => "team size",
            Self::RequestVolume => "request volume",
            Self::Objectives => "at least one objective",
            Self::Tone => "tone",
            Self::Languages => "at least one language",
        }
    }
}

/// Selection counts shown on the finalize step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub objectives: usize,
    pub features: usize,
    pub faqs: usize,
    pub languages: usize,
    pub integrations: usize,
}

/// Everything collected during one wizard session.
///
/// `objectives` is capped at [`MAX_OBJECTIVES`] in every record, including
/// `Default` and deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardData {
    pub business_model: Option<String>,
    pub team_size: Option<String>,
    pub request_volume: Option<String>,
    #[serde(deserialize_with = "capped_objectives")]
    pub objectives: SelectionSet,
    pub features: SelectionSet,
    pub tone: Option<String>,
    pub faqs: FaqRegistry,
    pub languages: SelectionSet,
    pub communication_channels: SelectionSet,
    pub ticketing_systems: SelectionSet,
    pub ecommerce_tools: SelectionSet,
    /// Reserved; no step writes it.
    pub notifications: SelectionSet,
}

impl Default for WizardData {
    fn default() -> Self {
        Self {
            business_model: None,
            team_size: None,
            request_volume: None,
            objectives: SelectionSet::bounded(MAX_OBJECTIVES),
            features: SelectionSet::unbounded(),
            tone: None,
            faqs: FaqRegistry::new(),
            languages: SelectionSet::unbounded(),
            communication_channels: SelectionSet::unbounded(),
            ticketing_systems: SelectionSet::unbounded(),
            ecommerce_tools: SelectionSet::unbounded(),
            notifications: SelectionSet::unbounded(),
        }
    }
}

fn capped_objectives<'de, D>(deserializer: D) -> Result<SelectionSet, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Vec::<String>::deserialize(deserializer)?;
    let mut objectives = SelectionSet::bounded(MAX_OBJECTIVES);
    for id in ids {
        if objectives.is_full() && !objectives.contains(id.as_str()) {
            return Err(de::Error::custom(format!(
                "at most {MAX_OBJECTIVES} objectives may be selected"
            )));
        }
        objectives.insert(id);
    }
    Ok(objectives)
}

impl WizardData {
    pub fn choice(&self, field: SingleChoice) -> Option<&str> {
        match field {
            SingleChoice::BusinessModel => self.business_model.as_deref(),
            SingleChoice::TeamSize => self.team_size.as_deref(),
            SingleChoice::RequestVolume => self.request_volume.as_deref(),
            SingleChoice::Tone => self.tone.as_deref(),
        }
    }

    pub(crate) fn choice_mut(&mut self, field: SingleChoice) -> &mut Option<String> {
        match field {
            SingleChoice::BusinessModel => &mut self.business_model,
            SingleChoice::TeamSize => &mut self.team_size,
            SingleChoice::RequestVolume => &mut self.request_volume,
            SingleChoice::Tone => &mut self.tone,
        }
    }

    pub fn collection(&self, collection: Collection) -> &SelectionSet {
        match collection {
            Collection::Features => &self.features,
            Collection::Languages => &self.languages,
            Collection::CommunicationChannels => &self.communication_channels,
            Collection::TicketingSystems => &self.ticketing_systems,
            Collection::EcommerceTools => &self.ecommerce_tools,
        }
    }

    pub(crate) fn collection_mut(&mut self, collection: Collection) -> &mut SelectionSet {
        match collection {
            Collection::Features => &mut self.features,
            Collection::Languages => &mut self.languages,
            Collection::CommunicationChannels => &mut self.communication_channels,
            Collection::TicketingSystems => &mut self.ticketing_systems,
            Collection::EcommerceTools => &mut self.ecommerce_tools,
        }
    }

    /// The multi-select set backing `list`, if it is one.
    pub fn selection(&self, list: CatalogList) -> Option<&SelectionSet> {
        match list {
            CatalogList::Objectives => Some(&self.objectives),
            other => Collection::ALL
                .into_iter()
                .find(|c| c.list() == other)
                .map(|c| self.collection(c)),
        }
    }

    /// Whether `id` is currently chosen in `list`.
    pub fn is_selected(&self, list: CatalogList, id: &str) -> bool {
        if let Some(field) = SingleChoice::from_list(list) {
            return self.choice(field) == Some(id);
        }
        self.selection(list).is_some_and(|set| set.contains(id))
    }

    /// Required fields still unanswered, in step order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.business_model.is_none() {
            missing.push(RequiredField::BusinessModel);
        }
        if self.team_size.is_none() {
            missing.push(RequiredField::TeamSize);
        }
        if self.request_volume.is_none() {
            missing.push(RequiredField::RequestVolume);
        }
        if self.objectives.is_empty() {
            missing.push(RequiredField::Objectives);
        }
        if self.tone.is_none() {
            missing.push(RequiredField::Tone);
        }
        if self.languages.is_empty() {
            missing.push(RequiredField::Languages);
        }
        missing
    }

    pub fn summary(&self) -> Summary {
        Summary {
            objectives: self.objectives.len(),
            features: self.features.len(),
            faqs: self.faqs.len(),
            languages: self.languages.len(),
            integrations: Collection::INTEGRATIONS
                .into_iter()
                .map(|c| self.collection(c).len())
                .sum(),
        }
    }
}
