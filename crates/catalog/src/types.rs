use serde::{Deserialize, Serialize};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Pre-selected when a wizard session starts (features and languages only).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: None,
            default: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn selected_by_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// Names every list in an [`OptionCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogList {
    BusinessModels,
    TeamSizes,
    RequestVolumes,
    Objectives,
    Features,
    Tones,
    Languages,
    CommunicationChannels,
    TicketingSystems,
    EcommerceTools,
}

impl CatalogList {
    pub const ALL: [Self; 10] = [
        Self::BusinessModels,
        Self::TeamSizes,
        Self::RequestVolumes,
        Self::Objectives,
        Self::Features,
        Self::Tones,
        Self::Languages,
        Self::CommunicationChannels,
        Self::TicketingSystems,
        Self::EcommerceTools,
    ];

    /// Key used in catalog files and diagnostics.
    pub fn key(self) -> &'static str {
        match self {
            Self::BusinessModels => "business_models",
            Self::TeamSizes => "team_sizes",
            Self::RequestVolumes => "request_volumes",
            Self::Objectives => "objectives",
            Self::Features => "features",
            Self::Tones => "tones",
            Self::Languages => "languages",
            Self::CommunicationChannels => "communication_channels",
            Self::TicketingSystems => "ticketing_systems",
            Self::EcommerceTools => "ecommerce_tools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessModels => "Business model",
            Self::TeamSizes => "Team size",
            Self::RequestVolumes => "Request volume",
            Self::Objectives => "Objectives",
            Self::Features => "Features",
            Self::Tones => "Tone",
            Self::Languages => "Languages",
            Self::CommunicationChannels => "Communication channels",
            Self::TicketingSystems => "Ticketing systems",
            Self::EcommerceTools => "E-commerce tools",
        }
    }

    /// Whether `default` flags on this list pre-select items in a new session.
    pub fn seeds_defaults(self) -> bool {
        matches!(self, Self::Features | Self::Languages)
    }

    /// Lists answered with exactly one choice.
    pub fn is_single_choice(self) -> bool {
        matches!(
            self,
            Self::BusinessModels | Self::TeamSizes | Self::RequestVolumes | Self::Tones
        )
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|list| list.key() == key)
    }
}

impl std::fmt::Display for CatalogList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Static option lists supplied to the wizard. Never mutated by a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionCatalog {
    pub business_models: Vec<CatalogItem>,
    pub team_sizes: Vec<CatalogItem>,
    pub request_volumes: Vec<CatalogItem>,
    pub objectives: Vec<CatalogItem>,
    pub features: Vec<CatalogItem>,
    pub tones: Vec<CatalogItem>,
    pub languages: Vec<CatalogItem>,
    pub communication_channels: Vec<CatalogItem>,
    pub ticketing_systems: Vec<CatalogItem>,
    pub ecommerce_tools: Vec<CatalogItem>,
}

impl OptionCatalog {
    pub fn items(&self, list: CatalogList) -> &[CatalogItem] {
        match list {
            CatalogList::BusinessModels => &self.business_models,
            CatalogList::TeamSizes => &self.team_sizes,
            CatalogList::RequestVolumes => &self.request_volumes,
            CatalogList::Objectives => &self.objectives,
            CatalogList::Features => &self.features,
            CatalogList::Tones => &self.tones,
            CatalogList::Languages => &self.languages,
            CatalogList::CommunicationChannels => &self.communication_channels,
            CatalogList::TicketingSystems => &self.ticketing_systems,
            CatalogList::EcommerceTools => &self.ecommerce_tools,
        }
    }

    pub fn get(&self, list: CatalogList, id: &str) -> Option<&CatalogItem> {
        self.items(list).iter().find(|item| item.id == id)
    }

    pub fn contains(&self, list: CatalogList, id: &str) -> bool {
        self.get(list, id).is_some()
    }

    /// Ids flagged `default` in `list`, in catalog order.
    pub fn defaults(&self, list: CatalogList) -> impl Iterator<Item = &str> {
        self.items(list)
            .iter()
            .filter(|item| item.default)
            .map(|item| item.id.as_str())
    }
}
