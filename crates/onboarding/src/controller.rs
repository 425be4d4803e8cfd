//! Wizard controller: one session of sequencer + aggregator.
//!
//! Every operator action is a [`WizardAction`] applied synchronously by
//! [`WizardController::dispatch`]. Leaving the wizard is reported on an
//! unbounded channel as [`WizardEvent::Completed`] or
//! [`WizardEvent::Cancelled`], after which the session is gone and further
//! dispatches do nothing.

use std::sync::Arc;

use {
    agentdesk_catalog::{CatalogList, OptionCatalog},
    serde::{Deserialize, Serialize},
    tokio::sync::mpsc,
    tracing::{debug, info},
};

use crate::{
    aggregator::{Aggregator, SessionOptions},
    data::{Collection, RequiredField, SingleChoice, Summary, WizardData},
    faq::FaqEntry,
    state::{Sequencer, Transition, WizardStep},
};

/// An operator action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Back,
    GoTo {
        step: usize,
    },
    Cancel,
    SetChoice {
        field: SingleChoice,
        id: String,
    },
    ToggleObjective {
        id: String,
    },
    Toggle {
        collection: Collection,
        id: String,
    },
    AddFaq {
        question: String,
        answer: String,
        #[serde(default)]
        category: Option<String>,
    },
    RemoveFaq {
        id: String,
    },
}

impl WizardAction {
    /// The step whose fields this action writes, for mutations.
    fn target_step(&self) -> Option<WizardStep> {
        match self {
            Self::Next | Self::Back | Self::GoTo { .. } | Self::Cancel => None,
            Self::SetChoice {
                field: SingleChoice::Tone,
                ..
            }
            | Self::AddFaq { .. }
            | Self::RemoveFaq { .. } => Some(WizardStep::Identity),
            Self::SetChoice { .. } => Some(WizardStep::Context),
            Self::ToggleObjective { .. } => Some(WizardStep::Objectives),
            Self::Toggle {
                collection: Collection::Features,
                ..
            } => Some(WizardStep::Features),
            Self::Toggle {
                collection: Collection::Languages,
                ..
            } => Some(WizardStep::Languages),
            Self::Toggle { .. } => Some(WizardStep::Integrations),
        }
    }
}

/// Messages emitted to whoever mounted the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    StepChanged { from: WizardStep, to: WizardStep },
    /// Sent once, with an owned copy of the final record.
    Completed(WizardData),
    /// Sent once; no data is returned.
    Cancelled,
}

/// What [`WizardController::dispatch`] did with an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    Navigated,
    Updated,
    /// Valid action with no effect (cap reached, unknown id, blank FAQ,
    /// out-of-range step, or a field not shown on the current step).
    Ignored,
    Completed,
    Cancelled,
    /// The session already ended.
    Finished,
}

#[derive(Debug)]
struct Session {
    sequencer: Sequencer,
    aggregator: Aggregator,
}

/// Drives one wizard session.
#[derive(Debug)]
pub struct WizardController {
    session: Option<Session>,
    events: mpsc::UnboundedSender<WizardEvent>,
}

impl WizardController {
    /// Start a session and return the receiving end of its event channel.
    pub fn new(
        catalog: Arc<OptionCatalog>,
        options: SessionOptions,
    ) -> (Self, mpsc::UnboundedReceiver<WizardEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::with_sender(catalog, options, tx), rx)
    }

    /// Start a session that reports to an existing channel.
    pub fn with_sender(
        catalog: Arc<OptionCatalog>,
        options: SessionOptions,
        events: mpsc::UnboundedSender<WizardEvent>,
    ) -> Self {
        debug!("wizard session started");
        Self {
            session: Some(Session {
                sequencer: Sequencer::new(),
                aggregator: Aggregator::new(catalog, options),
            }),
            events,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        self.session.as_ref().map(|s| s.sequencer.current())
    }

    /// Read-only view of the record being built.
    pub fn data(&self) -> Option<&WizardData> {
        self.session.as_ref().map(|s| s.aggregator.data())
    }

    pub fn next(&mut self) -> DispatchOutcome {
        self.dispatch(WizardAction::Next)
    }

    pub fn back(&mut self) -> DispatchOutcome {
        self.dispatch(WizardAction::Back)
    }

    pub fn go_to(&mut self, step: usize) -> DispatchOutcome {
        self.dispatch(WizardAction::GoTo { step })
    }

    pub fn cancel(&mut self) -> DispatchOutcome {
        self.dispatch(WizardAction::Cancel)
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: WizardAction) -> DispatchOutcome {
        let Some(session) = self.session.as_mut() else {
            debug!(?action, "wizard already finished");
            return DispatchOutcome::Finished;
        };

        if let Some(target) = action.target_step()
            && target != session.sequencer.current()
        {
            debug!(
                ?action,
                current = %session.sequencer.current(),
                "action targets another step"
            );
            return DispatchOutcome::Ignored;
        }

        let agg = &mut session.aggregator;
        match action {
            WizardAction::Next => {
                let t = session.sequencer.advance();
                self.apply(t)
            },
            WizardAction::Back => {
                let t = session.sequencer.retreat();
                self.apply(t)
            },
            WizardAction::GoTo { step } => match session.sequencer.go_to(step) {
                Some(t) => self.apply(t),
                None => {
                    debug!(step, "step ordinal out of range");
                    DispatchOutcome::Ignored
                },
            },
            WizardAction::Cancel => self.apply(Transition::Cancel),
            WizardAction::SetChoice { field, id } => updated(agg.set_single_choice(field, &id)),
            WizardAction::ToggleObjective { id } => updated(agg.toggle_objective(&id).changed()),
            WizardAction::Toggle { collection, id } => {
                updated(agg.toggle(collection, &id).changed())
            },
            WizardAction::AddFaq {
                question,
                answer,
                category,
            } => updated(
                agg.add_faq(&question, &answer, category.as_deref())
                    .is_some(),
            ),
            WizardAction::RemoveFaq { id } => updated(agg.remove_faq(&id)),
        }
    }

    fn apply(&mut self, transition: Transition) -> DispatchOutcome {
        match transition {
            Transition::Moved { from, to } => {
                if from != to {
                    self.emit(WizardEvent::StepChanged { from, to });
                }
                DispatchOutcome::Navigated
            },
            Transition::Complete => {
                let Some(session) = self.session.take() else {
                    return DispatchOutcome::Finished;
                };
                let data = session.aggregator.into_data();
                info!(summary = ?data.summary(), "wizard completed");
                self.emit(WizardEvent::Completed(data));
                DispatchOutcome::Completed
            },
            Transition::Cancel => {
                self.session = None;
                info!("wizard cancelled");
                self.emit(WizardEvent::Cancelled);
                DispatchOutcome::Cancelled
            },
        }
    }

    fn emit(&self, event: WizardEvent) {
        if self.events.send(event).is_err() {
            debug!("wizard event receiver dropped");
        }
    }

    /// What the current step shows.
    pub fn view(&self) -> Option<StepView> {
        let session = self.session.as_ref()?;
        let step = session.sequencer.current();
        let agg = &session.aggregator;
        let data = agg.data();

        let sections = step_lists(step)
            .iter()
            .map(|&list| section(agg.catalog(), data, list))
            .collect();
        let faqs = if step == WizardStep::Identity {
            data.faqs.as_slice().to_vec()
        } else {
            Vec::new()
        };
        let missing = data
            .missing_required()
            .into_iter()
            .filter(|f| step == WizardStep::Finalize || f.step() == step)
            .collect();

        Some(StepView {
            step,
            ordinal: step.ordinal(),
            total: WizardStep::COUNT,
            title: step.title(),
            subtitle: step.subtitle(),
            progress: session.sequencer.progress(),
            sections,
            faqs,
            missing,
            summary: (step == WizardStep::Finalize).then(|| data.summary()),
        })
    }
}

fn updated(changed: bool) -> DispatchOutcome {
    if changed {
        DispatchOutcome::Updated
    } else {
        DispatchOutcome::Ignored
    }
}

/// Catalog lists presented on each step.
fn step_lists(step: WizardStep) -> &'static [CatalogList] {
    match step {
        WizardStep::Welcome | WizardStep::Finalize => &[],
        WizardStep::Context => &[
            CatalogList::BusinessModels,
            CatalogList::TeamSizes,
            CatalogList::RequestVolumes,
        ],
        WizardStep::Objectives => &[CatalogList::Objectives],
        WizardStep::Features => &[CatalogList::Features],
        WizardStep::Identity => &[CatalogList::Tones],
        WizardStep::Languages => &[CatalogList::Languages],
        WizardStep::Integrations => &[
            CatalogList::CommunicationChannels,
            CatalogList::TicketingSystems,
            CatalogList::EcommerceTools,
        ],
    }
}

fn section(catalog: &OptionCatalog, data: &WizardData, list: CatalogList) -> SectionView {
    let selection = data.selection(list);
    let options = catalog
        .items(list)
        .iter()
        .map(|item| OptionView {
            id: item.id.clone(),
            label: item.label.clone(),
            description: item.description.clone(),
            selected: data.is_selected(list, &item.id),
            enabled: selection.is_none_or(|set| set.is_selectable(item.id.as_str())),
        })
        .collect();
    SectionView {
        list,
        label: list.label(),
        multiple: selection.is_some(),
        max: selection.and_then(|set| set.max()),
        options,
    }
}

/// Read-only rendering model for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub step: WizardStep,
    pub ordinal: usize,
    pub total: usize,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub progress: u8,
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<FaqEntry>,
    /// Required fields of this step still unanswered (all of them on the
    /// finalize step). Informational only.
    pub missing: Vec<RequiredField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub list: CatalogList,
    pub label: &'static str,
    pub multiple: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub selected: bool,
    /// False once a capped list is full and this option is not selected.
    pub enabled: bool,
}
