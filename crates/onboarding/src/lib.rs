//! Agent setup wizard.
//!
//! Flow: welcome → context → objectives → features → identity → languages →
//! integrations → finalize.
//!
//! [`state`] holds the step sequencer, [`aggregator`] the configuration being
//! built, and [`controller`] wires both together and emits completion or
//! cancellation as [`WizardEvent`]s.

pub mod aggregator;
pub mod command;
pub mod controller;
pub mod data;
pub mod error;
pub mod faq;
pub mod selection;
pub mod service;
pub mod state;
pub mod wizard;

pub use {
    aggregator::{Aggregator, SessionOptions},
    controller::{DispatchOutcome, StepView, WizardAction, WizardController, WizardEvent},
    data::{Collection, MAX_OBJECTIVES, RequiredField, SingleChoice, Summary, WizardData},
    error::{Context, Error, Result},
    faq::{FaqEntry, FaqRegistry},
    selection::{SelectionSet, ToggleOutcome},
    state::{Sequencer, Transition, WizardStep},
};
