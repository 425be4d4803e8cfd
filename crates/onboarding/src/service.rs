//! Live wizard service that backs the `wizard.*` methods of an embedding UI.
//!
//! Meant for a web or RPC front end that relays JSON actions from the browser;
//! the `agentdesk` terminal binary drives [`WizardController`] directly instead.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use {
    agentdesk_catalog::OptionCatalog,
    serde_json::{Value, json},
    tokio::sync::mpsc,
    tracing::debug,
};

use crate::{
    aggregator::SessionOptions,
    controller::{WizardAction, WizardController, WizardEvent},
    error::{Error, Result},
};

struct ActiveWizard {
    controller: WizardController,
    events: mpsc::UnboundedReceiver<WizardEvent>,
}

/// At most one live session at a time, driven with JSON actions.
pub struct LiveWizardService {
    catalog: Arc<OptionCatalog>,
    options: SessionOptions,
    state: Mutex<Option<ActiveWizard>>,
}

impl LiveWizardService {
    pub fn new(catalog: Arc<OptionCatalog>, options: SessionOptions) -> Self {
        Self {
            catalog,
            options,
            state: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<ActiveWizard>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a fresh session, replacing any active one. Returns the first step.
    pub fn wizard_start(&self) -> Value {
        let (controller, events) = WizardController::new(self.catalog.clone(), self.options);
        let resp = step_response(&controller);
        let mut guard = self.lock();
        if guard.is_some() {
            debug!("replacing active wizard session");
        }
        *guard = Some(ActiveWizard { controller, events });
        resp
    }

    /// Apply one action given as JSON, e.g. `{"type": "next"}`.
    pub fn wizard_dispatch(&self, params: Value) -> Result<Value> {
        let action: WizardAction = serde_json::from_value(params)?;
        let mut guard = self.lock();
        let active = guard.as_mut().ok_or(Error::NoSession)?;

        let outcome = active.controller.dispatch(action);
        let mut finished = None;
        while let Ok(event) = active.events.try_recv() {
            match event {
                WizardEvent::StepChanged { .. } => {},
                WizardEvent::Completed(data) => {
                    finished = Some(json!({
                        "step": "done",
                        "done": true,
                        "cancelled": false,
                        "data": data,
                        "summary": data.summary(),
                    }));
                },
                WizardEvent::Cancelled => {
                    finished = Some(json!({
                        "step": "done",
                        "done": true,
                        "cancelled": true,
                    }));
                },
            }
        }

        if let Some(resp) = finished {
            *guard = None;
            return Ok(resp);
        }

        let mut resp = step_response(&active.controller);
        resp["outcome"] = json!(outcome);
        Ok(resp)
    }

    /// Cancel the active session, if any.
    pub fn wizard_cancel(&self) {
        if let Some(mut active) = self.lock().take() {
            active.controller.cancel();
        }
    }

    /// Whether a session is running and which step it shows.
    pub fn wizard_status(&self) -> Value {
        match self.lock().as_ref() {
            Some(active) => json!({
                "active": true,
                "step": active.controller.current_step(),
            }),
            None => json!({ "active": false }),
        }
    }
}

fn step_response(controller: &WizardController) -> Value {
    json!({
        "step": controller.current_step(),
        "done": false,
        "view": controller.view(),
    })
}
