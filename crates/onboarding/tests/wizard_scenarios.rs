#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{collections::HashSet, sync::Arc};

use {
    agentdesk_catalog::OptionCatalog,
    agentdesk_onboarding::{
        Collection, DispatchOutcome, RequiredField, SessionOptions, SingleChoice, WizardAction,
        WizardController, WizardData, WizardEvent, WizardStep,
    },
    tokio::sync::mpsc::UnboundedReceiver,
};

fn start(example_faq: bool) -> (WizardController, UnboundedReceiver<WizardEvent>) {
    let options = SessionOptions {
        example_faq,
        ..SessionOptions::default()
    };
    WizardController::new(Arc::new(OptionCatalog::builtin()), options)
}

fn drain(rx: &mut UnboundedReceiver<WizardEvent>) -> Vec<WizardEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn completions(events: &[WizardEvent]) -> Vec<&WizardData> {
    events
        .iter()
        .filter_map(|e| match e {
            WizardEvent::Completed(data) => Some(data),
            _ => None,
        })
        .collect()
}

fn cancellations(events: &[WizardEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, WizardEvent::Cancelled))
        .count()
}

#[test]
fn objectives_stop_at_three() {
    let (mut wiz, _rx) = start(true);
    wiz.go_to(WizardStep::Objectives.ordinal());

    for id in [
        "reduce_response_time",
        "always_available",
        "reduce_ticket_volume",
        "improve_satisfaction",
    ] {
        wiz.dispatch(WizardAction::ToggleObjective { id: id.into() });
        assert!(wiz.data().unwrap().objectives.len() <= 3);
    }

    assert_eq!(wiz.data().unwrap().objectives.as_slice(), [
        "reduce_response_time",
        "always_available",
        "reduce_ticket_volume",
    ]);
}

#[test]
fn faq_remove_keeps_the_other_entry() {
    let (mut wiz, _rx) = start(false);
    wiz.go_to(WizardStep::Identity.ordinal());

    wiz.dispatch(WizardAction::AddFaq {
        question: "Q1".into(),
        answer: "A1".into(),
        category: Some("cat".into()),
    });
    wiz.dispatch(WizardAction::AddFaq {
        question: "Q2".into(),
        answer: "A2".into(),
        category: None,
    });
    let q1 = wiz
        .data()
        .unwrap()
        .faqs
        .iter()
        .find(|f| f.question == "Q1")
        .map(|f| f.id.clone())
        .unwrap();

    assert_eq!(
        wiz.dispatch(WizardAction::RemoveFaq { id: q1 }),
        DispatchOutcome::Updated
    );

    let faqs = &wiz.data().unwrap().faqs;
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs.as_slice()[0].question, "Q2");
    assert_eq!(faqs.as_slice()[0].category, None);
}

#[test]
fn back_on_first_step_leaves_once() {
    let (mut wiz, mut rx) = start(true);

    assert_eq!(wiz.back(), DispatchOutcome::Cancelled);
    assert!(!wiz.is_active());
    assert!(wiz.data().is_none());
    assert_eq!(wiz.current_step(), None);

    // Nothing reacts after the session has ended.
    assert_eq!(wiz.back(), DispatchOutcome::Finished);
    assert_eq!(wiz.next(), DispatchOutcome::Finished);

    let events = drain(&mut rx);
    assert_eq!(cancellations(&events), 1);
    assert!(completions(&events).is_empty());
}

#[test]
fn full_run_completes_with_every_mutation() {
    let (mut wiz, mut rx) = start(true);

    wiz.next(); // 2 context
    for (field, id) in [
        (SingleChoice::BusinessModel, "ecommerce"),
        (SingleChoice::TeamSize, "medium"),
        (SingleChoice::RequestVolume, "high"),
    ] {
        assert_eq!(
            wiz.dispatch(WizardAction::SetChoice {
                field,
                id: id.into()
            }),
            DispatchOutcome::Updated
        );
    }
    wiz.next(); // 3 objectives
    wiz.dispatch(WizardAction::ToggleObjective {
        id: "reduce_ticket_volume".into(),
    });
    wiz.next(); // 4 features
    wiz.dispatch(WizardAction::Toggle {
        collection: Collection::Features,
        id: "human_handoff".into(),
    });
    wiz.next(); // 5 identity
    wiz.dispatch(WizardAction::SetChoice {
        field: SingleChoice::Tone,
        id: "empathetic".into(),
    });
    wiz.dispatch(WizardAction::AddFaq {
        question: "Where is my order?".into(),
        answer: "Check the tracking link in your email.".into(),
        category: Some("Orders".into()),
    });
    wiz.next(); // 6 languages
    wiz.dispatch(WizardAction::Toggle {
        collection: Collection::Languages,
        id: "de".into(),
    });
    wiz.next(); // 7 integrations
    wiz.dispatch(WizardAction::Toggle {
        collection: Collection::EcommerceTools,
        id: "shopify".into(),
    });
    wiz.dispatch(WizardAction::Toggle {
        collection: Collection::TicketingSystems,
        id: "zendesk".into(),
    });
    wiz.next(); // 8 finalize
    assert_eq!(wiz.current_step(), Some(WizardStep::Finalize));
    assert_eq!(wiz.next(), DispatchOutcome::Completed);

    let events = drain(&mut rx);
    let steps = events
        .iter()
        .filter(|e| matches!(e, WizardEvent::StepChanged { .. }))
        .count();
    assert_eq!(steps, 7);
    assert_eq!(cancellations(&events), 0);

    let done = completions(&events);
    assert_eq!(done.len(), 1);
    let data = done[0];
    assert_eq!(data.business_model.as_deref(), Some("ecommerce"));
    assert_eq!(data.team_size.as_deref(), Some("medium"));
    assert_eq!(data.request_volume.as_deref(), Some("high"));
    assert_eq!(data.objectives.as_slice(), ["reduce_ticket_volume"]);
    // human_handoff was on by default; the toggle turned it off.
    assert!(!data.features.contains("human_handoff"));
    assert!(data.features.contains("faq_answers"));
    assert_eq!(data.tone.as_deref(), Some("empathetic"));
    assert_eq!(data.faqs.len(), 2);
    assert_eq!(data.languages.as_slice(), ["en", "de"]);
    assert_eq!(data.ecommerce_tools.as_slice(), ["shopify"]);
    assert_eq!(data.ticketing_systems.as_slice(), ["zendesk"]);
    assert!(data.communication_channels.is_empty());
    assert!(data.missing_required().is_empty());

    // No mutation is possible once completed.
    assert_eq!(
        wiz.dispatch(WizardAction::Toggle {
            collection: Collection::Languages,
            id: "fr".into(),
        }),
        DispatchOutcome::Finished
    );
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn eight_advances_from_a_fresh_session_complete() {
    let (mut wiz, mut rx) = start(true);
    let outcomes: Vec<_> = (0..8).map(|_| wiz.next()).collect();
    assert!(
        outcomes[..7]
            .iter()
            .all(|o| *o == DispatchOutcome::Navigated)
    );
    assert_eq!(outcomes[7], DispatchOutcome::Completed);

    let events = drain(&mut rx);
    let done = completions(&events);
    assert_eq!(done.len(), 1);
    // Untouched session still carries the seeded defaults.
    assert_eq!(done[0].languages.as_slice(), ["en"]);
    assert_eq!(done[0].faqs.len(), 1);
}

#[test]
fn faq_ids_are_distinct() {
    let (mut wiz, _rx) = start(false);
    wiz.go_to(WizardStep::Identity.ordinal());
    for i in 0..25 {
        assert_eq!(
            wiz.dispatch(WizardAction::AddFaq {
                question: format!("Question {i}"),
                answer: "Same answer".into(),
                category: None,
            }),
            DispatchOutcome::Updated
        );
    }
    let faqs = &wiz.data().unwrap().faqs;
    let ids: HashSet<_> = faqs.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(faqs.len(), 25);
    assert_eq!(ids.len(), 25);
}

#[test]
fn blank_faq_input_is_ignored() {
    let (mut wiz, _rx) = start(false);
    wiz.go_to(WizardStep::Identity.ordinal());
    for (q, a) in [("", "anything"), ("anything", ""), ("   ", "   ")] {
        assert_eq!(
            wiz.dispatch(WizardAction::AddFaq {
                question: q.into(),
                answer: a.into(),
                category: None,
            }),
            DispatchOutcome::Ignored
        );
    }
    assert!(wiz.data().unwrap().faqs.is_empty());
}

#[test]
fn go_to_stays_in_bounds() {
    let (mut wiz, mut rx) = start(true);

    assert_eq!(wiz.go_to(0), DispatchOutcome::Ignored);
    assert_eq!(wiz.go_to(WizardStep::COUNT + 1), DispatchOutcome::Ignored);
    assert_eq!(wiz.current_step(), Some(WizardStep::Welcome));

    for step in WizardStep::ALL {
        assert_eq!(wiz.go_to(step.ordinal()), DispatchOutcome::Navigated);
        assert_eq!(wiz.current_step(), Some(step));
    }

    // Jumping never completes or cancels.
    let events = drain(&mut rx);
    assert!(completions(&events).is_empty());
    assert_eq!(cancellations(&events), 0);
    assert!(wiz.is_active());
}

#[test]
fn go_to_then_back_walks_down_one_step() {
    let (mut wiz, _rx) = start(true);
    wiz.go_to(6);
    wiz.back();
    assert_eq!(wiz.current_step(), Some(WizardStep::Identity));
    let view = wiz.view().unwrap();
    assert_eq!(view.ordinal, 5);
    assert_eq!(view.total, 8);
}

#[test]
fn completed_record_survives_json_and_keeps_the_cap() {
    let (mut wiz, mut rx) = start(true);
    wiz.go_to(WizardStep::Objectives.ordinal());
    wiz.dispatch(WizardAction::ToggleObjective {
        id: "qualify_leads".into(),
    });
    wiz.go_to(WizardStep::Finalize.ordinal());
    assert_eq!(wiz.next(), DispatchOutcome::Completed);

    let events = drain(&mut rx);
    let data = completions(&events)[0].clone();

    let json = serde_json::to_string(&data).unwrap();
    let mut restored: WizardData = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, data);

    for id in ["a", "b", "c", "d", "e"] {
        restored.objectives.toggle(id.into());
    }
    assert_eq!(restored.objectives.len(), 3);

    let mut blank = WizardData::default();
    for id in ["a", "b", "c", "d"] {
        blank.objectives.toggle(id.into());
    }
    assert_eq!(blank.objectives.len(), 3);
}

#[test]
fn zero_language_cap_still_seeds_english() {
    let options = SessionOptions {
        max_languages: Some(0),
        ..SessionOptions::default()
    };
    let (mut wiz, _rx) = WizardController::new(Arc::new(OptionCatalog::builtin()), options);
    assert_eq!(wiz.data().unwrap().languages.as_slice(), ["en"]);

    wiz.go_to(WizardStep::Finalize.ordinal());
    let view = wiz.view().unwrap();
    assert!(!view.missing.contains(&RequiredField::Languages));
}
