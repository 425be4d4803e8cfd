//! Terminal-based setup wizard using the shared controller.

use std::{
    fmt::Write as _,
    io::{BufRead, Write},
    sync::Arc,
};

use {agentdesk_catalog::OptionCatalog, tracing::debug};

use crate::{
    aggregator::SessionOptions,
    command::{self, Command},
    controller::{StepView, WizardController, WizardEvent},
    data::WizardData,
};

/// Run the interactive wizard on stdin/stdout.
///
/// Returns the finished configuration, or `None` if the operator left.
pub fn run_onboarding(
    catalog: Arc<OptionCatalog>,
    options: SessionOptions,
) -> anyhow::Result<Option<WizardData>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(catalog, options, stdin.lock(), stdout.lock())
}

/// Drive a session from any line reader. End of input cancels.
pub fn run_session<R: BufRead, W: Write>(
    catalog: Arc<OptionCatalog>,
    options: SessionOptions,
    mut reader: R,
    mut out: W,
) -> anyhow::Result<Option<WizardData>> {
    let (mut wizard, mut events) = WizardController::new(catalog, options);
    let mut redraw = true;

    loop {
        if redraw && let Some(view) = wizard.view() {
            write!(out, "{}", render_view(&view))?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        redraw = false;
        if reader.read_line(&mut line)? == 0 {
            debug!("input closed, cancelling wizard");
            wizard.cancel();
        } else {
            match command::parse(&line) {
                Ok(Command::Action(action)) => {
                    let outcome = wizard.dispatch(action);
                    debug!(?outcome, "dispatched");
                    redraw = true;
                },
                Ok(Command::Show) => redraw = true,
                Ok(Command::Help) => writeln!(out, "{}", command::HELP)?,
                Err(e) => writeln!(out, "{e} (type 'help')")?,
            }
        }

        while let Ok(event) = events.try_recv() {
            match event {
                WizardEvent::StepChanged { .. } => {},
                WizardEvent::Completed(data) => {
                    writeln!(out, "Setup complete!")?;
                    return Ok(Some(data));
                },
                WizardEvent::Cancelled => {
                    writeln!(out, "Setup cancelled.")?;
                    return Ok(None);
                },
            }
        }
        if !wizard.is_active() {
            return Ok(None);
        }
    }
}

/// Plain-text rendering of a step.
pub fn render_view(view: &StepView) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "\n[{}/{}] {} ({}%)\n{}",
        view.ordinal, view.total, view.title, view.progress, view.subtitle
    );

    for section in &view.sections {
        let kind = match (section.multiple, section.max) {
            (false, _) => "pick one".to_string(),
            (true, Some(max)) => format!("pick up to {max}"),
            (true, None) => "pick any".to_string(),
        };
        let _ = writeln!(s, "\n  {} ({kind}, key: {})", section.label, section.list);
        for opt in &section.options {
            let mark = match (opt.selected, opt.enabled) {
                (true, _) => "[x]",
                (false, true) => "[ ]",
                (false, false) => "[-]",
            };
            let _ = writeln!(s, "    {mark} {:<24} {}", opt.id, opt.label);
        }
    }

    if !view.faqs.is_empty() {
        let _ = writeln!(s, "\n  FAQ");
        for faq in &view.faqs {
            let category = faq.category.as_deref().unwrap_or("-");
            let _ = writeln!(
                s,
                "    {} [{category}]\n      Q: {}\n      A: {}",
                faq.id, faq.question, faq.answer
            );
        }
    }

    if let Some(summary) = view.summary {
        let _ = writeln!(
            s,
            "\n  {} objective(s), {} feature(s), {} FAQ(s), {} language(s), {} integration(s)",
            summary.objectives,
            summary.features,
            summary.faqs,
            summary.languages,
            summary.integrations
        );
    }

    if !view.missing.is_empty() {
        let fields: Vec<_> = view.missing.iter().map(|f| f.label()).collect();
        let _ = writeln!(s, "\n  Still to answer: {}", fields.join(", "));
    }
    s
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Option<WizardData>, String) {
        let mut out = Vec::new();
        let data = run_session(
            Arc::new(OptionCatalog::builtin()),
            SessionOptions::default(),
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        (data, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_session_completes() {
        let script = "\
next
set business_model saas
set team_size small
set request_volume moderate
next
toggle objectives qualify_leads
next
toggle features order_tracking
next
set tone friendly
faq add Do you ship abroad? | Yes. | Shipping
next
toggle languages fr
next
toggle communication_channels slack
next
next
";
        let (data, out) = run(script);
        let data = data.unwrap();
        assert_eq!(data.business_model.as_deref(), Some("saas"));
        assert_eq!(data.objectives.as_slice(), ["qualify_leads"]);
        assert!(data.features.contains("order_tracking"));
        assert_eq!(data.tone.as_deref(), Some("friendly"));
        assert_eq!(data.faqs.len(), 2);
        assert_eq!(data.languages.as_slice(), ["en", "fr"]);
        assert_eq!(data.communication_channels.as_slice(), ["slack"]);
        assert!(data.missing_required().is_empty());
        assert!(out.contains("Setup complete!"));
        assert!(out.contains("[8/8] Review"));
    }

    #[test]
    fn end_of_input_cancels() {
        let (data, out) = run("next\n");
        assert!(data.is_none());
        assert!(out.contains("Setup cancelled."));
    }

    #[test]
    fn bad_command_is_reported() {
        let (data, out) = run("dance\nq\n");
        assert!(data.is_none());
        assert!(out.contains("unknown command: dance"));
    }

    #[test]
    fn render_marks_disabled_options() {
        let (mut wiz, _rx) =
            WizardController::new(Arc::new(OptionCatalog::builtin()), SessionOptions::default());
        wiz.go_to(3);
        for id in ["reduce_response_time", "always_available", "qualify_leads"] {
            wiz.dispatch(crate::WizardAction::ToggleObjective { id: id.into() });
        }
        let text = render_view(&wiz.view().unwrap());
        assert!(text.contains("pick up to 3"));
        assert!(text.contains("[x] qualify_leads"));
        assert!(text.contains("[-] grow_community"));
    }
}
