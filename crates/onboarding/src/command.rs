//! Line commands understood by the terminal wizard.

use crate::{
    controller::WizardAction,
    data::{Collection, SingleChoice},
    error::{Context, Error, Result},
};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(WizardAction),
    Show,
    Help,
}

pub const HELP: &str = "\
Commands:
  next | n | <enter>           go to the next step (finishes on the last step)
  back | b                     go to the previous step (leaves on the first step)
  goto <1-8>                   jump to a step
  set <field> <id>             business_model, team_size, request_volume, tone
  toggle objectives <id>       pick or drop an objective (max 3)
  toggle <list> <id>           features, languages, communication_channels,
                               ticketing_systems, ecommerce_tools
  faq add <question> | <answer> [| <category>]
  faq rm <id>
  show                         redraw the current step
  cancel | quit | q            leave without saving
  help | ?                     this text";

/// Parse one line of operator input.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let action = match head.to_ascii_lowercase().as_str() {
        "" | "next" | "n" => WizardAction::Next,
        "back" | "b" => WizardAction::Back,
        "cancel" | "quit" | "q" => WizardAction::Cancel,
        "show" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "goto" | "g" => {
            let step = rest
                .parse::<usize>()
                .with_context(|| format!("not a step number: {rest:?}"))?;
            WizardAction::GoTo { step }
        },
        "set" => {
            let (key, id) = two_args(rest, "set <field> <id>")?;
            let field =
                SingleChoice::from_key(key).with_context(|| format!("unknown field: {key}"))?;
            WizardAction::SetChoice {
                field,
                id: id.to_string(),
            }
        },
        "toggle" | "t" => {
            let (key, id) = two_args(rest, "toggle <list> <id>")?;
            if key == "objectives" {
                WizardAction::ToggleObjective { id: id.to_string() }
            } else {
                let collection =
                    Collection::from_key(key).with_context(|| format!("unknown list: {key}"))?;
                WizardAction::Toggle {
                    collection,
                    id: id.to_string(),
                }
            }
        },
        "faq" => parse_faq(rest)?,
        other => return Err(Error::message(format!("unknown command: {other}"))),
    };
    Ok(Command::Action(action))
}

fn parse_faq(rest: &str) -> Result<WizardAction> {
    let (sub, body) = rest
        .split_once(char::is_whitespace)
        .map(|(s, b)| (s, b.trim()))
        .unwrap_or((rest, ""));
    match sub {
        "add" => {
            let mut parts = body.split('|').map(str::trim);
            let question = parts.next().unwrap_or_default();
            let answer = parts
                .next()
                .context("usage: faq add <question> | <answer>")?;
            let category = parts.next().filter(|c| !c.is_empty()).map(str::to_string);
            Ok(WizardAction::AddFaq {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
            })
        },
        "rm" | "remove" if !body.is_empty() => Ok(WizardAction::RemoveFaq {
            id: body.to_string(),
        }),
        _ => Err(Error::message("usage: faq add <question> | <answer> or faq rm <id>")),
    }
}

fn two_args<'a>(rest: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    rest.split_once(char::is_whitespace)
        .map(|(a, b)| (a, b.trim()))
        .filter(|(_, b)| !b.is_empty())
        .ok_or_else(|| Error::message(format!("usage: {usage}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case("", WizardAction::Next)]
    #[case("  next ", WizardAction::Next)]
    #[case("B", WizardAction::Back)]
    #[case("quit", WizardAction::Cancel)]
    #[case("goto 4", WizardAction::GoTo { step: 4 })]
    #[case("set tone friendly", WizardAction::SetChoice { field: SingleChoice::Tone, id: "friendly".into() })]
    #[case("toggle objectives qualify_leads", WizardAction::ToggleObjective { id: "qualify_leads".into() })]
    #[case("t ecommerce_tools shopify", WizardAction::Toggle { collection: Collection::EcommerceTools, id: "shopify".into() })]
    #[case("faq rm abc-123", WizardAction::RemoveFaq { id: "abc-123".into() })]
    fn parses_actions(#[case] line: &str, #[case] expected: WizardAction) {
        assert_eq!(parse(line).unwrap(), Command::Action(expected));
    }

    #[test]
    fn faq_add_with_and_without_category() {
        assert_eq!(
            parse("faq add Do you ship abroad? | Yes, to the EU. | Shipping").unwrap(),
            Command::Action(WizardAction::AddFaq {
                question: "Do you ship abroad?".into(),
                answer: "Yes, to the EU.".into(),
                category: Some("Shipping".into()),
            })
        );
        assert_eq!(
            parse("faq add Q | A").unwrap(),
            Command::Action(WizardAction::AddFaq {
                question: "Q".into(),
                answer: "A".into(),
                category: None,
            })
        );
    }

    #[rstest]
    #[case("dance")]
    #[case("goto three")]
    #[case("set colour blue")]
    #[case("set tone")]
    #[case("toggle notifications email")]
    #[case("faq add only a question")]
    #[case("faq rm")]
    fn rejects_bad_input(#[case] line: &str) {
        assert!(parse(line).is_err());
    }

    #[test]
    fn show_and_help() {
        assert_eq!(parse("show").unwrap(), Command::Show);
        assert_eq!(parse("?").unwrap(), Command::Help);
    }
}
