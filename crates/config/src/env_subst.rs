/// Expand `${ENV_VAR}` placeholders in a raw config document.
///
/// Placeholders naming unset variables are kept verbatim.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

/// Expand placeholders through `lookup` instead of the process environment.
fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    },
                }
                rest = &after[end + 1..];
            },
            Some(_) => {
                // `${}`
                out.push_str("${}");
                rest = &after[1..];
            },
            None => {
                // Unterminated, emit the remainder literally.
                out.push_str(&rest[start..]);
                rest = "";
            },
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "AGENTDESK_CATALOG" => Some("/etc/agentdesk/catalog.toml".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_var() {
        assert_eq!(
            substitute_env_with("path = \"${AGENTDESK_CATALOG}\"", lookup),
            "path = \"/etc/agentdesk/catalog.toml\""
        );
    }

    #[test]
    fn leaves_unknown_var() {
        assert_eq!(
            substitute_env_with("${AGENTDESK_NOPE_XYZ}", lookup),
            "${AGENTDESK_NOPE_XYZ}"
        );
    }

    #[test]
    fn empty_value_and_empty_name() {
        assert_eq!(substitute_env_with("a${EMPTY}b", lookup), "ab");
        assert_eq!(substitute_env_with("a${}b", lookup), "a${}b");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        assert_eq!(
            substitute_env_with("x = ${AGENTDESK_CATALOG", lookup),
            "x = ${AGENTDESK_CATALOG"
        );
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute_env("plain text"), "plain text");
    }
}
