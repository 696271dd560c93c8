//! # Parsing Utils
//!
//! Turns raw message bodies into command invocations, validates command names
//! and expands the placeholders used by `reply` handlers.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]{1,32}$").expect("valid name regex"));

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(user|channel|command|args)\}").expect("valid placeholder regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Parses `<prefix><name> [args...]`. Returns `None` for anything that is not
/// a command, including a bare prefix.
pub fn parse_invocation(prefix: &str, body: &str) -> Option<Invocation> {
    let rest = body.trim().strip_prefix(prefix)?;
    let mut tokens = rest.split_whitespace();

    // "/ ping" is not a command
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(Invocation { name, args })
}

pub fn is_valid_command_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Values substituted into reply templates.
#[derive(Debug, Default)]
pub struct TemplateVars<'a> {
    pub user: &'a str,
    pub channel: &'a str,
    pub command: &'a str,
    pub args: &'a [String],
}

/// Replaces `{user}`, `{channel}`, `{command}` and `{args}`. Other braces are
/// left untouched.
pub fn expand_template(template: &str, vars: &TemplateVars<'_>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "user" => vars.user.to_string(),
            "channel" => vars.channel.to_string(),
            "command" => vars.command.to_string(),
            _ => vars.args.join(" "),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_command() {
        let inv = parse_invocation("/", "/ping").unwrap();
        assert_eq!(inv.name, "ping");
        assert!(inv.args.is_empty());
    }

    #[test]
    fn test_parse_lowercases_and_splits_args() {
        let inv = parse_invocation("/", "  /Echo  hello   world ").unwrap();
        assert_eq!(inv.name, "echo");
        assert_eq!(inv.args, vec!["hello", "world"]);
    }

    #[test]
    fn test_parse_multichar_prefix() {
        let inv = parse_invocation("!!", "!!user-info").unwrap();
        assert_eq!(inv.name, "user-info");
        assert!(parse_invocation("!!", "!user-info").is_none());
    }

    #[test]
    fn test_non_commands() {
        assert!(parse_invocation("/", "hello there").is_none());
        assert!(parse_invocation("/", "/").is_none());
        assert!(parse_invocation("/", "/   ").is_none());
        assert!(parse_invocation("/", "/ ping").is_none());
        assert!(parse_invocation("/", "").is_none());
    }

    #[test]
    fn test_command_name_validation() {
        assert!(is_valid_command_name("ping"));
        assert!(is_valid_command_name("user-info"));
        assert!(is_valid_command_name("a_b9"));
        assert!(!is_valid_command_name(""));
        assert!(!is_valid_command_name("Ping"));
        assert!(!is_valid_command_name("two words"));
        assert!(!is_valid_command_name(&"x".repeat(33)));
    }

    #[test]
    fn test_expand_template() {
        let args = vec!["a".to_string(), "b".to_string()];
        let vars = TemplateVars {
            user: "@alice:example.org",
            channel: "!room:example.org",
            command: "greet",
            args: &args,
        };
        assert_eq!(
            expand_template("Hi {user} in {channel}: /{command} {args} {other}", &vars),
            "Hi @alice:example.org in !room:example.org: /greet a b {other}"
        );
    }
}
