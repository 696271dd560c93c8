//! # Domain Types
//!
//! Common data structures used across the application logic, including the
//! on-disk schema of command definition files.

use serde::Deserialize;

use crate::domain::traits::Interaction;

/// One command definition file (`*.yaml`, `*.yml` or `*.json`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub handler: HandlerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HandlerConfig {
    /// Static templated reply
    Reply {
        content: String,
        #[serde(default)]
        ephemeral: bool,
    },
    /// Compiled-in handler, looked up by name
    Builtin { name: String },
}

/// Name and description of a registered command, as shown by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub name: String,
    pub member_count: u64,
}

/// Everything a handler gets to see while running.
pub struct CommandContext<'a> {
    pub interaction: &'a dyn Interaction,
    pub catalog: &'a [CommandSummary],
}

impl<'a> CommandContext<'a> {
    pub fn new(interaction: &'a dyn Interaction, catalog: &'a [CommandSummary]) -> Self {
        Self {
            interaction,
            catalog,
        }
    }

    /// Reply through the interaction, turning the platform error into `anyhow`.
    pub async fn reply(&self, content: &str, ephemeral: bool) -> anyhow::Result<()> {
        self.interaction
            .reply(content, ephemeral)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_definition() {
        let yaml = r#"
name: ping
description: Replies with Pong!
handler:
  kind: reply
  content: "Pong!"
"#;
        let def: CommandDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(def.name, "ping");
        assert_eq!(
            def.handler,
            HandlerConfig::Reply {
                content: "Pong!".to_string(),
                ephemeral: false
            }
        );
    }

    #[test]
    fn test_parse_builtin_definition_json() {
        let json = r#"{"name": "server", "handler": {"kind": "builtin", "name": "server"}}"#;
        let def: CommandDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.description, "");
        assert_eq!(
            def.handler,
            HandlerConfig::Builtin {
                name: "server".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let yaml = "name: x\nhandler:\n  kind: script\n  path: x.js\n";
        assert!(serde_yaml::from_str::<CommandDefinition>(yaml).is_err());
    }
}
