//! # Command Handlers
//!
//! Builds runnable commands from definition files. `reply` definitions become
//! templated replies; `builtin` definitions select one of the compiled-in
//! handlers below.

pub mod echo;
pub mod help;
pub mod ping;
pub mod reply;
pub mod server;
pub mod user_info;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::traits::Command;
use crate::domain::types::{CommandContext, CommandDefinition, HandlerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Ping,
    Server,
    UserInfo,
    Echo,
    Help,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Ping,
        Builtin::Server,
        Builtin::UserInfo,
        Builtin::Echo,
        Builtin::Help,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ping" => Some(Builtin::Ping),
            "server" => Some(Builtin::Server),
            "user-info" | "user_info" => Some(Builtin::UserInfo),
            "echo" => Some(Builtin::Echo),
            "help" => Some(Builtin::Help),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Builtin::Ping => "ping",
            Builtin::Server => "server",
            Builtin::UserInfo => "user-info",
            Builtin::Echo => "echo",
            Builtin::Help => "help",
        }
    }
}

/// A definition bound to a compiled-in handler.
pub struct BuiltinCommand {
    name: String,
    description: String,
    builtin: Builtin,
}

#[async_trait]
impl Command for BuiltinCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, ctx: &CommandContext<'_>) -> Result<()> {
        match self.builtin {
            Builtin::Ping => ping::handle_ping(ctx).await,
            Builtin::Server => server::handle_server(ctx).await,
            Builtin::UserInfo => user_info::handle_user_info(ctx).await,
            Builtin::Echo => echo::handle_echo(ctx).await,
            Builtin::Help => help::handle_help(ctx).await,
        }
    }
}

/// Turns a parsed definition into a registrable command.
pub fn build(definition: CommandDefinition) -> Result<Arc<dyn Command>> {
    let CommandDefinition {
        name,
        description,
        handler,
    } = definition;

    let command: Arc<dyn Command> = match handler {
        HandlerConfig::Reply { content, ephemeral } => Arc::new(reply::ReplyCommand::new(
            name,
            description,
            content,
            ephemeral,
        )),
        HandlerConfig::Builtin { name: builtin } => {
            let Some(kind) = Builtin::from_str(&builtin) else {
                let known: Vec<&str> = Builtin::ALL.iter().map(Builtin::as_str).collect();
                anyhow::bail!(
                    "Unknown builtin handler '{}' (known: {})",
                    builtin,
                    known.join(", ")
                );
            };
            Arc::new(BuiltinCommand {
                name,
                description,
                builtin: kind,
            })
        }
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockInteraction;

    #[test]
    fn test_builtin_from_str() {
        assert_eq!(Builtin::from_str("ping"), Some(Builtin::Ping));
        assert_eq!(Builtin::from_str("SERVER"), Some(Builtin::Server));
        assert_eq!(Builtin::from_str("user-info"), Some(Builtin::UserInfo));
        assert_eq!(Builtin::from_str("user_info"), Some(Builtin::UserInfo));
        assert_eq!(Builtin::from_str("echo"), Some(Builtin::Echo));
        assert_eq!(Builtin::from_str("help"), Some(Builtin::Help));
        assert_eq!(Builtin::from_str("kick"), None);
    }

    #[test]
    fn test_builtin_as_str() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_str(builtin.as_str()), Some(builtin));
        }
    }

    #[tokio::test]
    async fn test_builtin_alias_keeps_definition_name() {
        let command = build(CommandDefinition {
            name: "latency".to_string(),
            description: "Ping alias".to_string(),
            handler: HandlerConfig::Builtin {
                name: "ping".to_string(),
            },
        })
        .unwrap();
        assert_eq!(command.name(), "latency");
        assert_eq!(command.description(), "Ping alias");

        let interaction = MockInteraction::command("latency", &[]);
        let ctx = CommandContext::new(&interaction, &[]);
        command.run(&ctx).await.unwrap();
        assert_eq!(interaction.replies(), vec![("Pong!".to_string(), false)]);
    }

    #[test]
    fn test_unknown_builtin_lists_known() {
        let err = build(CommandDefinition {
            name: "x".to_string(),
            description: String::new(),
            handler: HandlerConfig::Builtin {
                name: "nuke".to_string(),
            },
        })
        .err()
        .unwrap();
        let msg = err.to_string();
        assert!(msg.contains("nuke"));
        assert!(msg.contains("user-info"));
    }
}
