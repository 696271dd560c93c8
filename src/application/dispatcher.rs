//! # Command Dispatcher
//!
//! Routes incoming interactions to the registered command handler.
//! Handler failures are caught here: they are logged and the invoker gets a
//! single generic ephemeral reply. Nothing is propagated to the event loop.

use crate::application::registry::CommandRegistry;
use crate::domain::traits::Interaction;
use crate::domain::types::{CommandContext, CommandSummary};
use crate::strings::logs;

/// What happened to a dispatched interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command interaction
    Ignored,
    /// No command with that name is registered
    UnknownCommand,
    Completed,
    /// The handler failed and the error reply was attempted
    Failed,
}

pub struct Dispatcher {
    registry: CommandRegistry,
    catalog: Vec<CommandSummary>,
    error_message: String,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry, error_message: impl Into<String>) -> Self {
        let catalog = registry.summaries();
        Self {
            registry,
            catalog,
            error_message: error_message.into(),
        }
    }

    pub async fn dispatch(&self, interaction: &dyn Interaction) -> DispatchOutcome {
        if !interaction.is_command() {
            return DispatchOutcome::Ignored;
        }

        let name = interaction.command_name();
        let Some(command) = self.registry.get(name) else {
            tracing::debug!("{}", logs::unknown_command(name, interaction.user()));
            return DispatchOutcome::UnknownCommand;
        };

        tracing::info!(
            "Dispatching cmd='{}' args='{}' user='{}' channel='{}'",
            name,
            interaction.args().join(" "),
            interaction.user(),
            interaction.channel_id()
        );

        let ctx = CommandContext::new(interaction, &self.catalog);
        match command.run(&ctx).await {
            Ok(()) => DispatchOutcome::Completed,
            Err(e) => {
                tracing::error!("{}", logs::command_failed(name, interaction.user(), &format!("{e:#}")));
                if let Err(reply_err) = interaction.reply(&self.error_message, true).await {
                    tracing::error!("{}", logs::error_reply_failed(name, &reply_err));
                }
                DispatchOutcome::Failed
            }
        }
    }
}
