//! # Reply Command
//!
//! Commands declared with `kind: reply`: a fixed template sent back to the
//! invoker with `{user}`, `{channel}`, `{command}` and `{args}` filled in.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::parsing::{TemplateVars, expand_template};
use crate::domain::traits::Command;
use crate::domain::types::CommandContext;

pub struct ReplyCommand {
    name: String,
    description: String,
    content: String,
    ephemeral: bool,
}

impl ReplyCommand {
    pub fn new(name: String, description: String, content: String, ephemeral: bool) -> Self {
        Self {
            name,
            description,
            content,
            ephemeral,
        }
    }
}

#[async_trait]
impl Command for ReplyCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn run(&self, ctx: &CommandContext<'_>) -> Result<()> {
        let interaction = ctx.interaction;
        let channel = interaction.channel_id();
        let vars = TemplateVars {
            user: interaction.user(),
            channel: &channel,
            command: interaction.command_name(),
            args: interaction.args(),
        };
        ctx.reply(&expand_template(&self.content, &vars), self.ephemeral)
            .await
    }
}
