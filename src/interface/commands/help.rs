//! # Help Command
//!
//! Lists every registered command with its description.
//! The listing is sent as an ephemeral reply.

use crate::domain::types::CommandContext;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_help(ctx: &CommandContext<'_>) -> Result<()> {
    ctx.reply(&messages::help_listing(ctx.catalog), true).await
}
