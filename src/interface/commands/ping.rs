//! # Ping Command
//!
//! Liveness check.

use crate::domain::types::CommandContext;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_ping(ctx: &CommandContext<'_>) -> Result<()> {
    ctx.reply(messages::PONG, false).await
}
