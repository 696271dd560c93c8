//! # Server Command
//!
//! Reports the name and member count of the room the command was invoked in.

use crate::domain::types::CommandContext;
use crate::strings::messages;
use anyhow::{Context, Result};

pub async fn handle_server(ctx: &CommandContext<'_>) -> Result<()> {
    let info = ctx
        .interaction
        .channel_info()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to fetch room info")?;
    ctx.reply(&messages::server_info(&info.name, info.member_count), false)
        .await
}
