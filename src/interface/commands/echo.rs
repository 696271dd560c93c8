//! # Echo Command
//!
//! Repeats its arguments. Fails without arguments so the dispatcher's error
//! reply can be exercised from chat.

use crate::domain::types::CommandContext;
use anyhow::Result;

pub async fn handle_echo(ctx: &CommandContext<'_>) -> Result<()> {
    let args = ctx.interaction.args();
    if args.is_empty() {
        anyhow::bail!("echo called without arguments");
    }
    ctx.reply(&args.join(" "), false).await
}
