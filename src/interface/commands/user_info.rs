//! # User Info Command

use crate::domain::types::CommandContext;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_user_info(ctx: &CommandContext<'_>) -> Result<()> {
    let interaction = ctx.interaction;
    ctx.reply(
        &messages::user_info(interaction.user(), &interaction.channel_id()),
        false,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MockInteraction;

    #[tokio::test]
    async fn test_user_info_names_invoker() {
        let interaction = MockInteraction::command("user-info", &[]);
        let ctx = CommandContext::new(&interaction, &[]);
        handle_user_info(&ctx).await.unwrap();
        let replies = interaction.replies();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].0.contains("@alice:example.org"));
    }
}
