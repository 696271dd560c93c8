//! # Domain Traits
//!
//! Abstract interfaces for the inbound event contract (`Interaction`) and for
//! command handlers (`Command`). The Matrix adapter and the built-in handlers
//! plug in behind these.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::types::{ChannelInfo, CommandContext};

/// An inbound event representing a user (possibly) invoking a command.
#[async_trait]
pub trait Interaction: Send + Sync {
    /// Whether this event is a command invocation at all
    fn is_command(&self) -> bool;

    /// Name of the invoked command. Empty when `is_command` is false.
    fn command_name(&self) -> &str;

    /// Arguments following the command name
    fn args(&self) -> &[String];

    /// ID of the invoking user
    fn user(&self) -> &str;

    /// ID of the channel (room) the event arrived in
    fn channel_id(&self) -> String;

    /// Display name and member count of the channel
    async fn channel_info(&self) -> Result<ChannelInfo, String>;

    /// Reply to the invoker. Ephemeral replies are meant for the invoker only.
    async fn reply(&self, content: &str, ephemeral: bool) -> Result<(), String>;
}

/// A registered, user-invocable command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    async fn run(&self, ctx: &CommandContext<'_>) -> Result<()>;
}
