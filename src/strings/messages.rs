//! # Messages
//!
//! Constant strings and format functions for user-facing replies.

use crate::domain::types::CommandSummary;

pub const PONG: &str = "Pong!";
pub const NO_COMMANDS: &str = "No commands are registered.";

pub fn server_info(name: &str, member_count: u64) -> String {
    format!("Server name: {name}\nTotal members: {member_count}")
}

pub fn user_info(user: &str, channel: &str) -> String {
    format!("Your username: {user}\nInvoked in: {channel}")
}

pub fn help_listing(catalog: &[CommandSummary]) -> String {
    if catalog.is_empty() {
        return NO_COMMANDS.to_string();
    }
    let mut out = String::from("**Commands**\n");
    for cmd in catalog {
        if cmd.description.is_empty() {
            out.push_str(&format!("* `{}`\n", cmd.name));
        } else {
            out.push_str(&format!("* `{}`: {}\n", cmd.name, cmd.description));
        }
    }
    out
}

/// Matrix has no ephemeral messages, so ephemeral replies mention the invoker
/// with a user pill.
pub fn ephemeral_notice(user: &str, content: &str) -> String {
    format!("[{user}](https://matrix.to/#/{user}): {content}")
}
