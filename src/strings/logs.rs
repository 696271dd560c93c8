//! # Log Strings
//!
//! Format functions for log lines emitted through `tracing`.

pub fn config_loaded(user: &str) -> String {
    format!("Loaded configuration for user: {user}")
}

pub const READY: &str = "Ready!";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub fn command_loaded(name: &str, path: &str) -> String {
    format!("Loaded command '{name}' from {path}")
}

pub fn command_overridden(name: &str) -> String {
    format!("Command '{name}' registered twice; keeping the later definition")
}

pub fn registry_built(count: usize, dir: &str) -> String {
    format!("Registered {count} command(s) from {dir}")
}

pub fn no_commands(dir: &str) -> String {
    format!("No command definitions found in {dir}")
}

pub fn unknown_command(name: &str, user: &str) -> String {
    format!("Ignoring unknown command '{name}' from {user}")
}

pub fn command_failed(name: &str, user: &str, err: &str) -> String {
    format!("Command '{name}' invoked by {user} failed: {err}")
}

pub fn error_reply_failed(name: &str, err: &str) -> String {
    format!("Failed to send error reply for '{name}': {err}")
}
