//! In-memory `Interaction` and `Command` doubles shared by the unit tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::traits::{Command, Interaction};
use crate::domain::types::{ChannelInfo, CommandContext};

pub struct MockInteraction {
    is_command: bool,
    name: String,
    args: Vec<String>,
    user: String,
    channel: String,
    fail_replies: bool,
    attempts: AtomicUsize,
    replies: Mutex<Vec<(String, bool)>>,
}

impl MockInteraction {
    pub fn command(name: &str, args: &[&str]) -> Self {
        Self {
            is_command: true,
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            user: "@alice:example.org".to_string(),
            channel: "!room:example.org".to_string(),
            fail_replies: false,
            attempts: AtomicUsize::new(0),
            replies: Mutex::new(Vec::new()),
        }
    }

    /// A plain chat message
    pub fn message() -> Self {
        Self {
            is_command: false,
            name: String::new(),
            ..Self::command("", &[])
        }
    }

    pub fn with_failing_replies(mut self) -> Self {
        self.fail_replies = true;
        self
    }

    pub fn replies(&self) -> Vec<(String, bool)> {
        self.replies.lock().unwrap().clone()
    }

    pub fn reply_attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Interaction for MockInteraction {
    fn is_command(&self) -> bool {
        self.is_command
    }

    fn command_name(&self) -> &str {
        &self.name
    }

    fn args(&self) -> &[String] {
        &self.args
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn channel_id(&self) -> String {
        self.channel.clone()
    }

    async fn channel_info(&self) -> Result<ChannelInfo, String> {
        Ok(ChannelInfo {
            name: "General".to_string(),
            member_count: 3,
        })
    }

    async fn reply(&self, content: &str, ephemeral: bool) -> Result<(), String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_replies {
            return Err("connection lost".to_string());
        }
        self.replies
            .lock()
            .unwrap()
            .push((content.to_string(), ephemeral));
        Ok(())
    }
}

/// Counts invocations and either succeeds silently or fails.
pub struct RecordingCommand {
    name: String,
    fail: bool,
    calls: AtomicUsize,
}

impl RecordingCommand {
    pub fn ok(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            fail: true,
            ..Self::ok(name)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Command for RecordingCommand {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, _ctx: &CommandContext<'_>) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("{} exploded", self.name);
        }
        Ok(())
    }
}
