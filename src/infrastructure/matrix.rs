//! # Matrix Service Adapter
//!
//! Implements the `Interaction` trait for the Matrix protocol using `matrix_sdk`.
//! Room text messages that start with the configured prefix become command
//! interactions; everything else is handed to the dispatcher as a plain
//! message and ignored there.

use async_trait::async_trait;
use matrix_sdk::{
    Client,
    room::Room,
    ruma::{
        MilliSecondsSinceUnixEpoch, OwnedUserId, UserId,
        events::{
            Mentions,
            room::message::{MessageType, RoomMessageEventContent, SyncRoomMessageEvent},
        },
    },
};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::application::dispatcher::Dispatcher;
use crate::application::parsing::{Invocation, parse_invocation};
use crate::domain::traits::Interaction;
use crate::domain::types::ChannelInfo;
use crate::strings::messages;

#[derive(Clone)]
pub struct MatrixInteraction {
    room: Room,
    sender: OwnedUserId,
    invocation: Option<Invocation>,
}

impl MatrixInteraction {
    pub fn new(room: Room, sender: OwnedUserId, prefix: &str, body: &str) -> Self {
        Self {
            room,
            sender,
            invocation: parse_invocation(prefix, body),
        }
    }
}

#[async_trait]
impl Interaction for MatrixInteraction {
    fn is_command(&self) -> bool {
        self.invocation.is_some()
    }

    fn command_name(&self) -> &str {
        self.invocation.as_ref().map(|i| i.name.as_str()).unwrap_or("")
    }

    fn args(&self) -> &[String] {
        self.invocation
            .as_ref()
            .map(|i| i.args.as_slice())
            .unwrap_or(&[])
    }

    fn user(&self) -> &str {
        self.sender.as_str()
    }

    fn channel_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn channel_info(&self) -> Result<ChannelInfo, String> {
        // Unnamed rooms fall back to their ID
        let name = self.room.name().unwrap_or_else(|| self.channel_id());
        Ok(ChannelInfo {
            name,
            member_count: self.room.joined_members_count(),
        })
    }

    async fn reply(&self, content: &str, ephemeral: bool) -> Result<(), String> {
        tracing::info!("Bot replying in {} (ephemeral={}): {}", self.channel_id(), ephemeral, content);
        let message = if ephemeral {
            RoomMessageEventContent::notice_markdown(messages::ephemeral_notice(
                self.sender.as_str(),
                content,
            ))
            .add_mentions(Mentions::with_user_ids([self.sender.clone()]))
        } else {
            RoomMessageEventContent::text_markdown(content)
        };
        self.room
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Subscribes the dispatcher to room messages. Events from before `start_time`
/// and the bot's own messages are skipped.
pub fn register_dispatch(
    client: &Client,
    dispatcher: Arc<Dispatcher>,
    prefix: String,
    start_time: SystemTime,
) {
    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let dispatcher = dispatcher.clone();
        let prefix = prefix.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            if !should_dispatch(
                ev.origin_server_ts(),
                start_time,
                &original_msg.sender,
                room.own_user_id(),
            ) {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let interaction = MatrixInteraction::new(
                    room,
                    original_msg.sender.clone(),
                    &prefix,
                    &text_content.body,
                );
                let outcome = dispatcher.dispatch(&interaction).await;
                tracing::debug!("Dispatch outcome for {}: {:?}", original_msg.sender, outcome);
            }
        }
    });
}

/// Events from before `start_time` and the bot's own messages are not dispatched.
pub fn should_dispatch(
    event_ts: MilliSecondsSinceUnixEpoch,
    start_time: SystemTime,
    sender: &UserId,
    own: &UserId,
) -> bool {
    let event_time = UNIX_EPOCH + Duration::from_millis(event_ts.get().into());
    event_time >= start_time && sender != own
}
