//! # Application Layer
//!
//! Contains the core logic of the bot: invocation parsing, the command
//! registry and the dispatcher.

pub mod dispatcher;
pub mod parsing;
pub mod registry;

#[cfg(test)]
pub mod testing;
