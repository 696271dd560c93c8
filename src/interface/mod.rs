//! # Interface Layer
//!
//! The user-facing command handlers that definition files point at.

pub mod commands;
