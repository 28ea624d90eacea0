//! Library surface of the cronex CLI.
//!
//! The binary in `main.rs` only parses arguments and dispatches into
//! [`commands`]; everything testable lives here.

pub mod commands;
