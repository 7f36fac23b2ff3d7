//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`blockfall_types::GameAction`]s.
//! Handling is synchronous: one key event produces at most one action,
//! applied immediately by the caller. There is no repeat or queuing layer.

pub mod map;

pub use map::{map_key_event, should_quit};
