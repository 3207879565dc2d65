//! Media player control.
//!
//! # Data Flow
//! ```text
//! chord / subcommand
//!     → commands.rs (HOTKEY_BINDINGS → PlayerCommand)
//!     → client.rs (GET status.xml?command=..&val=.., Basic auth, 2s timeout)
//! ```

pub mod client;
pub mod commands;

pub use client::{ControlClient, ControlError};
pub use commands::{find_binding, HotkeyAction, HotkeyBinding, PlayerCommand, HOTKEY_BINDINGS};
