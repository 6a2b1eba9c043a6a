//! Keystroke-macro firmware core for kirubd.
//!
//! Everything that does not touch hardware lives here so it can be
//! tested on the host (no embedded hardware required):
//!
//! - [`hid`] - key model, US layout, boot keyboard reports
//! - [`transport`] - the HID capability the macros drive
//! - [`timing`] - delay profile and the pause capability
//! - [`automation`] - key combinations and host shortcuts
//! - [`script`] - the payload itself
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod automation;
pub mod config;
pub mod error;
pub mod hid;
pub mod script;
pub mod timing;
pub mod transport;

pub use automation::Automator;
pub use error::Error;
pub use hid::Key;
pub use timing::{Pause, TimingProfile};
pub use transport::{HidTransport, ReportKeyboard, ReportSink};
