//! Unified error type for kirubd.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // USB
    /// USB stack returned an error while writing a report.
    Usb,

    // Payload
    /// Buffer too small for the requested operation.
    BufferOverflow,

    /// A shell command was requested with no statements in it.
    EmptyCommand,
}
