//! Fixed delays between HID events.
//!
//! Simulated keystrokes race the host's input loop; a pause after each
//! event keeps them from being dropped or reordered. Nothing measures
//! whether a pause was long enough, the values are tuned by hand.

use crate::config;

/// Delays handed to the macro layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingProfile {
    /// Pause after a single HID event (ms).
    pub short_ms: u32,
    /// A long delay is `long_factor` short delays.
    pub long_factor: u32,
    /// Long delays to hold Down while dragging a window away.
    pub window_drag_longs: u32,
    /// Long delays to wait for a download to finish on the host.
    pub download_wait_longs: u32,
}

impl TimingProfile {
    pub const fn new(short_ms: u32) -> Self {
        Self {
            short_ms,
            long_factor: config::LONG_DELAY_FACTOR,
            window_drag_longs: config::WINDOW_DRAG_LONG_DELAYS,
            download_wait_longs: config::DOWNLOAD_WAIT_LONG_DELAYS,
        }
    }

    pub const fn long_ms(&self) -> u32 {
        self.short_ms.saturating_mul(self.long_factor)
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::new(config::SHORT_DELAY_MS)
    }
}

/// Blocking wait, as far as the caller is concerned.
#[allow(async_fn_in_trait)]
pub trait Pause {
    async fn pause_ms(&mut self, ms: u32);
}
