//! Macro layer - keystroke combinations and host shortcuts.
//!
//! An [`Automator`] owns the HID transport, something that can pause, and
//! the [`TimingProfile`]. Every helper is a fixed recipe of press /
//! release / print calls with a delay after each event.
//!
//! Combinations always end with a release-all, so no modifier stays held
//! into the next step regardless of how many were pressed.

pub mod shell;
mod windows;

#[cfg(test)]
mod tests;

use crate::hid::{keycodes, Key};
use crate::timing::{Pause, TimingProfile};
use crate::transport::HidTransport;

/// Drives a [`HidTransport`] with fixed delays between events.
pub struct Automator<T, P> {
    transport: T,
    pause: P,
    timing: TimingProfile,
}

impl<T: HidTransport, P: Pause> Automator<T, P> {
    pub fn new(transport: T, pause: P, timing: TimingProfile) -> Self {
        Self {
            transport,
            pause,
            timing,
        }
    }

    pub fn timing(&self) -> &TimingProfile {
        &self.timing
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    pub fn into_parts(self) -> (T, P) {
        (self.transport, self.pause)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Timing
    // ═══════════════════════════════════════════════════════════════════

    /// Enough for the host to process one HID event.
    pub async fn short_delay(&mut self) {
        self.pause.pause_ms(self.timing.short_ms).await;
    }

    /// For slower UI transitions such as a dialog appearing.
    pub async fn long_delay(&mut self) {
        self.pause.pause_ms(self.timing.long_ms()).await;
    }

    pub async fn long_delays(&mut self, count: u32) {
        for _ in 0..count {
            self.long_delay().await;
        }
    }

    /// Fixed pause outside the profile, used by the payload script.
    pub async fn sleep_ms(&mut self, ms: u32) {
        self.pause.pause_ms(ms).await;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Session
    // ═══════════════════════════════════════════════════════════════════

    /// Bring up the virtual keyboard. First call of any script.
    pub async fn start(&mut self) {
        info!("Keyboard session start");
        self.transport.begin().await;
        self.long_delay().await;
    }

    /// Tear down the virtual keyboard. Last call of any script.
    pub async fn finish(&mut self) {
        self.transport.end().await;
        info!("Keyboard session end");
    }

    // ═══════════════════════════════════════════════════════════════════
    // Composition
    // ═══════════════════════════════════════════════════════════════════

    /// Hold each of `holds` in order, tap `target`, then release everything.
    pub async fn combination(&mut self, holds: &[Key], target: Key) {
        debug!("Combination: {} held, target {}", holds.len(), target);
        for &key in holds {
            self.transport.press(key).await;
            self.short_delay().await;
        }
        self.transport.press(target).await;
        self.short_delay().await;
        self.transport.release_all().await;
        self.short_delay().await;
    }

    /// Meta / OS key + `target`.
    pub async fn gui_combination(&mut self, target: Key) {
        self.combination(&[keycodes::LEFT_GUI], target).await;
    }

    pub async fn alt_combination(&mut self, target: Key) {
        self.combination(&[keycodes::LEFT_ALT], target).await;
    }

    pub async fn ctrl_combination(&mut self, target: Key) {
        self.combination(&[keycodes::LEFT_CTRL], target).await;
    }

    pub async fn shift_combination(&mut self, target: Key) {
        self.combination(&[keycodes::LEFT_SHIFT], target).await;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Emission
    // ═══════════════════════════════════════════════════════════════════

    /// Type `text` as-is; `\n` comes out as Enter.
    pub async fn write_text(&mut self, text: &str) {
        self.transport.print(text).await;
        self.short_delay().await;
    }

    /// Tap a single key that is not part of a combination.
    pub async fn type_key(&mut self, key: Key) {
        self.transport.press(key).await;
        self.short_delay().await;
        self.transport.release(key).await;
        self.short_delay().await;
    }

    /// Hold `key` for `longs` long delays, leaning on host auto-repeat.
    pub async fn hold_key(&mut self, key: Key, longs: u32) {
        self.transport.press(key).await;
        self.long_delays(longs).await;
        self.transport.release(key).await;
    }
}
