//! HID transport capability.
//!
//! [`HidTransport`] is what the macro layer drives: key down, key up,
//! release everything, type a string. Nothing comes back from the host,
//! so none of the calls return a result.
//!
//! [`ReportKeyboard`] is the implementation used on the device. It keeps
//! the current boot report and pushes it through a [`ReportSink`] after
//! every change.

use crate::error::Error;
use crate::hid::keyboard::KEYBOARD_REPORT_SIZE;
use crate::hid::layout::ascii_to_usage;
use crate::hid::{Key, KeyboardReport, Modifier};

/// Simulated keyboard as seen by the macros.
#[allow(async_fn_in_trait)]
pub trait HidTransport {
    /// Open the keyboard session.
    async fn begin(&mut self);
    /// Close the keyboard session.
    async fn end(&mut self);
    async fn press(&mut self, key: Key);
    async fn release(&mut self, key: Key);
    async fn release_all(&mut self);
    /// Type `text` literally. Control characters go through as-is.
    async fn print(&mut self, text: &str);
}

/// Destination for serialized keyboard input reports.
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    async fn send(&mut self, report: &[u8]) -> Result<(), Error>;
}

/// [`HidTransport`] that emits boot keyboard reports.
pub struct ReportKeyboard<S> {
    sink: S,
    report: KeyboardReport,
    /// Left Shift is down only because a [`Key::Char`] press needed it.
    char_shift: bool,
}

impl<S: ReportSink> ReportKeyboard<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            report: KeyboardReport::empty(),
            char_shift: false,
        }
    }

    /// Report as last sent to the host.
    pub fn report(&self) -> &KeyboardReport {
        &self.report
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn clear(&mut self) {
        self.report.clear();
        self.char_shift = false;
    }

    async fn flush(&mut self) {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        let n = self.report.serialize(&mut buf);
        if self.sink.send(&buf[..n]).await.is_err() {
            warn!("USB keyboard write failed");
        }
    }

    /// Apply a key-down to the report. Returns `false` if nothing changed
    /// that is worth sending.
    fn apply_press(&mut self, key: Key) -> bool {
        match key {
            Key::Modifier(m) => {
                if m == Modifier::LeftShift {
                    self.char_shift = false;
                }
                self.report.set_modifier(m);
                true
            }
            Key::Usage(usage) => self.add_usage(usage),
            Key::Char(c) => match ascii_to_usage(c) {
                Some((usage, shift)) => {
                    if !self.add_usage(usage) {
                        return false;
                    }
                    if shift && !self.report.has_modifier(Modifier::LeftShift) {
                        self.report.set_modifier(Modifier::LeftShift);
                        self.char_shift = true;
                    }
                    true
                }
                None => {
                    warn!("No key for character {=u8:#x}", c);
                    false
                }
            },
        }
    }

    fn apply_release(&mut self, key: Key) {
        match key {
            Key::Modifier(m) => {
                if m == Modifier::LeftShift {
                    self.char_shift = false;
                }
                self.report.clear_modifier(m);
            }
            Key::Usage(usage) => self.report.release_usage(usage),
            Key::Char(c) => {
                if let Some((usage, shift)) = ascii_to_usage(c) {
                    // A Shift held on its own outlives the character.
                    if shift && self.char_shift {
                        self.report.clear_modifier(Modifier::LeftShift);
                        self.char_shift = false;
                    }
                    self.report.release_usage(usage);
                }
            }
        }
    }

    fn add_usage(&mut self, usage: u8) -> bool {
        if self.report.press_usage(usage) {
            true
        } else {
            warn!("Rollover full, dropping usage {=u8:#x}", usage);
            false
        }
    }

    async fn type_char(&mut self, c: char) {
        let Some((usage, shift)) = u8::try_from(c).ok().and_then(ascii_to_usage) else {
            warn!("Skipping character without a US key: {=u32:#x}", c as u32);
            return;
        };
        if self.report.keycodes.contains(&usage) {
            warn!("Skipping character, key {=u8:#x} already held", usage);
            return;
        }

        let held = self.report;
        if shift {
            self.report.set_modifier(Modifier::LeftShift);
        }
        if !self.add_usage(usage) {
            self.report = held;
            return;
        }
        self.flush().await;

        self.report = held;
        self.flush().await;
    }
}

impl<S: ReportSink> HidTransport for ReportKeyboard<S> {
    async fn begin(&mut self) {
        self.clear();
        self.flush().await;
    }

    async fn end(&mut self) {
        self.clear();
        self.flush().await;
    }

    async fn press(&mut self, key: Key) {
        if self.apply_press(key) {
            self.flush().await;
        }
    }

    async fn release(&mut self, key: Key) {
        self.apply_release(key);
        self.flush().await;
    }

    async fn release_all(&mut self) {
        self.clear();
        self.flush().await;
    }

    async fn print(&mut self, text: &str) {
        for c in text.chars() {
            self.type_char(c).await;
        }
    }
}
