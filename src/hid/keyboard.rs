//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of non-modifier keys a boot report can carry at once.
pub const ROLLOVER: usize = 6;

/// One modifier bit in byte 0 of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Modifier {
    LeftCtrl = 0x01,
    LeftShift = 0x02,
    LeftAlt = 0x04,
    LeftGui = 0x08,
    RightCtrl = 0x10,
    RightShift = 0x20,
    RightAlt = 0x40,
    RightGui = 0x80,
}

impl Modifier {
    /// Mask of this modifier in the report's modifier byte.
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes, 0 = empty slot.
    pub keycodes: [u8; ROLLOVER],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; ROLLOVER],
        }
    }

    /// Add a usage code to the first free slot.
    ///
    /// Returns `false` only when all six slots are taken by other keys.
    /// A usage that is already held is left alone.
    pub fn press_usage(&mut self, usage: u8) -> bool {
        if usage == 0 || self.keycodes.contains(&usage) {
            return true;
        }
        match self.keycodes.iter_mut().find(|k| **k == 0) {
            Some(slot) => {
                *slot = usage;
                true
            }
            None => false,
        }
    }

    /// Remove a usage code, wherever it sits.
    pub fn release_usage(&mut self, usage: u8) {
        for slot in self.keycodes.iter_mut() {
            if *slot == usage {
                *slot = 0;
            }
        }
    }

    pub fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier |= modifier.bit();
    }

    pub fn clear_modifier(&mut self, modifier: Modifier) {
        self.modifier &= !modifier.bit();
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifier & modifier.bit() != 0
    }

    /// Release every key and modifier.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (0 if `buf` is too small).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}
