//! Key model and boot keyboard reports.

pub mod keyboard;
pub mod keycodes;
pub mod layout;


pub use keyboard::{KeyboardReport, Modifier};

/// A key the firmware can press or release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Printable ASCII character, resolved through the US layout.
    /// Uppercase letters and shifted symbols carry Left Shift with them.
    Char(u8),
    /// Raw usage code from the HID Keyboard/Keypad page.
    Usage(u8),
    /// One of the eight modifier bits.
    Modifier(Modifier),
}

impl From<Modifier> for Key {
    fn from(m: Modifier) -> Self {
        Key::Modifier(m)
    }
}
