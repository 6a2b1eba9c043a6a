//! Named keys used by the macros.
//!
//! Usage codes are from the HID Usage Tables, Keyboard/Keypad page (0x07).

use super::{Key, Modifier};

// Modifiers

pub const LEFT_CTRL: Key = Key::Modifier(Modifier::LeftCtrl);
pub const LEFT_SHIFT: Key = Key::Modifier(Modifier::LeftShift);
pub const LEFT_ALT: Key = Key::Modifier(Modifier::LeftAlt);
/// Meta / Windows / Command key.
pub const LEFT_GUI: Key = Key::Modifier(Modifier::LeftGui);
pub const RIGHT_CTRL: Key = Key::Modifier(Modifier::RightCtrl);
pub const RIGHT_SHIFT: Key = Key::Modifier(Modifier::RightShift);
pub const RIGHT_ALT: Key = Key::Modifier(Modifier::RightAlt);
pub const RIGHT_GUI: Key = Key::Modifier(Modifier::RightGui);

// Editing and navigation

pub const RETURN: Key = Key::Usage(0x28);
pub const ESC: Key = Key::Usage(0x29);
pub const BACKSPACE: Key = Key::Usage(0x2A);
pub const TAB: Key = Key::Usage(0x2B);
pub const SPACE: Key = Key::Usage(0x2C);
pub const CAPS_LOCK: Key = Key::Usage(0x39);
pub const INSERT: Key = Key::Usage(0x49);
pub const HOME: Key = Key::Usage(0x4A);
pub const PAGE_UP: Key = Key::Usage(0x4B);
pub const DELETE: Key = Key::Usage(0x4C);
pub const END: Key = Key::Usage(0x4D);
pub const PAGE_DOWN: Key = Key::Usage(0x4E);
pub const RIGHT_ARROW: Key = Key::Usage(0x4F);
pub const LEFT_ARROW: Key = Key::Usage(0x50);
pub const DOWN_ARROW: Key = Key::Usage(0x51);
pub const UP_ARROW: Key = Key::Usage(0x52);

// Function keys

pub const F1: Key = Key::Usage(0x3A);
pub const F2: Key = Key::Usage(0x3B);
pub const F3: Key = Key::Usage(0x3C);
pub const F4: Key = Key::Usage(0x3D);
pub const F5: Key = Key::Usage(0x3E);
pub const F6: Key = Key::Usage(0x3F);
pub const F7: Key = Key::Usage(0x40);
pub const F8: Key = Key::Usage(0x41);
pub const F9: Key = Key::Usage(0x42);
pub const F10: Key = Key::Usage(0x43);
pub const F11: Key = Key::Usage(0x44);
pub const F12: Key = Key::Usage(0x45);

// Screen capture

/// PrintScreen / SysRq.
pub const PRINT_SCREEN: Key = Key::Usage(0x46);
/// Some host/layout combinations only react to this code for PrintScreen,
/// so the screen capture macro taps both.
pub const PRINT_SCREEN_ALT: Key = Key::Usage(0x5D);
