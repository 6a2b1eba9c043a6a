//! Application-wide constants and compile-time configuration.
//!
//! Timing parameters, USB identity and payload limits live here so they
//! can be tuned in one place. Delays are empirical: if keystrokes get
//! dropped on a slow host, raise `SHORT_DELAY_MS` first.

// Timing

/// Pause after each HID event so the host can process it (ms).
pub const SHORT_DELAY_MS: u32 = 150;

/// A long delay is this many short delays.
pub const LONG_DELAY_FACTOR: u32 = 5;

/// Long delays spent holding Down while dragging a window off-screen.
/// Not every auto-repeated stroke lands, so this is generous.
pub const WINDOW_DRAG_LONG_DELAYS: u32 = 10;

/// Long delays to wait for the wallpaper download and Paint to open.
/// Depends on the host's network speed.
pub const DOWNLOAD_WAIT_LONG_DELAYS: u32 = 6;

// Payload

/// Longest command we will type into the Run dialog (Windows caps it at 259).
pub const MAX_COMMAND_LEN: usize = 256;

/// Program the shell helper prefixes statements with.
pub const SHELL_RUNNER: &str = "powershell";

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "kirubd";
pub const USB_PRODUCT: &str = "USB Keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Current drawn from the bus (mA).
pub const USB_MAX_POWER_MA: u16 = 100;
