//! US keyboard layout: ASCII byte to (usage code, needs Shift).
//!
//! The host decides what a usage code means, so text only comes out right
//! when the host layout is US. The payload flips the host layout with
//! Alt+Shift around anything symbol-heavy for that reason.

/// Map one ASCII byte to its usage code and whether Left Shift is needed.
///
/// Returns `None` for control bytes without a key and for non-ASCII.
pub fn ascii_to_usage(byte: u8) -> Option<(u8, bool)> {
    let mapped = match byte {
        b'a'..=b'z' => (byte - b'a' + 0x04, false),
        b'A'..=b'Z' => (byte - b'A' + 0x04, true),
        b'1'..=b'9' => (byte - b'1' + 0x1E, false),
        b'0' => (0x27, false),

        b'\n' => (0x28, false),
        0x1B => (0x29, false),
        0x08 => (0x2A, false),
        b'\t' => (0x2B, false),
        b' ' => (0x2C, false),

        b'!' => (0x1E, true),
        b'@' => (0x1F, true),
        b'#' => (0x20, true),
        b'$' => (0x21, true),
        b'%' => (0x22, true),
        b'^' => (0x23, true),
        b'&' => (0x24, true),
        b'*' => (0x25, true),
        b'(' => (0x26, true),
        b')' => (0x27, true),

        b'-' => (0x2D, false),
        b'_' => (0x2D, true),
        b'=' => (0x2E, false),
        b'+' => (0x2E, true),
        b'[' => (0x2F, false),
        b'{' => (0x2F, true),
        b']' => (0x30, false),
        b'}' => (0x30, true),
        b'\\' => (0x31, false),
        b'|' => (0x31, true),
        b';' => (0x33, false),
        b':' => (0x33, true),
        b'\'' => (0x34, false),
        b'"' => (0x34, true),
        b'`' => (0x35, false),
        b'~' => (0x35, true),
        b',' => (0x36, false),
        b'<' => (0x36, true),
        b'.' => (0x37, false),
        b'>' => (0x37, true),
        b'/' => (0x38, false),
        b'?' => (0x38, true),

        _ => return None,
    };
    Some(mapped)
}
