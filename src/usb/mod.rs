//! USB Device subsystem - presents a HID keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. The device has a single HID interface:
//!
//! - Interface 0: Keyboard (boot protocol report layout)
//!
//! The payload writes reports through [`hid_device::UsbKeyboard`]; the
//! device task services enumeration and the endpoints in the background.

pub mod hid_device;
