//! kirubd firmware entry point.
//!
//! Enumerates as a USB keyboard, waits for the host to configure it, types
//! the payload once and then idles until the next reset.

#![no_std]
#![no_main]

mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::pac;
use embassy_time::Timer;
use embassy_usb::UsbDevice;
use kirubd::{script, Automator, Pause, ReportKeyboard, TimingProfile};
use usb::hid_device::{self, UsbDriver};
use {defmt_rtt as _, panic_probe as _};

/// [`Pause`] backed by the RTC time driver.
struct TimerPause;

impl Pause for TimerPause {
    async fn pause_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("kirubd starting");

    // USBD needs the external high-frequency oscillator.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    let usb = hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(usb.device)));

    hid_device::wait_configured().await;
    info!("Host configured the keyboard, running payload");

    let mut auto = Automator::new(
        ReportKeyboard::new(usb.keyboard),
        TimerPause,
        TimingProfile::default(),
    );
    script::run(&mut auto).await;

    info!("Idle");
    core::future::pending::<()>().await;
}
