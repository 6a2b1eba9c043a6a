//! Unit tests for the macro layer.
//!
//! A recording transport captures the ordered press / release / print
//! calls and tracks which keys it currently considers held. Timing is
//! recorded separately so tests check ordering, not wall-clock time.

use super::Automator;
use crate::error::Error;
use crate::hid::{keycodes, Key};
use crate::timing::{Pause, TimingProfile};
use crate::transport::HidTransport;
use embassy_futures::block_on;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Begin,
    End,
    Press(Key),
    Release(Key),
    ReleaseAll,
    Print(String),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    held: Vec<Key>,
}

impl HidTransport for Recorder {
    async fn begin(&mut self) {
        self.events.push(Event::Begin);
    }

    async fn end(&mut self) {
        self.events.push(Event::End);
        self.held.clear();
    }

    async fn press(&mut self, key: Key) {
        self.events.push(Event::Press(key));
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    async fn release(&mut self, key: Key) {
        self.events.push(Event::Release(key));
        self.held.retain(|k| *k != key);
    }

    async fn release_all(&mut self) {
        self.events.push(Event::ReleaseAll);
        self.held.clear();
    }

    async fn print(&mut self, text: &str) {
        self.events.push(Event::Print(text.to_string()));
    }
}

#[derive(Default)]
struct Clock {
    pauses: Vec<u32>,
}

impl Pause for Clock {
    async fn pause_ms(&mut self, ms: u32) {
        self.pauses.push(ms);
    }
}

fn automator() -> Automator<Recorder, Clock> {
    Automator::new(Recorder::default(), Clock::default(), TimingProfile::new(10))
}

fn events(a: &Automator<Recorder, Clock>) -> &[Event] {
    &a.transport().events
}

fn assert_released(a: &Automator<Recorder, Clock>) {
    assert!(
        a.transport().held.is_empty(),
        "keys still held: {:?}",
        a.transport().held
    );
}

fn print(s: &str) -> Event {
    Event::Print(s.to_string())
}

// ════════════════════════════════════════════════════════════════════════
// Timing
// ════════════════════════════════════════════════════════════════════════

#[test]
fn short_and_long_delay_durations() {
    let mut a = automator();
    block_on(async {
        a.short_delay().await;
        a.long_delay().await;
        a.long_delays(2).await;
        a.sleep_ms(500).await;
    });
    assert_eq!(a.pause().pauses, vec![10, 50, 50, 50, 500]);
    assert!(events(&a).is_empty());
}

#[test]
fn start_begins_then_waits_long() {
    let mut a = automator();
    block_on(async {
        a.start().await;
        a.finish().await;
    });
    assert_eq!(events(&a), &[Event::Begin, Event::End]);
    assert_eq!(a.pause().pauses, vec![50]);
}

// ════════════════════════════════════════════════════════════════════════
// Combinations
// ════════════════════════════════════════════════════════════════════════

#[test]
fn combination_with_one_hold_key() {
    let mut a = automator();
    block_on(a.gui_combination(Key::Char(b'd')));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_GUI),
            Event::Press(Key::Char(b'd')),
            Event::ReleaseAll,
        ]
    );
    assert_eq!(a.pause().pauses, vec![10, 10, 10]);
    assert_released(&a);
}

#[test]
fn combination_with_two_hold_keys() {
    let mut a = automator();
    block_on(a.combination(
        &[keycodes::LEFT_CTRL, keycodes::LEFT_SHIFT],
        keycodes::ESC,
    ));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_CTRL),
            Event::Press(keycodes::LEFT_SHIFT),
            Event::Press(keycodes::ESC),
            Event::ReleaseAll,
        ]
    );
    assert_released(&a);
}

#[test]
fn combination_with_three_hold_keys() {
    let mut a = automator();
    block_on(a.combination(
        &[keycodes::LEFT_CTRL, keycodes::LEFT_ALT, keycodes::LEFT_SHIFT],
        keycodes::DELETE,
    ));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_CTRL),
            Event::Press(keycodes::LEFT_ALT),
            Event::Press(keycodes::LEFT_SHIFT),
            Event::Press(keycodes::DELETE),
            Event::ReleaseAll,
        ]
    );
    // One short delay per press plus one after the release.
    assert_eq!(a.pause().pauses.len(), 5);
    assert_released(&a);
}

#[test]
fn single_modifier_wrappers_pick_the_left_modifier() {
    for (modifier, which) in [
        (keycodes::LEFT_ALT, 0),
        (keycodes::LEFT_CTRL, 1),
        (keycodes::LEFT_SHIFT, 2),
        (keycodes::LEFT_GUI, 3),
    ] {
        let mut a = automator();
        block_on(async {
            match which {
                0 => a.alt_combination(keycodes::F4).await,
                1 => a.ctrl_combination(keycodes::F4).await,
                2 => a.shift_combination(keycodes::F4).await,
                _ => a.gui_combination(keycodes::F4).await,
            }
        });
        assert_eq!(events(&a)[0], Event::Press(modifier));
        assert_eq!(events(&a)[1], Event::Press(keycodes::F4));
        assert_released(&a);
    }
}

// ════════════════════════════════════════════════════════════════════════
// Emission
// ════════════════════════════════════════════════════════════════════════

#[test]
fn type_key_is_one_press_and_one_release() {
    let mut a = automator();
    block_on(a.type_key(keycodes::RETURN));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::RETURN),
            Event::Release(keycodes::RETURN),
        ]
    );
    assert_eq!(a.pause().pauses, vec![10, 10]);
    assert_released(&a);
}

#[test]
fn write_text_is_passed_through_unmodified() {
    let mut a = automator();
    block_on(a.write_text("STO LAT \n\t'$x'"));
    assert_eq!(events(&a), &[print("STO LAT \n\t'$x'")]);
    assert_eq!(a.pause().pauses, vec![10]);
}

#[test]
fn hold_key_waits_long_between_press_and_release() {
    let mut a = automator();
    block_on(a.hold_key(keycodes::DOWN_ARROW, 3));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::DOWN_ARROW),
            Event::Release(keycodes::DOWN_ARROW),
        ]
    );
    assert_eq!(a.pause().pauses, vec![50, 50, 50]);
}

// ════════════════════════════════════════════════════════════════════════
// Host macros
// ════════════════════════════════════════════════════════════════════════

#[test]
fn run_program_uses_run_dialog() {
    let mut a = automator();
    block_on(a.run_program("notepad"));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_GUI),
            Event::Press(Key::Char(b'r')),
            Event::ReleaseAll,
            print("notepad"),
            Event::Press(keycodes::RETURN),
            Event::Release(keycodes::RETURN),
        ]
    );
    assert_released(&a);
}

#[test]
fn print_screen_taps_both_codes() {
    let mut a = automator();
    block_on(a.print_screen());
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::PRINT_SCREEN),
            Event::Release(keycodes::PRINT_SCREEN),
            Event::Press(keycodes::PRINT_SCREEN_ALT),
            Event::Release(keycodes::PRINT_SCREEN_ALT),
            print("h"),
            print("b"),
        ]
    );
    assert_released(&a);
}

#[test]
fn javascript_console_is_ctrl_shift_i() {
    let mut a = automator();
    block_on(a.open_javascript_console());
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_CTRL),
            Event::Press(keycodes::LEFT_SHIFT),
            Event::Press(Key::Char(b'i')),
            Event::ReleaseAll,
        ]
    );
}

#[test]
fn hide_window_drags_with_held_down_arrow() {
    let mut a = automator();
    block_on(a.hide_window());
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_ALT),
            Event::Press(keycodes::SPACE),
            Event::ReleaseAll,
            print("M"),
            Event::Press(keycodes::DOWN_ARROW),
            Event::Release(keycodes::DOWN_ARROW),
            Event::Press(keycodes::RETURN),
            Event::Release(keycodes::RETURN),
        ]
    );
    let long_waits = a.pause().pauses.iter().filter(|&&ms| ms == 50).count();
    assert_eq!(long_waits, 10);
    assert_released(&a);
}

#[test]
fn clipboard_and_desktop_shortcuts() {
    let cases: [(u8, u8); 4] = [(b'v', 0), (b'x', 1), (b'c', 2), (b'd', 3)];
    for (letter, which) in cases {
        let mut a = automator();
        block_on(async {
            match which {
                0 => a.paste().await,
                1 => a.cut().await,
                2 => a.copy().await,
                _ => a.show_desktop().await,
            }
        });
        let modifier = if which == 3 {
            keycodes::LEFT_GUI
        } else {
            keycodes::LEFT_CTRL
        };
        assert_eq!(
            events(&a),
            &[
                Event::Press(modifier),
                Event::Press(Key::Char(letter)),
                Event::ReleaseAll,
            ]
        );
        assert_released(&a);
    }
}

#[test]
fn accept_smart_screen_waits_then_selects_yes() {
    let mut a = automator();
    block_on(a.accept_smart_screen());
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_ARROW),
            Event::Release(keycodes::LEFT_ARROW),
            print(" "),
        ]
    );
    assert_eq!(a.pause().pauses[0], 50);
}

#[test]
fn elevated_command_prompt_goes_through_power_menu() {
    let mut a = automator();
    block_on(a.open_command_prompt(true));
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_GUI),
            Event::Press(Key::Char(b'x')),
            Event::ReleaseAll,
            print("a"),
            Event::Press(keycodes::LEFT_ARROW),
            Event::Release(keycodes::LEFT_ARROW),
            print(" "),
        ]
    );
    assert_released(&a);
}

#[test]
fn plain_command_prompt_runs_cmd() {
    let mut a = automator();
    block_on(a.open_command_prompt(false));
    assert!(events(&a).contains(&print("cmd")));
    assert_released(&a);
}

#[test]
fn change_layout_is_alt_shift() {
    let mut a = automator();
    block_on(a.change_keyboard_layout());
    assert_eq!(
        events(&a),
        &[
            Event::Press(keycodes::LEFT_ALT),
            Event::Press(keycodes::LEFT_SHIFT),
            Event::ReleaseAll,
        ]
    );
}

#[test]
fn powershell_run_types_built_command() {
    let mut a = automator();
    let result = block_on(a.powershell_run("A\nB\nC"));
    assert_eq!(result, Ok(()));
    assert!(events(&a).contains(&print("powershell (A) ; (B) ; (C)")));
    assert_eq!(events(&a).last(), Some(&Event::Release(keycodes::RETURN)));
    assert_released(&a);
}

#[test]
fn powershell_run_with_nothing_to_run_types_nothing() {
    let mut a = automator();
    let result = block_on(a.powershell_run("\n"));
    assert_eq!(result, Err(Error::EmptyCommand));
    assert!(events(&a).is_empty());
}

#[test]
fn every_macro_leaves_the_keyboard_released() {
    let mut a = automator();
    block_on(async {
        a.run_program("calc").await;
        a.print_screen().await;
        a.open_javascript_console().await;
        a.hide_window().await;
        a.show_desktop().await;
        a.paste().await;
        a.cut().await;
        a.copy().await;
        a.accept_smart_screen().await;
        a.open_command_prompt(true).await;
        a.open_command_prompt(false).await;
        a.change_keyboard_layout().await;
        let _ = a.powershell_run("Get-Date").await;
    });
    assert_released(&a);
}
