//! Windows desktop shortcuts.
//!
//! These encode assumptions about a US-English Windows shell: the Run
//! dialog on Win+R, the Win+X power menu, the UAC prompt's button order
//! and the classic window-menu Move command. They are kept as recipes,
//! not generalised.

use super::{shell, Automator};
use crate::config::MAX_COMMAND_LEN;
use crate::error::Error;
use crate::hid::{keycodes, Key};
use crate::timing::Pause;
use crate::transport::HidTransport;

impl<T: HidTransport, P: Pause> Automator<T, P> {
    /// Start `program` through the Run dialog (Win+R, name, Enter).
    ///
    /// `"notepad"` opens Notepad, `"calc"` the calculator.
    pub async fn run_program(&mut self, program: &str) {
        debug!("Run: {}", program);
        self.gui_combination(Key::Char(b'r')).await;
        self.transport.print(program).await;
        self.short_delay().await;
        self.type_key(keycodes::RETURN).await;
    }

    /// Capture the screen.
    pub async fn print_screen(&mut self) {
        debug!("Print screen");
        self.type_key(keycodes::PRINT_SCREEN).await;
        self.type_key(keycodes::PRINT_SCREEN_ALT).await;
        self.transport.print("h").await;
        self.short_delay().await;
        self.transport.print("b").await;
        self.short_delay().await;
    }

    /// Browser developer tools (Ctrl+Shift+I).
    pub async fn open_javascript_console(&mut self) {
        self.combination(
            &[keycodes::LEFT_CTRL, keycodes::LEFT_SHIFT],
            Key::Char(b'i'),
        )
        .await;
    }

    /// Drag the focused window as low as it goes.
    ///
    /// Alt+Space opens the window menu, `M` picks Move, Down is held while
    /// the host auto-repeats (not every repeat lands), then Enter drops the
    /// window and puts the cursor back.
    pub async fn hide_window(&mut self) {
        debug!("Hide window");
        self.alt_combination(keycodes::SPACE).await;
        self.transport.print("M").await;
        self.short_delay().await;
        let longs = self.timing.window_drag_longs;
        self.hold_key(keycodes::DOWN_ARROW, longs).await;
        self.type_key(keycodes::RETURN).await;
    }

    /// Win+D.
    pub async fn show_desktop(&mut self) {
        self.gui_combination(Key::Char(b'd')).await;
    }

    /// Ctrl+V.
    pub async fn paste(&mut self) {
        self.ctrl_combination(Key::Char(b'v')).await;
    }

    /// Ctrl+X.
    pub async fn cut(&mut self) {
        self.ctrl_combination(Key::Char(b'x')).await;
    }

    /// Ctrl+C.
    pub async fn copy(&mut self) {
        self.ctrl_combination(Key::Char(b'c')).await;
    }

    /// Confirm the elevation prompt: wait for it, move focus to "Yes",
    /// press it with Space.
    pub async fn accept_smart_screen(&mut self) {
        debug!("Accept elevation prompt");
        self.long_delay().await;
        self.type_key(keycodes::LEFT_ARROW).await;
        self.short_delay().await;
        self.transport.print(" ").await;
        self.short_delay().await;
    }

    /// Open a command prompt, elevated through Win+X then A when asked.
    pub async fn open_command_prompt(&mut self, elevated: bool) {
        if elevated {
            debug!("Command prompt (elevated)");
            self.gui_combination(Key::Char(b'x')).await;
            self.transport.print("a").await;
            self.accept_smart_screen().await;
        } else {
            self.run_program("cmd").await;
        }
    }

    /// Alt+Shift cycles the host keyboard layout. A host with a single
    /// layout ignores it.
    pub async fn change_keyboard_layout(&mut self) {
        self.alt_combination(keycodes::LEFT_SHIFT).await;
    }

    /// Run newline-separated PowerShell statements in one Run dialog
    /// command. See [`shell::powershell_command`].
    pub async fn powershell_run(&mut self, scripts: &str) -> Result<(), Error> {
        let command = shell::powershell_command::<MAX_COMMAND_LEN>(scripts)?;
        self.run_program(&command).await;
        Ok(())
    }
}
