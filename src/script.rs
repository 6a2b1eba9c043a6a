//! The payload: a birthday greeting typed into Notepad.
//!
//! Runs once per power-up, top to bottom, with no branches. The host is
//! never observed; every wait is a fixed guess. The text is Polish and the
//! shortcuts assume Windows with a US and one other keyboard layout.

use crate::automation::Automator;
use crate::hid::{keycodes, Key};
use crate::timing::Pause;
use crate::transport::HidTransport;

/// One instruction of a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    /// Type text, then a short delay.
    Write(&'a str),
    /// Tap a single key.
    Key(Key),
    /// Hold keys, tap the target, release all.
    Combo(&'a [Key], Key),
    /// Start a program through the Run dialog.
    Run(&'a str),
    /// Plain wait (ms).
    Sleep(u32),
}

impl<T: HidTransport, P: Pause> Automator<T, P> {
    pub async fn perform(&mut self, step: &Step<'_>) {
        match *step {
            Step::Write(text) => self.write_text(text).await,
            Step::Key(key) => self.type_key(key).await,
            Step::Combo(holds, target) => self.combination(holds, target).await,
            Step::Run(program) => self.run_program(program).await,
            Step::Sleep(ms) => self.sleep_ms(ms).await,
        }
    }

    pub async fn perform_all(&mut self, steps: &[Step<'_>]) {
        for step in steps {
            self.perform(step).await;
        }
    }
}

/// Download the picture to the desktop and open it in Paint.
pub const FETCH_WALLPAPER: &str = "Start-BitsTransfer -Source 'http://goo.gl/vzqBFS' -Destination ($env:USERPROFILE + '\\Desktop\\CAT.jpg')\n\
     mspaint ($env:USERPROFILE + '\\Desktop\\CAT.jpg')";

/// Remove the downloaded picture again.
pub const REMOVE_WALLPAPER: &str = "Remove-Item ($env:USERPROFILE + '\\Desktop\\CAT.jpg')";

const ALT: &[Key] = &[keycodes::LEFT_ALT];

/// Paint's File menu, then "Set as desktop background", then close Paint.
pub const SET_AS_BACKGROUND: &[Step<'static>] = &[
    Step::Key(keycodes::LEFT_ALT),
    Step::Write("f"),
    Step::Write("b"),
    Step::Combo(ALT, keycodes::F4),
];

/// Open Notepad, maximise it and bump the font size to 20.
pub const OPEN_NOTEPAD: &[Step<'static>] = &[
    Step::Run("notepad"),
    Step::Combo(ALT, keycodes::SPACE),
    Step::Key(Key::Char(b'x')),
    Step::Combo(ALT, Key::Char(b'o')),
    Step::Key(Key::Char(b'f')),
    Step::Key(keycodes::TAB),
    Step::Key(keycodes::TAB),
    Step::Write("20"),
    Step::Key(keycodes::RETURN),
];

/// The greeting, with the pauses that pace it.
pub const GREETING: &[Step<'static>] = &[
    Step::Write("STO LAT \n"),
    Step::Sleep(500),
    Step::Write("STO LAT \n"),
    Step::Sleep(500),
    Step::Write("NIECH ZYJE ZYJE NAM \n"),
    Step::Sleep(500),
    Step::Write("A KTO? \n"),
    Step::Sleep(500),
    Step::Write("KIRU! \n\n\n"),
    Step::Sleep(500),
    Step::Write("Zebys nigdy z parametrycznego drzewa nie spadl, \nstudia Ci lekkimi byly i obronil w końcu Inz. ;) \n\n"),
    Step::Sleep(3000),
    Step::Write("Zarowno na architekturze, jak i na infie - to drugie sensowniejsze :P \n"),
    Step::Sleep(3000),
    Step::Write("                                           (THIS FILLS YOU WITH DETERMINATION)\n\n"),
    Step::Sleep(3000),
    Step::Write("W miedzyczasie wez to Arduino Leonardo \n"),
    Step::Sleep(1000),
    Step::Write("(jak ten wynalazca Da Vinci - on w sumie i malowal i wynalazki robil) \n"),
    Step::Sleep(2000),
    Step::Write("I baw sie - jak masz ochote zrodla tej kartki znajdziesz ponizej \n\n"),
    Step::Sleep(3000),
    Step::Write("Wystarczy sciagnac, odpalic platformio/arduino and have fun!:\n\n https://github.com/kpochwala/KiruBD\n\n"),
    Step::Sleep(3000),
    Step::Write("Lalalalala\n\n"),
    Step::Sleep(3000),
    Step::Write("tyryryry\n\n"),
    Step::Sleep(3000),
    Step::Write("nie zwracaj na mnie uwagi\n\n"),
    Step::Sleep(3000),
    Step::Write("wcale nie robie niczego w tle\n\n"),
    Step::Sleep(3000),
    Step::Write("ABSOLUTNIE nie\n\n"),
    Step::Sleep(3000),
    Step::Write("OK juz.\n\n"),
    Step::Sleep(3000),
    Step::Write("Autodestrukcja za 5...\n\n"),
    Step::Sleep(1000),
    Step::Write("4...\n\n"),
    Step::Sleep(1000),
    Step::Write("3...\n\n"),
    Step::Sleep(1000),
    Step::Write("2...\n\n"),
    Step::Sleep(1000),
    Step::Write("1...\n\n"),
    Step::Sleep(1000),
    Step::Write("0...\n\n"),
    Step::Sleep(1000),
    Step::Write("0...\n\n"),
    Step::Sleep(1000),
    Step::Write("0...\n\n"),
    Step::Sleep(1000),
    Step::Write("0...\n\n"),
    Step::Sleep(2000),
    Step::Write("-1?\n\n"),
    Step::Sleep(2000),
    Step::Write("???\n\n"),
    Step::Sleep(3000),
    Step::Write("Dobra, nevermind.\n\n"),
    Step::Sleep(2000),
    Step::Write("W kazdym razie - jeszcze raz milej zabawy i najlepszego!!!\n\n"),
    Step::Sleep(1000),
];

/// Swap the desktop background for the downloaded picture.
pub async fn change_desktop<T: HidTransport, P: Pause>(auto: &mut Automator<T, P>) {
    change_desktop_with(auto, FETCH_WALLPAPER, REMOVE_WALLPAPER).await;
}

/// [`change_desktop`] with its own fetch and cleanup statements.
///
/// A command that does not fit the Run dialog is logged and skipped; the
/// Paint steps and the layout switch back still happen.
pub async fn change_desktop_with<T: HidTransport, P: Pause>(
    auto: &mut Automator<T, P>,
    fetch: &str,
    remove: &str,
) {
    info!("Changing desktop background");
    // The commands are full of symbols, switch the host to US first.
    auto.change_keyboard_layout().await;
    if let Err(e) = auto.powershell_run(fetch).await {
        warn!("Wallpaper download command not sent: {}", e);
    }
    let waits = auto.timing().download_wait_longs;
    auto.long_delays(waits).await;
    auto.perform_all(SET_AS_BACKGROUND).await;
    if let Err(e) = auto.powershell_run(remove).await {
        warn!("Wallpaper cleanup command not sent: {}", e);
    }
    auto.change_keyboard_layout().await;
}

/// The whole payload, start to finish.
pub async fn run<T: HidTransport, P: Pause>(auto: &mut Automator<T, P>) {
    auto.start().await;

    change_desktop(auto).await;

    info!("Opening Notepad");
    auto.perform_all(OPEN_NOTEPAD).await;

    info!("Typing greeting");
    auto.perform_all(GREETING).await;

    auto.finish().await;
    info!("Payload done");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::shell::powershell_command;
    use crate::config::MAX_COMMAND_LEN;
    use crate::timing::TimingProfile;
    use embassy_futures::block_on;

    /// Keeps what was typed and which keys are down.
    #[derive(Default)]
    struct Typist {
        printed: Vec<String>,
        held: Vec<Key>,
        combos: usize,
    }

    impl HidTransport for Typist {
        async fn begin(&mut self) {}

        async fn end(&mut self) {
            self.held.clear();
        }

        async fn press(&mut self, key: Key) {
            self.held.push(key);
        }

        async fn release(&mut self, key: Key) {
            self.held.retain(|k| *k != key);
        }

        async fn release_all(&mut self) {
            self.combos += 1;
            self.held.clear();
        }

        async fn print(&mut self, text: &str) {
            self.printed.push(text.to_string());
        }
    }

    struct NoWait;

    impl Pause for NoWait {
        async fn pause_ms(&mut self, _ms: u32) {}
    }

    fn desktop_with(fetch: &str, remove: &str) -> Typist {
        let mut auto = Automator::new(Typist::default(), NoWait, TimingProfile::new(10));
        block_on(change_desktop_with(&mut auto, fetch, remove));
        auto.into_parts().0
    }

    #[test]
    fn wallpaper_commands_fit_the_run_dialog() {
        let fetch = powershell_command::<MAX_COMMAND_LEN>(FETCH_WALLPAPER).unwrap();
        assert!(fetch.starts_with("powershell (Start-BitsTransfer "));
        assert!(fetch.contains(") ; (mspaint "));
        assert!(fetch.ends_with("'\\Desktop\\CAT.jpg'))"));

        let remove = powershell_command::<MAX_COMMAND_LEN>(REMOVE_WALLPAPER).unwrap();
        assert_eq!(
            remove.as_str(),
            "powershell (Remove-Item ($env:USERPROFILE + '\\Desktop\\CAT.jpg'))"
        );
    }

    #[test]
    fn change_desktop_types_both_commands() {
        let typed = desktop_with(FETCH_WALLPAPER, REMOVE_WALLPAPER);
        let commands: Vec<_> = typed
            .printed
            .iter()
            .filter(|p| p.starts_with("powershell "))
            .collect();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].contains("Start-BitsTransfer"));
        assert!(commands[1].contains("Remove-Item"));
        assert!(typed.held.is_empty());
    }

    #[test]
    fn oversized_download_command_is_skipped() {
        let mut long = String::new();
        while long.len() <= MAX_COMMAND_LEN {
            long.push_str("Write-Host 'padding' ");
        }
        let typed = desktop_with(&long, REMOVE_WALLPAPER);

        let commands: Vec<_> = typed
            .printed
            .iter()
            .filter(|p| p.starts_with("powershell "))
            .collect();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains("Remove-Item"));
        // Paint's menu still gets its "f" and "b".
        assert!(typed.printed.iter().any(|p| p == "f"));
        assert!(typed.printed.iter().any(|p| p == "b"));
        assert!(typed.held.is_empty());
    }

    #[test]
    fn blank_cleanup_command_is_skipped() {
        let typed = desktop_with(FETCH_WALLPAPER, "\n\n");
        let commands = typed
            .printed
            .iter()
            .filter(|p| p.starts_with("powershell "))
            .count();
        assert_eq!(commands, 1);
        // Layout switched there and back, around the Alt+F4.
        assert!(typed.combos >= 3);
        assert!(typed.held.is_empty());
    }

    #[test]
    fn greeting_alternates_text_and_pause() {
        assert_eq!(GREETING.len() % 2, 0);
        for pair in GREETING.chunks(2) {
            assert!(matches!(pair[0], Step::Write(_)));
            assert!(matches!(pair[1], Step::Sleep(_)));
        }
    }

    #[test]
    fn greeting_ends_with_wishes() {
        let last_text = GREETING
            .iter()
            .rev()
            .find_map(|s| match s {
                Step::Write(t) => Some(*t),
                _ => None,
            })
            .unwrap();
        assert!(last_text.contains("najlepszego"));
    }

    #[test]
    fn notepad_setup_starts_with_run() {
        assert_eq!(OPEN_NOTEPAD[0], Step::Run("notepad"));
        assert_eq!(OPEN_NOTEPAD.last(), Some(&Step::Key(keycodes::RETURN)));
    }
}
