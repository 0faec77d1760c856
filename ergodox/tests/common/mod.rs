pub mod test_macro;

use embassy_time::{Duration, Instant};
use ergodox::event::KeyEvent;
use ergodox::hid::{HidWriter, KeyboardReport, Report};
use ergodox::hooks::KeymapHooks;
use ergodox::keyboard::Keyboard;
use ergodox::keymaps::{self, DrgKeymap, Variant};
use log::debug;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub(crate) const KC_LCTRL: u8 = 1 << 0;
pub(crate) const KC_LSHIFT: u8 = 1 << 1;
pub(crate) const KC_LALT: u8 = 1 << 2;
pub(crate) const KC_LGUI: u8 = 1 << 3;
pub(crate) const KC_RSHIFT: u8 = 1 << 5;

/// Collects everything the keyboard emits
#[derive(Debug, Default)]
pub struct TestWriter {
    pub reports: Vec<Report>,
    pub console: Vec<String>,
    pub delays: Vec<Duration>,
}

impl TestWriter {
    pub fn keyboard_reports(&self) -> Vec<KeyboardReport> {
        self.reports
            .iter()
            .filter_map(|r| match r {
                Report::KeyboardReport(report) => Some(*report),
                _ => None,
            })
            .collect()
    }
}

impl HidWriter for TestWriter {
    fn write_report(&mut self, report: Report) {
        debug!("Report: {:?}", report);
        self.reports.push(report);
    }

    fn write_console(&mut self, line: &str) {
        debug!("Console: {}", line.trim_end());
        self.console.push(line.to_string());
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
    }
}

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub delay: u64, // Delay before this key event in milliseconds
}

pub type TestKeyboard = Keyboard<'static, DrgKeymap, TestWriter>;

pub fn create_test_keyboard(variant: Variant) -> TestKeyboard {
    let mut keyboard = keymaps::keyboard(variant, TestWriter::default());
    keyboard.init(Instant::from_millis(0));
    keyboard
}

/// Scan every millisecond for `ms` milliseconds, like the matrix scan loop does
pub fn scan_for<H: KeymapHooks>(keyboard: &mut Keyboard<'_, H, TestWriter>, ms: u64) {
    let start = keyboard.state().now().as_millis();
    for t in start + 1..=start + ms {
        keyboard.scan(Instant::from_millis(t));
    }
}

// Run the key sequence from the current time of the keyboard, scanning between the events
pub fn run_key_sequence<H: KeymapHooks>(keyboard: &mut Keyboard<'_, H, TestWriter>, key_sequence: &[TestKeyPress]) {
    for key in key_sequence {
        scan_for(keyboard, key.delay);
        let now = keyboard.state().now();
        keyboard.process(
            KeyEvent {
                row: key.row,
                col: key.col,
                pressed: key.pressed,
            },
            now,
        );
        keyboard.scan(now);
    }
}
