//! Typing unicode code points with the input method of the host.
use ergodox_types::keycode::{HidKeyCode, KeyCode};
pub use ergodox_types::unicode::UnicodeMode;

use crate::hid::HidWriter;
use crate::keyboard::KeyboardState;

impl<'a, W: HidWriter> KeyboardState<'a, W> {
    /// Enter the unicode input of the host
    pub fn unicode_input_start(&mut self) {
        match self.unicode_mode() {
            UnicodeMode::MacOs => self.register_code(KeyCode::Hid(HidKeyCode::LAlt)),
            UnicodeMode::Linux => {
                self.register_code(KeyCode::Hid(HidKeyCode::LCtrl));
                self.register_code(KeyCode::Hid(HidKeyCode::LShift));
                self.tap_code(KeyCode::Hid(HidKeyCode::U));
                self.unregister_code(KeyCode::Hid(HidKeyCode::LShift));
                self.unregister_code(KeyCode::Hid(HidKeyCode::LCtrl));
            }
            UnicodeMode::Windows => {
                self.register_code(KeyCode::Hid(HidKeyCode::LAlt));
                self.tap_code(KeyCode::Hid(HidKeyCode::KpPlus));
            }
        }
    }

    /// Leave the unicode input, the host then inserts the character
    pub fn unicode_input_finish(&mut self) {
        match self.unicode_mode() {
            UnicodeMode::MacOs | UnicodeMode::Windows => self.unregister_code(KeyCode::Hid(HidKeyCode::LAlt)),
            UnicodeMode::Linux => self.tap_code(KeyCode::Hid(HidKeyCode::Space)),
        }
    }

    /// Tap the 4 hex digits of `hex`, most significant first
    pub fn register_hex(&mut self, hex: u16) {
        for shift in [12, 8, 4, 0] {
            let digit = ((hex >> shift) & 0xF) as u8;
            if let Some(key) = HidKeyCode::from_hex_digit(digit) {
                self.tap_code(KeyCode::Hid(key));
            }
        }
    }

    /// Type a code point of the basic multilingual plane
    pub fn send_unicode(&mut self, code_point: u32) {
        let Ok(hex) = u16::try_from(code_point) else {
            warn!("Code point {:#x} is out of the basic multilingual plane", code_point);
            return;
        };
        self.unicode_input_start();
        self.register_hex(hex);
        self.unicode_input_finish();
    }
}
