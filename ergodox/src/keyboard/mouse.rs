//! Mouse keys: buttons, constant speed pointer movement and wheel.
use embassy_time::Instant;
use ergodox_types::keycode::HidKeyCode;
use ergodox_types::mouse_button::MouseButtons;

use crate::config::MouseKeyConfig;
use crate::hid::{HidWriter, MouseReport, Report};
use crate::keyboard::KeyboardState;

/// Held mouse keys
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MouseKeys {
    buttons: MouseButtons,
    /// Held direction keys, one bit per key as numbered by `direction_bit`
    directions: u8,
    last_report: Option<Instant>,
}

impl MouseKeys {
    fn direction_bit(key: HidKeyCode) -> Option<u8> {
        match key {
            HidKeyCode::MouseUp => Some(0),
            HidKeyCode::MouseDown => Some(1),
            HidKeyCode::MouseLeft => Some(2),
            HidKeyCode::MouseRight => Some(3),
            HidKeyCode::MouseWheelUp => Some(4),
            HidKeyCode::MouseWheelDown => Some(5),
            HidKeyCode::MouseWheelLeft => Some(6),
            HidKeyCode::MouseWheelRight => Some(7),
            _ => None,
        }
    }

    fn button(key: HidKeyCode) -> MouseButtons {
        match key {
            HidKeyCode::MouseBtn1 => MouseButtons::from_number(1),
            HidKeyCode::MouseBtn2 => MouseButtons::from_number(2),
            HidKeyCode::MouseBtn3 => MouseButtons::from_number(3),
            HidKeyCode::MouseBtn4 => MouseButtons::from_number(4),
            HidKeyCode::MouseBtn5 => MouseButtons::from_number(5),
            _ => MouseButtons::new(),
        }
    }

    fn held(&self, bit: u8) -> bool {
        self.directions & (1 << bit) != 0
    }

    fn axis(&self, negative: u8, positive: u8, delta: i8) -> i8 {
        match (self.held(negative), self.held(positive)) {
            (true, false) => -delta,
            (false, true) => delta,
            _ => 0,
        }
    }

    fn is_moving(&self) -> bool {
        self.directions != 0
    }

    fn report(&self, config: &MouseKeyConfig) -> MouseReport {
        MouseReport {
            buttons: self.buttons.into_bits(),
            x: self.axis(2, 3, config.move_delta),
            y: self.axis(0, 1, config.move_delta),
            // Wheel up scrolls with positive values
            wheel: self.axis(5, 4, config.wheel_delta),
            pan: self.axis(6, 7, config.wheel_delta),
        }
    }
}

impl<'a, W: HidWriter> KeyboardState<'a, W> {
    pub(crate) fn process_mouse_key(&mut self, key: HidKeyCode, pressed: bool) {
        if let Some(bit) = MouseKeys::direction_bit(key) {
            if pressed {
                self.mouse.directions |= 1 << bit;
            } else {
                self.mouse.directions &= !(1 << bit);
            }
        } else if pressed {
            self.mouse.buttons = self.mouse.buttons | MouseKeys::button(key);
        } else {
            self.mouse.buttons = self.mouse.buttons & !MouseKeys::button(key);
        }
        self.send_mouse_report();
    }

    fn send_mouse_report(&mut self) {
        let report = self.mouse.report(&self.behavior.mouse);
        self.mouse.last_report = Some(self.now);
        self.writer.write_report(Report::MouseReport(report));
    }

    /// Keep moving while a direction key is held
    pub(crate) fn tick_mouse(&mut self) {
        if !self.mouse.is_moving() {
            return;
        }
        let interval = self.behavior.mouse.interval;
        if self
            .mouse
            .last_report
            .is_none_or(|t| self.now.saturating_duration_since(t) >= interval)
        {
            self.send_mouse_report();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_axes() {
        let config = MouseKeyConfig::default();
        let mut keys = MouseKeys::default();
        keys.directions = 1 << 3 | 1 << 0 | 1 << 5;
        let report = keys.report(&config);
        assert_eq!((report.x, report.y, report.wheel, report.pan), (8, -8, -1, 0));

        // Opposite directions cancel out
        keys.directions = 1 << 2 | 1 << 3;
        assert_eq!(keys.report(&config).x, 0);
    }

    #[test]
    fn test_buttons() {
        let mut keys = MouseKeys::default();
        keys.buttons = keys.buttons | MouseKeys::button(HidKeyCode::MouseBtn2);
        assert_eq!(keys.report(&MouseKeyConfig::default()).buttons, 0b10);
        assert_eq!(MouseKeys::direction_bit(HidKeyCode::MouseBtn1), None);
    }
}
