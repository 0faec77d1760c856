//! HID report values produced by the layout engine, and the sink they go to.
use embassy_time::Duration;
use usbd_hid::descriptor::generator_prelude::*;

/// KeyboardReport describes a report and its companion descriptor that can be
/// used to send keyboard button presses to a host.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xE0, usage_max = 0xE7) = {
            #[packed_bits = 8] #[item_settings(data,variable,absolute)] modifier=input;
        };
        (logical_min = 0,) = {
            #[item_settings(constant,variable,absolute)] reserved=input;
        };
        (usage_page = LEDS, usage_min = 0x01, usage_max = 0x05) = {
            #[packed_bits = 5] #[item_settings(data,variable,absolute)] leds=output;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xDD) = {
            #[item_settings(data,array,absolute)] keycodes=input;
        };
    }
)]
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

/// Mouse report: buttons, pointer movement and wheel
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    pub buttons: u8,
    pub x: i8,
    pub y: i8,
    pub wheel: i8,
    pub pan: i8,
}

impl From<MouseReport> for usbd_hid::descriptor::MouseReport {
    fn from(report: MouseReport) -> Self {
        Self {
            buttons: report.buttons,
            x: report.x,
            y: report.y,
            wheel: report.wheel,
            pan: report.pan,
        }
    }
}

/// Consumer page report, `usage_id == 0` releases the media key
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MediaReport {
    pub usage_id: u16,
}

impl From<MediaReport> for usbd_hid::descriptor::MediaKeyboardReport {
    fn from(report: MediaReport) -> Self {
        Self {
            usage_id: report.usage_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaReport(MediaReport),
}

/// Destination of everything the layout emits.
///
/// Writes never fail from the engine's point of view: a writer that cannot
/// deliver drops the item and logs it.
pub trait HidWriter {
    /// Send a HID report to the host
    fn write_report(&mut self, report: Report);

    /// Print a line on the debug console
    fn write_console(&mut self, line: &str);

    /// Block between the keystrokes of a slow tap sequence
    fn delay(&mut self, _duration: Duration) {}
}
