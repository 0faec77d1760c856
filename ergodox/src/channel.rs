//! Exposed channels which connect the key processing with the matrix scanner and the USB tasks

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};
use embassy_time::{Duration, block_for};
use heapless::String;

use crate::event::KeyEvent;
use crate::hid::{HidWriter, Report};
use crate::{CONSOLE_CHANNEL_SIZE, CONSOLE_LINE_LEN, EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// A line printed on the debug console
pub type ConsoleLine = String<CONSOLE_LINE_LEN>;

/// Channel for key events from the matrix
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent, EVENT_CHANNEL_SIZE> = Channel::new();
/// Channel for reports from the key processing to the hid writer
pub static KEYBOARD_REPORT_CHANNEL: Channel<RawMutex, Report, REPORT_CHANNEL_SIZE> = Channel::new();
/// Channel for debug console lines, read by the host side app switcher script
pub static CONSOLE_CHANNEL: Channel<RawMutex, ConsoleLine, CONSOLE_CHANNEL_SIZE> = Channel::new();

/// [`HidWriter`] feeding the static channels
#[derive(Default)]
pub struct ChannelWriter;

impl HidWriter for ChannelWriter {
    fn write_report(&mut self, report: Report) {
        if KEYBOARD_REPORT_CHANNEL.try_send(report).is_err() {
            warn!("Report channel is full, dropping {:?}", report);
        }
    }

    fn write_console(&mut self, line: &str) {
        let mut console_line = ConsoleLine::new();
        if console_line.push_str(line).is_err() {
            warn!("Console line is too long: {}", line);
            return;
        }
        if CONSOLE_CHANNEL.try_send(console_line).is_err() {
            warn!("Console channel is full, dropping {}", line);
        }
    }

    fn delay(&mut self, duration: Duration) {
        block_for(duration);
    }
}
