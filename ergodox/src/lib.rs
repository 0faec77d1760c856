//! # ErgoDox EZ personal layouts
//!
//! Three variants of a personal ErgoDox EZ layout, see [`keymaps`], and the
//! key processing they run on:
//!
//! - [`keymap`]: layer stack with a per-key layer cache
//! - [`keyboard`]: tap/hold decisions, one-shot modifiers and layers, mouse and media keys
//! - [`tap_dance`] and [`leader`]: multi-tap keys and leader key sequences
//! - [`hooks`]: callbacks a layout plugs into the processing
//! - [`light`]: LED driver
//! - [`channel`]: channels and the async runner glue
//!
//! The processing takes debounced key events and produces HID report values,
//! matrix scanning and the USB transport live elsewhere.

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod event;
pub mod hid;
pub mod hooks;
pub mod keyboard;
pub mod keymap;
pub mod keymaps;
pub mod layout;
pub mod layout_macro;
pub mod leader;
pub mod light;
pub mod tap_dance;
pub mod unicode;

pub use ergodox_types::{action, keycode, modifier, mouse_button};

pub(crate) type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub(crate) const EVENT_CHANNEL_SIZE: usize = 16;
pub(crate) const REPORT_CHANNEL_SIZE: usize = 16;
pub(crate) const CONSOLE_CHANNEL_SIZE: usize = 4;
pub(crate) const CONSOLE_LINE_LEN: usize = 32;
