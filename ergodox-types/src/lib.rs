//! # ErgoDox types
//!
//! Type definitions shared by the ErgoDox EZ layouts.
//!
//! - [`action`] - Key actions: plain keys, one-shot keys, tap/hold keys, tap dances and macros
//! - [`keycode`] - HID keycodes and consumer (media) keys
//! - [`modifier`] - Modifier sets
//! - [`mouse_button`] - Mouse button state
//! - [`unicode`] - Unicode input modes of the host

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
pub mod mouse_button;
pub mod unicode;
