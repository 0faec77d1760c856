//! Tap dances: a key whose action depends on the number of quick consecutive taps.
//!
//! A dance is finished when the tapping term passes after its last press, or
//! when another key is pressed. It is reset right after finishing if the key is
//! already released, otherwise on release.
use embassy_time::Instant;
use ergodox_types::action::{Action, KeyAction};

use crate::event::KeyRecord;
use crate::hid::HidWriter;
use crate::hooks::KeymapHooks;
use crate::keyboard::Keyboard;

/// Tap dance definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapDance {
    /// One tap registers the first action, two taps the second one
    Double(Action, Action),
    /// Decided by `KeymapHooks::tap_dance_finished` and `KeymapHooks::tap_dance_reset`
    Custom,
}

/// Progress of the tap dance in flight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceState {
    pub id: u8,
    pub count: u8,
    pub pressed: bool,
    pub interrupted: bool,
    pub finished: bool,
    timer: Instant,
}

impl TapDanceState {
    fn new(id: u8, now: Instant) -> Self {
        Self {
            id,
            count: 1,
            pressed: true,
            interrupted: false,
            finished: false,
            timer: now,
        }
    }
}

impl<'a, H: KeymapHooks, W: HidWriter> Keyboard<'a, H, W> {
    /// Another key press decides the dance in flight
    pub(crate) fn preprocess_tap_dance(&mut self, action: KeyAction, record: &KeyRecord) {
        if !record.pressed() {
            return;
        }
        let Some(state) = self.tap_dance.as_mut() else {
            return;
        };
        if state.finished || action == KeyAction::TapDance(state.id) {
            return;
        }
        state.interrupted = true;
        self.finish_tap_dance();
    }

    pub(crate) fn process_tap_dance(&mut self, id: u8, record: &KeyRecord) {
        let now = self.state.now();
        if record.pressed() {
            let continued = matches!(self.tap_dance, Some(state) if state.id == id && !state.finished);
            if continued {
                if let Some(state) = self.tap_dance.as_mut() {
                    state.count = state.count.saturating_add(1);
                    state.pressed = true;
                    state.timer = now;
                }
            } else {
                // A finished dance still held by another key is over now
                self.reset_tap_dance();
                self.tap_dance = Some(TapDanceState::new(id, now));
            }
            return;
        }

        let Some(state) = self.tap_dance.as_mut() else {
            return;
        };
        if state.id != id {
            return;
        }
        state.pressed = false;
        if state.finished {
            self.reset_tap_dance();
        }
    }

    /// Finish the dance once the tapping term passed since its last press
    pub(crate) fn check_tap_dance_timeout(&mut self) {
        let term = self.state.behavior().tap_hold.tapping_term;
        if let Some(state) = self.tap_dance {
            if !state.finished && self.state.now().saturating_duration_since(state.timer) > term {
                self.finish_tap_dance();
            }
        }
    }

    fn finish_tap_dance(&mut self) {
        let Some(state) = self.tap_dance.as_mut() else {
            return;
        };
        state.finished = true;
        let state = *state;
        debug!("Tap dance {} finished with {} taps", state.id, state.count);

        match self.hooks.tap_dance(state.id) {
            Some(TapDance::Double(first, second)) => {
                let action = match state.count {
                    1 => Some(first),
                    2 => Some(second),
                    _ => None,
                };
                if let Some(action) = action {
                    self.state.register_action(action);
                    // One-shot modifiers and layers are used up by this action
                    self.state.update_osm(false);
                    self.state.update_osl(false);
                }
            }
            Some(TapDance::Custom) => self.hooks.tap_dance_finished(&mut self.state, &state),
            None => warn!("Tap dance {} is not defined", state.id),
        }

        if !state.pressed {
            self.reset_tap_dance();
        }
    }

    fn reset_tap_dance(&mut self) {
        let Some(state) = self.tap_dance.take() else {
            return;
        };
        match self.hooks.tap_dance(state.id) {
            Some(TapDance::Double(first, second)) => match state.count {
                1 => self.state.unregister_action(first),
                2 => self.state.unregister_action(second),
                _ => (),
            },
            Some(TapDance::Custom) => self.hooks.tap_dance_reset(&mut self.state, &state),
            None => (),
        }
    }
}
