//! Callbacks a layout plugs into the key processing.
use ergodox_types::action::KeyAction;
use ergodox_types::keycode::HidKeyCode;

use crate::event::KeyRecord;
use crate::hid::HidWriter;
use crate::keyboard::KeyboardState;
use crate::tap_dance::{TapDance, TapDanceState};

/// Layout specific behavior.
///
/// Every callback gets the [`KeyboardState`] to register keys, switch layers,
/// print on the console or set LEDs. All callbacks have empty defaults.
pub trait KeymapHooks {
    /// Runs once before the first key event
    fn matrix_init<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>) {}

    /// Runs on every scan tick
    fn matrix_scan<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>) {}

    /// Sees every resolved key record first, returning `false` swallows it
    fn process_record<W: HidWriter>(
        &mut self,
        _kb: &mut KeyboardState<'_, W>,
        _action: KeyAction,
        _record: &KeyRecord,
    ) -> bool {
        true
    }

    /// Runs macro `id` for the press and the release of a macro key
    fn process_macro<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>, _id: u8, _record: &KeyRecord) {}

    /// Tap dance table lookup
    fn tap_dance(&self, _id: u8) -> Option<TapDance> {
        None
    }

    /// A `TapDance::Custom` dance is decided
    fn tap_dance_finished<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>, _state: &TapDanceState) {}

    /// A `TapDance::Custom` dance is over, after finishing and the key release
    fn tap_dance_reset<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>, _state: &TapDanceState) {}

    /// The leader timeout elapsed with `sequence` typed after the leader key
    fn leader_sequence<W: HidWriter>(&mut self, _kb: &mut KeyboardState<'_, W>, _sequence: &[HidKeyCode]) {}
}

/// Layout without any callback
pub struct NoHooks;

impl KeymapHooks for NoHooks {}
