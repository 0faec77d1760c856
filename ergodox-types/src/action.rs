//! Key actions bound in the layout tables.
//!
//! - [`Action`] - single operations a key sends or executes
//! - [`KeyAction`] - how a physical key behaves: plain, one-shot, tap/hold, tap dance or macro

use crate::keycode::{HidKeyCode, KeyCode};
use crate::modifier::ModifierCombination;

/// A single operation, triggered on press and cancelled on release.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Register a key
    Key(KeyCode),
    /// Register a key together with modifiers, e.g. `(` as `Shift+9`
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Register modifiers only
    Modifier(ModifierCombination),
    /// Activate a layer while held
    LayerOn(u8),
    /// Toggle a layer on press
    LayerToggle(u8),
    /// Type a unicode code point with the current input mode
    Unicode(u32),
    /// Start a leader sequence
    Leader,
    /// Layout specific keycode handled by the layout hooks
    User(u8),
    /// Run a layout macro by id
    TriggerMacro(u8),
}

impl Action {
    /// Keycode a leader sequence records for this action
    pub fn leader_keycode(&self) -> Option<HidKeyCode> {
        match self {
            Action::Key(KeyCode::Hid(k)) | Action::KeyWithModifier(KeyCode::Hid(k), _) => Some(*k),
            _ => None,
        }
    }
}

/// The action bound to one physical position of one layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next active layer below will be checked.
    Transparent,
    /// A single action, triggered on press and cancelled on release.
    Single(Action),
    /// One-shot modifier or layer, applied to the next key only.
    OneShot(Action),
    /// Tap action and hold action, decided by the tapping term.
    TapHold(Action, Action),
    /// Momentary layer on hold, toggled after enough taps.
    LayerTapToggle(u8),
    /// Layout macro receiving the tap count of the key.
    TapMacro(u8),
    /// Tap dance, resolved by the tap dance table of the layout.
    TapDance(u8),
}

impl KeyAction {
    /// Returns `true` if the press has to wait for a tap or hold decision
    pub fn is_tap_hold(&self) -> bool {
        matches!(
            self,
            KeyAction::TapHold(_, _) | KeyAction::LayerTapToggle(_) | KeyAction::TapMacro(_)
        )
    }

    /// Keycode a leader sequence records when this key is pressed.
    ///
    /// Tap/hold keys record their tap keycode.
    pub fn leader_keycode(&self) -> Option<HidKeyCode> {
        match self {
            KeyAction::Single(a) | KeyAction::TapHold(a, _) => a.leader_keycode(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}
