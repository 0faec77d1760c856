//! Leader key sequences and what they do.
use ergodox_types::keycode::{HidKeyCode, KeyCode};
use ergodox_types::modifier::ModifierCombination;
use ergodox_types::unicode::UnicodeMode;

use crate::hid::HidWriter;
use crate::keyboard::KeyboardState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LeaderCommand {
    /// ¯\_(ツ)_/¯
    Shrug,
    Paste,
    LockScreen,
    CloseWindow,
    FullScreen,
    /// Ask the host side script to focus an app
    AppSelect(&'static str),
}

/// Leader dictionary
pub const LEADER_SEQUENCES: &[(&[HidKeyCode], LeaderCommand)] = &[
    (&[HidKeyCode::S], LeaderCommand::Shrug),
    (&[HidKeyCode::P], LeaderCommand::Paste),
    (&[HidKeyCode::L], LeaderCommand::LockScreen),
    (&[HidKeyCode::W, HidKeyCode::D], LeaderCommand::CloseWindow),
    (&[HidKeyCode::W, HidKeyCode::F], LeaderCommand::FullScreen),
    (&[HidKeyCode::A, HidKeyCode::S], LeaderCommand::AppSelect("CMD:appsel_slack\n")),
    (&[HidKeyCode::A, HidKeyCode::M], LeaderCommand::AppSelect("CMD:appsel_mail\n")),
    (&[HidKeyCode::A, HidKeyCode::T], LeaderCommand::AppSelect("CMD:appsel_telegram\n")),
    (&[HidKeyCode::A, HidKeyCode::W], LeaderCommand::AppSelect("CMD:appsel_web\n")),
    (&[HidKeyCode::A, HidKeyCode::G], LeaderCommand::AppSelect("CMD:appsel_chrome\n")),
    (&[HidKeyCode::A, HidKeyCode::I], LeaderCommand::AppSelect("CMD:appsel_term\n")),
    (&[HidKeyCode::A, HidKeyCode::A], LeaderCommand::AppSelect("CMD:appsel_alfred\n")),
];

pub(super) fn lookup(sequence: &[HidKeyCode]) -> Option<LeaderCommand> {
    LEADER_SEQUENCES
        .iter()
        .find(|(keys, _)| *keys == sequence)
        .map(|&(_, command)| command)
}

impl LeaderCommand {
    pub fn run<W: HidWriter>(self, kb: &mut KeyboardState<'_, W>) {
        let mac = kb.unicode_mode() == UnicodeMode::MacOs;
        match self {
            LeaderCommand::Shrug => shrug(kb),
            LeaderCommand::Paste => {
                let (key, modifiers) = if mac {
                    (HidKeyCode::V, ModifierCombination::LGUI)
                } else {
                    (HidKeyCode::Insert, ModifierCombination::LSHIFT)
                };
                slow_tap(kb, key, modifiers);
            }
            LeaderCommand::LockScreen => slow_tap(
                kb,
                HidKeyCode::KbPower,
                ModifierCombination::LSHIFT | ModifierCombination::LCTRL,
            ),
            LeaderCommand::CloseWindow => {
                let (key, modifiers) = if mac {
                    (HidKeyCode::W, ModifierCombination::LGUI)
                } else {
                    (HidKeyCode::F4, ModifierCombination::LALT)
                };
                slow_tap(kb, key, modifiers);
            }
            LeaderCommand::FullScreen => slow_tap(
                kb,
                HidKeyCode::F,
                ModifierCombination::LGUI | ModifierCombination::LCTRL,
            ),
            LeaderCommand::AppSelect(line) => kb.print(line),
        }
    }
}

/// Tap a shortcut and give the host time to react
fn slow_tap<W: HidWriter>(kb: &mut KeyboardState<'_, W>, key: HidKeyCode, modifiers: ModifierCombination) {
    kb.tap_key_with_modifiers(KeyCode::Hid(key), modifiers);
    let delay = kb.behavior().macros.tap_delay;
    kb.wait(delay);
}

fn tap_shifted<W: HidWriter>(kb: &mut KeyboardState<'_, W>, keys: &[HidKeyCode]) {
    kb.register_code(KeyCode::Hid(HidKeyCode::RShift));
    for &key in keys {
        kb.tap_code(KeyCode::Hid(key));
    }
    kb.unregister_code(KeyCode::Hid(HidKeyCode::RShift));
}

fn shrug<W: HidWriter>(kb: &mut KeyboardState<'_, W>) {
    // ¯
    kb.send_unicode(0xAF);
    kb.tap_code(KeyCode::Hid(HidKeyCode::Backslash));
    // _(
    tap_shifted(kb, &[HidKeyCode::Minus, HidKeyCode::Kc9]);
    // ツ
    kb.send_unicode(0x30C4);
    // )_
    tap_shifted(kb, &[HidKeyCode::Kc0, HidKeyCode::Minus]);
    kb.tap_code(KeyCode::Hid(HidKeyCode::Slash));
    kb.send_unicode(0xAF);
}
