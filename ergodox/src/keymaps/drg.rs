use embassy_time::Instant;
use ergodox_types::action::{Action, KeyAction};
use ergodox_types::keycode::{HidKeyCode, KeyCode};
use ergodox_types::modifier::ModifierCombination;
use ergodox_types::unicode::UnicodeMode;

use super::leader_dict::lookup;
use super::{
    A_ENT, A_GUI, APP_CHRM, APP_EMCS, APP_MAIL, APP_PSTBX, APP_SFRI, APP_SLK, APP_TERM, APP_TLGRM, APPS, ARRW, CT_CLN,
    CT_LBP, CT_RBP, CT_TA, LIN, MDIA, NONE, OSX, SYMB, Variant, WIN,
};
use crate::event::KeyRecord;
use crate::hid::HidWriter;
use crate::hooks::KeymapHooks;
use crate::keyboard::KeyboardState;
use crate::tap_dance::{TapDance, TapDanceState};

/// What the last `CT_TA` dance did to the aux layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapArrowState {
    /// The dance turned the aux layer on
    pub layer_toggle: bool,
    /// The aux layer stays on after the key is released, until the next `CT_TA`
    pub sticky: bool,
}

/// Hooks of the personal layouts
#[derive(Debug)]
pub struct DrgKeymap {
    variant: Variant,
    /// Release time of a GUI key, the watchdog releases LGUI once the tapping term passed
    gui_timer: Option<Instant>,
    tap_arrow: TapArrowState,
}

impl DrgKeymap {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            gui_timer: None,
            tap_arrow: TapArrowState::default(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn gui_timer(&self) -> Option<Instant> {
        self.gui_timer
    }

    pub fn tap_arrow(&self) -> TapArrowState {
        self.tap_arrow
    }

    fn gui_macro<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, record: &KeyRecord) {
        let count = record.tap.count;
        if record.pressed() {
            kb.register_code(KeyCode::Hid(HidKeyCode::LGui));
            if count >= 2 && !record.tap.interrupted {
                kb.print("CMD:appsel_alfred\n");
                kb.layer_on(APPS);
                kb.set_oneshot_layer(APPS);
            }
            self.gui_timer = None;
        } else {
            if count >= 2 {
                kb.clear_oneshot_layer_pressed();
            }
            self.gui_timer = Some(kb.now());
        }
    }

    fn enter_macro<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, record: &KeyRecord) {
        if record.pressed() {
            if record.tap.count > 0 && !record.tap.interrupted {
                kb.register_code(KeyCode::Hid(HidKeyCode::Enter));
            } else {
                kb.register_code(KeyCode::Hid(HidKeyCode::LGui));
                self.gui_timer = None;
            }
        } else {
            self.gui_timer = Some(kb.now());
            kb.unregister_code(KeyCode::Hid(HidKeyCode::Enter));
        }
    }

    /// Releases LGUI held by a GUI macro key once the tapping term passed after its release
    fn gui_watchdog<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>) {
        let Some(released_at) = self.gui_timer else {
            return;
        };
        if kb.now().saturating_duration_since(released_at) > kb.behavior().tap_hold.tapping_term {
            kb.unregister_code(KeyCode::Hid(HidKeyCode::LGui));
            self.gui_timer = None;
        }
    }
}

fn app_select_line(id: u8) -> Option<&'static str> {
    let line = match id {
        APP_SFRI => "CMD:appsel_web\n",
        APP_SLK => "CMD:appsel_slack\n",
        APP_EMCS => "CMD:appsel_emacs\n",
        APP_TERM => "CMD:appsel_term\n",
        APP_CHRM => "CMD:appsel_chrome\n",
        APP_TLGRM => "CMD:appsel_telegram\n",
        APP_MAIL => "CMD:appsel_mail\n",
        APP_PSTBX => "CMD:appsel_postbox\n",
        _ => return None,
    };
    Some(line)
}

const fn key(k: HidKeyCode) -> Action {
    Action::Key(KeyCode::Hid(k))
}

const fn shifted(k: HidKeyCode) -> Action {
    Action::KeyWithModifier(KeyCode::Hid(k), ModifierCombination::LSHIFT)
}

impl KeymapHooks for DrgKeymap {
    fn matrix_init<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>) {
        kb.set_unicode_mode(UnicodeMode::MacOs);
    }

    fn matrix_scan<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>) {
        self.gui_watchdog(kb);

        let layer = kb.highest_layer();
        let leds = kb.leds_mut();
        leds.all_off();
        match layer {
            SYMB => leds.set_right(1, true),
            MDIA => leds.set_right(2, true),
            _ => (),
        }
    }

    fn process_record<W: HidWriter>(
        &mut self,
        kb: &mut KeyboardState<'_, W>,
        action: KeyAction,
        record: &KeyRecord,
    ) -> bool {
        match action {
            KeyAction::Single(Action::User(id @ (LIN | WIN | OSX))) => {
                if record.pressed() {
                    let mode = match id {
                        LIN => UnicodeMode::Linux,
                        WIN => UnicodeMode::Windows,
                        _ => UnicodeMode::MacOs,
                    };
                    kb.set_unicode_mode(mode);
                }
                false
            }
            KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::Escape))) if record.pressed() => {
                // Escape cancels pending one-shot modifiers instead of being sent
                if kb.oneshot_modifiers_pending() && !kb.oneshot_modifiers_timed_out() {
                    kb.clear_oneshot_modifiers();
                    return false;
                }
                true
            }
            _ => true,
        }
    }

    fn process_macro<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, id: u8, record: &KeyRecord) {
        match id {
            NONE => {
                if record.pressed() {
                    kb.register_code(KeyCode::Hid(HidKeyCode::RShift));
                } else {
                    kb.unregister_code(KeyCode::Hid(HidKeyCode::RShift));
                }
            }
            A_GUI => self.gui_macro(kb, record),
            A_ENT => self.enter_macro(kb, record),
            _ => match app_select_line(id) {
                Some(line) if record.pressed() => kb.print(line),
                Some(_) => (),
                None => warn!("Unknown macro {}", id),
            },
        }
    }

    fn tap_dance(&self, id: u8) -> Option<TapDance> {
        match id {
            CT_CLN => Some(TapDance::Double(shifted(HidKeyCode::Semicolon), key(HidKeyCode::Semicolon))),
            CT_LBP => Some(TapDance::Double(key(HidKeyCode::LeftBracket), shifted(HidKeyCode::Kc9))),
            CT_RBP => Some(TapDance::Double(key(HidKeyCode::RightBracket), shifted(HidKeyCode::Kc0))),
            CT_TA if self.variant != Variant::Classic => Some(TapDance::Custom),
            _ => None,
        }
    }

    /// `CT_TA`: a single tap sends Gui+Space, a hold turns the aux layer on
    /// while held, a double tap leaves it on until the next press
    fn tap_dance_finished<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, state: &TapDanceState) {
        if state.id != CT_TA {
            return;
        }
        if self.tap_arrow.sticky {
            self.tap_arrow = TapArrowState::default();
            kb.layer_off(ARRW);
            return;
        }
        if state.count == 1 && !state.pressed {
            kb.register_code(KeyCode::Hid(HidKeyCode::LGui));
            kb.register_code(KeyCode::Hid(HidKeyCode::Space));
            self.tap_arrow = TapArrowState::default();
        } else {
            kb.layer_on(ARRW);
            self.tap_arrow = TapArrowState {
                layer_toggle: true,
                sticky: state.count == 2,
            };
        }
    }

    fn tap_dance_reset<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, state: &TapDanceState) {
        if state.id != CT_TA {
            return;
        }
        if !self.tap_arrow.layer_toggle {
            kb.unregister_code(KeyCode::Hid(HidKeyCode::Space));
            kb.unregister_code(KeyCode::Hid(HidKeyCode::LGui));
        }
        if !self.tap_arrow.sticky {
            kb.layer_off(ARRW);
        }
    }

    fn leader_sequence<W: HidWriter>(&mut self, kb: &mut KeyboardState<'_, W>, sequence: &[HidKeyCode]) {
        match lookup(sequence) {
            Some(command) => {
                debug!("Leader command {:?}", command);
                command.run(kb);
            }
            None => debug!("No leader command for {:?}", sequence),
        }
    }
}
