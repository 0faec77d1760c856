//! Layers shared by all variants.
use ergodox_types::action::KeyAction;
use ergodox_types::modifier::ModifierCombination;

use super::{APP_CHRM, APP_EMCS, APP_MAIL, APP_PSTBX, APP_SFRI, APP_SLK, APP_TERM, APP_TLGRM, LIN, OSX, WIN};
use crate::layout::{Layer, ergodox_layer};
use crate::{a, k, m, osm, s, uc, user};

pub(super) const TRNS: KeyAction = a!(Transparent);
pub(super) const NO: KeyAction = a!(No);

/// ⌘
const PLACE_OF_INTEREST: u32 = 0x2318;

/// Symbols and the numpad
#[rustfmt::skip]
pub(super) const SYMB_LAYER: Layer = ergodox_layer([
    // left hand
    TRNS,                 k!(F1),      k!(F2),      k!(F3),          k!(F4),           k!(F5),         k!(F11),
    TRNS,                 s!(Kc1),     s!(Kc2),     s!(LeftBracket), s!(RightBracket), s!(Backslash),  k!(Home),
    uc!(PLACE_OF_INTEREST), s!(Kc3),   s!(Kc4),     s!(Kc9),         s!(Kc0),          k!(Grave),
    TRNS,                 s!(Kc5),     s!(Kc6),     k!(LeftBracket), k!(RightBracket), s!(Grave),      k!(End),
    TRNS,                 TRNS,        TRNS,        TRNS,            TRNS,
                                                                                        TRNS, TRNS,
                                                                                              TRNS,
                                                                                  TRNS, TRNS, TRNS,
    // right hand
    k!(F12),     k!(F6),     k!(F7),  k!(F8),  k!(F9),    k!(F10),     TRNS,
    k!(PageUp),  k!(Minus),  k!(Kc7), k!(Kc8), k!(Kc9),   s!(Kc8),     TRNS,
                 s!(Minus),  k!(Kc4), k!(Kc5), k!(Kc6),   s!(Equal),   TRNS,
    k!(PageDown), s!(Kc7),   k!(Kc1), k!(Kc2), k!(Kc3),   k!(Backslash), TRNS,
                             TRNS,    k!(Dot), k!(Kc0),   k!(Equal),   TRNS,
    TRNS, TRNS,
    TRNS,
    TRNS, TRNS, TRNS,
]);

/// Media keys, mouse keys and the unicode input mode selection
#[rustfmt::skip]
pub(super) const MDIA_LAYER: Layer = ergodox_layer([
    // left hand
    TRNS, user!(LIN), user!(WIN),     user!(OSX),     TRNS,           TRNS,           TRNS,
    TRNS, TRNS,       k!(MouseBtn2),  k!(MouseUp),    k!(MouseBtn1),  k!(MouseBtn3),  TRNS,
    TRNS, TRNS,       k!(MouseLeft),  k!(MouseDown),  k!(MouseRight), TRNS,
    TRNS, TRNS,       TRNS,           TRNS,           TRNS,           TRNS,           TRNS,
    TRNS, TRNS,       TRNS,           TRNS,           TRNS,
                                                                      TRNS, TRNS,
                                                                            TRNS,
                                                                TRNS, TRNS, TRNS,
    // right hand
    TRNS, TRNS,              TRNS,                 TRNS,                  TRNS,                   TRNS,                  TRNS,
    TRNS, TRNS,              k!(MouseBtn3),        k!(MouseWheelUp),      TRNS,                   TRNS,                  TRNS,
          k!(MouseWheelLeft), k!(MouseBtn1),       k!(MouseWheelDown),    k!(MouseBtn2),          k!(MouseWheelRight),   k!(MediaPlayPause),
    TRNS, TRNS,              TRNS,                 k!(MediaPrevTrack),    k!(MediaNextTrack),     TRNS,                  TRNS,
                             k!(AudioVolDown),     k!(AudioVolUp),        k!(AudioMute),          TRNS,                  TRNS,
    TRNS, TRNS,
    TRNS,
    TRNS, TRNS, k!(WwwBack),
]);

/// Arrows and page navigation on the home rows of both halves
#[rustfmt::skip]
pub(super) const ARRW_LAYER: Layer = ergodox_layer([
    // left hand
    TRNS, TRNS, TRNS,     TRNS,         TRNS,       TRNS,      TRNS,
    TRNS, TRNS, k!(Home), k!(PageDown), k!(PageUp), k!(End),   TRNS,
    TRNS, TRNS, k!(Left), k!(Down),     k!(Up),     k!(Right),
    TRNS, TRNS, TRNS,     TRNS,         TRNS,       TRNS,      TRNS,
    TRNS, TRNS, TRNS,     TRNS,         TRNS,
                                                    TRNS, TRNS,
                                                          TRNS,
                                              TRNS, TRNS, TRNS,
    // right hand
    TRNS, TRNS,     TRNS,         TRNS,       TRNS,      TRNS, TRNS,
    TRNS, k!(Home), k!(PageDown), k!(PageUp), k!(End),   TRNS, TRNS,
          k!(Left), k!(Down),     k!(Up),     k!(Right), TRNS, TRNS,
    TRNS, TRNS,     TRNS,         TRNS,       TRNS,      TRNS, TRNS,
                    TRNS,         TRNS,       TRNS,      TRNS, TRNS,
    TRNS, TRNS,
    TRNS,
    TRNS, TRNS, TRNS,
]);

/// App selection on the number row, armed by a double tap of a GUI key
#[rustfmt::skip]
pub(super) const APPS_LAYER: Layer = ergodox_layer([
    // left hand
    TRNS, m!(APP_SFRI), m!(APP_SLK), m!(APP_EMCS), m!(APP_TERM), m!(APP_CHRM), TRNS,
    TRNS, TRNS,         TRNS,        TRNS,         TRNS,         TRNS,         TRNS,
    TRNS, TRNS,         TRNS,        TRNS,         TRNS,         TRNS,
    TRNS, TRNS,         TRNS,        TRNS,         TRNS,         TRNS,         TRNS,
    TRNS, TRNS,         TRNS,        TRNS,         TRNS,
                                                                 TRNS, TRNS,
                                                                       TRNS,
                                                           TRNS, TRNS, TRNS,
    // right hand
    TRNS, m!(APP_TLGRM), m!(APP_MAIL), m!(APP_PSTBX), NO,   NO,   TRNS,
    TRNS, TRNS,          TRNS,         TRNS,          TRNS, TRNS, TRNS,
          TRNS,          TRNS,         TRNS,          TRNS, TRNS, TRNS,
    TRNS, TRNS,          TRNS,         TRNS,          TRNS, TRNS, TRNS,
                         TRNS,         TRNS,          TRNS, TRNS, TRNS,
    TRNS, TRNS,
    TRNS,
    TRNS, TRNS, TRNS,
]);

/// One-shot shift, ctrl and alt
pub(super) const OSM_SHIFT: KeyAction = osm!(ModifierCombination::LSHIFT);
pub(super) const OSM_CTRL: KeyAction = osm!(ModifierCombination::LCTRL);
pub(super) const OSM_ALT: KeyAction = osm!(ModifierCombination::LALT);
