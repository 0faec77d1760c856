//! Kinesis style base layer, with a Dvorak alpha overlay toggled by the tap-arrow dance.
use ergodox_types::modifier::ModifierCombination;

use super::layers::{APPS_LAYER, MDIA_LAYER, NO, OSM_ALT, OSM_CTRL, OSM_SHIFT, SYMB_LAYER, TRNS};
use super::{A_ENT, A_GUI, CT_CLN, CT_LBP, CT_RBP, CT_TA, MDIA, SYMB};
use crate::layout::{Layer, NUM_LAYER, ergodox_layer};
use crate::{k, lead, mt, osl, td, tm, tt};

#[rustfmt::skip]
const BASE_LAYER: Layer = ergodox_layer([
    // left hand
    k!(Grave),  k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Delete),
    k!(Tab),    k!(Q),   k!(W),   k!(E),   k!(R),   k!(T),   td!(CT_LBP),
    td!(CT_TA), k!(A),   k!(S),   k!(D),   k!(F),   k!(G),
    OSM_SHIFT,  k!(Z),   k!(X),   k!(C),   k!(V),   k!(B),   k!(Equal),
    tt!(SYMB),  NO,      NO,      NO,      k!(Grave),
                                                      OSM_CTRL, tm!(A_GUI),
                                                                OSM_ALT,
                                          k!(Backspace), k!(Escape), osl!(MDIA),
    // right hand
    k!(Insert),  k!(Kc6), k!(Kc7), k!(Kc8),    k!(Kc9), k!(Kc0),                                k!(KbPower),
    td!(CT_RBP), k!(Y),   k!(U),   k!(I),      k!(O),   k!(P),                                  k!(Backslash),
                 k!(H),   k!(J),   k!(K),      k!(L),   k!(Semicolon),                          k!(Quote),
    k!(Minus),   k!(N),   k!(M),   k!(Comma),  k!(Dot), mt!(Slash, ModifierCombination::LCTRL), OSM_SHIFT,
                          k!(Backslash), NO,   NO,      NO,                                     tt!(MDIA),
    lead!(), tm!(A_GUI),
    OSM_ALT,
    osl!(SYMB), tm!(A_ENT), k!(Space),
]);

/// Dvorak letters over the QWERTY alpha block, everything else falls through
#[rustfmt::skip]
const DVRK_LAYER: Layer = ergodox_layer([
    // left hand
    TRNS, TRNS,        TRNS,      TRNS,    TRNS, TRNS, TRNS,
    TRNS, k!(Quote),   k!(Comma), k!(Dot), k!(P), k!(Y), TRNS,
    TRNS, k!(A),       k!(O),     k!(E),   k!(U), k!(I),
    TRNS, td!(CT_CLN), k!(Q),     k!(J),   k!(K), k!(X), TRNS,
    TRNS, TRNS,        TRNS,      TRNS,    TRNS,
                                                  TRNS, TRNS,
                                                        TRNS,
                                            TRNS, TRNS, TRNS,
    // right hand
    TRNS, TRNS,  TRNS,  TRNS,  TRNS,  TRNS,  TRNS,
    TRNS, k!(F), k!(G), k!(C), k!(R), k!(L), k!(Slash),
          k!(D), k!(H), k!(T), k!(N), k!(S), k!(Minus),
    TRNS, k!(B), k!(M), k!(W), k!(V), k!(Z), TRNS,
                 TRNS,  TRNS,  TRNS,  TRNS,  TRNS,
    TRNS, TRNS,
    TRNS,
    TRNS, TRNS, TRNS,
]);

pub(super) static LAYERS: [Layer; NUM_LAYER] = [BASE_LAYER, SYMB_LAYER, MDIA_LAYER, DVRK_LAYER, APPS_LAYER];
