//! Classic ErgoDox base layer: Escape on the home row, arrows on the quote key.
use ergodox_types::modifier::ModifierCombination;

use super::layers::{APPS_LAYER, ARRW_LAYER, MDIA_LAYER, NO, OSM_ALT, OSM_CTRL, OSM_SHIFT, SYMB_LAYER};
use super::{A_ENT, A_GUI, ARRW, CT_LBP, CT_RBP, MDIA, SYMB};
use crate::layout::{Layer, NUM_LAYER, ergodox_layer};
use crate::{k, lead, lt, mt, osl, td, tm, tt, wm};

#[rustfmt::skip]
const BASE_LAYER: Layer = ergodox_layer([
    // left hand
    k!(Grave),  k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Delete),
    k!(Tab),    k!(Q),   k!(W),   k!(E),   k!(R),   k!(T),   td!(CT_LBP),
    k!(Escape), k!(A),   k!(S),   k!(D),   k!(F),   k!(G),
    OSM_SHIFT,  k!(Z),   k!(X),   k!(C),   k!(V),   k!(B),   k!(Equal),
    tt!(SYMB),  NO,      NO,      NO,      k!(Grave),
                                                      OSM_CTRL, tm!(A_GUI),
                                                                OSM_ALT,
                        k!(Backspace), wm!(Space, ModifierCombination::LGUI), osl!(MDIA),
    // right hand
    k!(Insert),  k!(Kc6), k!(Kc7), k!(Kc8),    k!(Kc9), k!(Kc0),                                k!(KbPower),
    td!(CT_RBP), k!(Y),   k!(U),   k!(I),      k!(O),   k!(P),                                  k!(Backslash),
                 k!(H),   k!(J),   k!(K),      k!(L),   k!(Semicolon),                          lt!(ARRW, Quote),
    k!(Minus),   k!(N),   k!(M),   k!(Comma),  k!(Dot), mt!(Slash, ModifierCombination::LCTRL), OSM_SHIFT,
                          k!(Backslash), NO,   NO,      NO,                                     tt!(MDIA),
    lead!(), tm!(A_GUI),
    OSM_ALT,
    osl!(SYMB), tm!(A_ENT), k!(Space),
]);

pub(super) static LAYERS: [Layer; NUM_LAYER] = [BASE_LAYER, SYMB_LAYER, MDIA_LAYER, ARRW_LAYER, APPS_LAYER];
