//! The personal layouts.
//!
//! All variants share the symbol, media/mouse and app-select layers, one-shot
//! modifiers on the thumbs and outer columns, and the same hooks ([`DrgKeymap`]).
//! They differ in the base layer and in the aux layer 3:
//!
//! - [`Variant::Kinesis`]: modifiers placed like on a Kinesis Advantage, arrow layer on `CT_TA`
//! - [`Variant::Dvorak`]: same base, `CT_TA` toggles a Dvorak alpha overlay
//! - [`Variant::Classic`]: Escape on the home row, arrow layer only on the quote key
mod classic;
mod drg;
mod dvorak;
mod kinesis;
mod layers;
mod leader_dict;

pub use drg::{DrgKeymap, TapArrowState};
pub use leader_dict::{LEADER_SEQUENCES, LeaderCommand};

use crate::config::BehaviorConfig;
use crate::hid::HidWriter;
use crate::keyboard::Keyboard;
use crate::layout::{Layer, NUM_LAYER};

// Layers
pub const BASE: u8 = 0;
pub const SYMB: u8 = 1;
pub const MDIA: u8 = 2;
pub const ARRW: u8 = 3;
pub const DVRK: u8 = 3;
pub const APPS: u8 = 4;

// Layout specific keycodes, select the unicode input mode
pub const LIN: u8 = 0;
pub const WIN: u8 = 1;
pub const OSX: u8 = 2;

// Tap dances
pub const CT_CLN: u8 = 0;
pub const CT_LBP: u8 = 1;
pub const CT_RBP: u8 = 2;
pub const CT_TA: u8 = 3;

// Macros
pub const NONE: u8 = 0;
pub const A_GUI: u8 = 1;
pub const APP_SFRI: u8 = 2;
pub const APP_SLK: u8 = 3;
pub const APP_EMCS: u8 = 4;
pub const APP_TERM: u8 = 5;
pub const APP_CHRM: u8 = 6;
pub const APP_TLGRM: u8 = 7;
pub const APP_MAIL: u8 = 8;
pub const APP_PSTBX: u8 = 9;
pub const A_ENT: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    Kinesis,
    Dvorak,
    Classic,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Kinesis, Variant::Dvorak, Variant::Classic];

    pub fn layers(self) -> &'static [Layer; NUM_LAYER] {
        match self {
            Variant::Kinesis => &kinesis::LAYERS,
            Variant::Dvorak => &dvorak::LAYERS,
            Variant::Classic => &classic::LAYERS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Kinesis => "kinesis",
            Variant::Dvorak => "dvorak",
            Variant::Classic => "classic",
        }
    }
}

/// Keyboard running the layout `variant` with the default behavior config
pub fn keyboard<W: HidWriter>(variant: Variant, writer: W) -> Keyboard<'static, DrgKeymap, W> {
    keyboard_with_config(variant, BehaviorConfig::default(), writer)
}

pub fn keyboard_with_config<W: HidWriter>(
    variant: Variant,
    behavior: BehaviorConfig,
    writer: W,
) -> Keyboard<'static, DrgKeymap, W> {
    Keyboard::new(variant.layers(), behavior, DrgKeymap::new(variant), writer)
}
