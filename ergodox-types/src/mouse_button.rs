//! Mouse button state, one bit per button as in the HID mouse report.
use core::ops::{BitAnd, BitOr, Not};

use bitfield_struct::bitfield;

#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct MouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool,
    #[bits(1)]
    pub button5: bool,
    #[bits(3)]
    _reserved: u8,
}

impl MouseButtons {
    /// Button bit for a 1-based button number, empty for unknown buttons
    pub const fn from_number(number: u8) -> Self {
        match number {
            1..=5 => Self::from_bits(1 << (number - 1)),
            _ => Self::new(),
        }
    }
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for MouseButtons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for MouseButtons {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
