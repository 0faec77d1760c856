//! Modifier sets, laid out exactly like the modifier byte of a HID keyboard report.
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// | bit7 | bit6 | bit5 | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- | --- | --- | --- |
/// | RGUI | RALT | RSHIFT | RCTRL | LGUI | LALT | LSHIFT | LCTRL |
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_left_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_left_shift(true);
    pub const LALT: Self = Self::new().with_left_alt(true);
    pub const LGUI: Self = Self::new().with_left_gui(true);
    pub const RCTRL: Self = Self::new().with_right_ctrl(true);
    pub const RSHIFT: Self = Self::new().with_right_shift(true);
    pub const RALT: Self = Self::new().with_right_alt(true);
    pub const RGUI: Self = Self::new().with_right_gui(true);

    /// Union usable in `const` keymap tables
    pub const fn and(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() == 0
    }

    /// Returns `true` if every modifier of `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.into_bits() & other.into_bits() == other.into_bits()
    }
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}
impl BitAnd for ModifierCombination {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}
impl Not for ModifierCombination {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}
impl BitAndAssign for ModifierCombination {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
impl BitOrAssign for ModifierCombination {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_bits() {
        assert_eq!(ModifierCombination::LCTRL.into_bits(), 0x01);
        assert_eq!(ModifierCombination::LSHIFT.into_bits(), 0x02);
        assert_eq!(ModifierCombination::LALT.into_bits(), 0x04);
        assert_eq!(ModifierCombination::LGUI.into_bits(), 0x08);
        assert_eq!(ModifierCombination::RSHIFT.into_bits(), 0x20);
        assert_eq!(
            ModifierCombination::LSHIFT.and(ModifierCombination::LCTRL).into_bits(),
            0x03
        );
    }

    #[test]
    fn test_set_operations() {
        let held = ModifierCombination::LGUI | ModifierCombination::LCTRL;
        assert!(held.contains(ModifierCombination::LGUI));
        assert!(!held.contains(ModifierCombination::LSHIFT));
        assert_eq!(held & !ModifierCombination::LGUI, ModifierCombination::LCTRL);
        assert!(ModifierCombination::new().is_empty());
    }
}
