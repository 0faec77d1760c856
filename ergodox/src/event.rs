use serde::{Deserialize, Serialize};

/// A debounced state change of one switch of the matrix
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn release(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            pressed: false,
        }
    }

    pub(crate) fn same_key(&self, other: &KeyEvent) -> bool {
        self.row == other.row && self.col == other.col
    }
}

/// Tap information of a tap/hold key.
///
/// `count` is 0 for a hold and the number of consecutive taps otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapState {
    pub count: u8,
    pub interrupted: bool,
}

/// A key event after tap/hold resolution, as handed to the layout hooks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub event: KeyEvent,
    pub tap: TapState,
}

impl KeyRecord {
    pub const fn new(event: KeyEvent) -> Self {
        Self {
            event,
            tap: TapState {
                count: 0,
                interrupted: false,
            },
        }
    }

    pub const fn with_tap(event: KeyEvent, count: u8, interrupted: bool) -> Self {
        Self {
            event,
            tap: TapState { count, interrupted },
        }
    }

    pub fn pressed(&self) -> bool {
        self.event.pressed
    }
}
