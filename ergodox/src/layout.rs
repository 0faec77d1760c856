//! Physical layout of the ErgoDox EZ.
//!
//! The matrix is 6 rows by 14 columns, left half in columns 0-6 and right half
//! in columns 7-13. Only 76 of the 84 matrix positions carry a switch.
use ergodox_types::action::KeyAction;

pub const ROW: usize = 6;
pub const COL: usize = 14;
/// Number of physical keys
pub const KEY_COUNT: usize = 76;
/// Number of layers of every layout variant
pub const NUM_LAYER: usize = 5;

/// One layer of the matrix
pub type Layer = [[KeyAction; COL]; ROW];

/// Matrix position of every key, in the order keys are written in a layer
/// definition: the whole left half (five rows, then the thumb cluster), then
/// the whole right half.
#[rustfmt::skip]
pub const LAYOUT_POSITIONS: [(u8, u8); KEY_COUNT] = [
    // left hand
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
    (1, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6),
    (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
    (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6),
    (4, 0), (4, 1), (4, 2), (4, 3), (4, 4),
    // left thumb: two top keys, the upper single key, the three large keys
    (5, 5), (5, 6),
    (5, 4),
    (5, 3), (5, 2), (5, 1),
    // right hand
    (0, 7), (0, 8), (0, 9), (0, 10), (0, 11), (0, 12), (0, 13),
    (1, 7), (1, 8), (1, 9), (1, 10), (1, 11), (1, 12), (1, 13),
    (2, 8), (2, 9), (2, 10), (2, 11), (2, 12), (2, 13),
    (3, 7), (3, 8), (3, 9), (3, 10), (3, 11), (3, 12), (3, 13),
    (4, 9), (4, 10), (4, 11), (4, 12), (4, 13),
    // right thumb
    (5, 7), (5, 8),
    (5, 9),
    (5, 12), (5, 11), (5, 10),
];

/// Build a matrix layer from the 76 keys in layout order.
///
/// Matrix positions without a switch hold `KeyAction::No`.
pub const fn ergodox_layer(keys: [KeyAction; KEY_COUNT]) -> Layer {
    let mut layer = [[KeyAction::No; COL]; ROW];
    let mut i = 0;
    while i < KEY_COUNT {
        let (row, col) = LAYOUT_POSITIONS[i];
        layer[row as usize][col as usize] = keys[i];
        i += 1;
    }
    layer
}
