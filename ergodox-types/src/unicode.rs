//! Host side unicode input methods.
use serde::{Deserialize, Serialize};

/// How the host expects a unicode code point to be typed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnicodeMode {
    /// Hold Alt and type the hex digits, needs the "Unicode Hex Input" source
    #[default]
    MacOs,
    /// `Ctrl+Shift+U`, hex digits, then space (IBus)
    Linux,
    /// Hold Alt, keypad plus, then hex digits (needs `EnableHexNumpad`)
    Windows,
}
