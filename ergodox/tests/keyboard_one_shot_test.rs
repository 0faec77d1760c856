pub mod common;

use ergodox::keymaps::{SYMB, Variant};

use crate::common::{KC_LCTRL, KC_LSHIFT, create_test_keyboard};

// Matrix positions on the base layer
// (3, 0): one-shot shift, (5, 5): one-shot ctrl, (2, 1): A, (5, 2): Escape, (5, 12): one-shot SYMB
// (5, 11): A_ENT, (1, 6): CT_LBP

#[test]
fn test_osm_applies_to_next_key() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],  // Press OSM shift
            [3, 0, false, 50], // Release OSM shift
            [2, 1, true, 50],  // Press A
            [2, 1, false, 50], // Release A
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osm_applies_to_one_key_only() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [2, 1, true, 50],
            [2, 1, false, 50],
            [2, 1, true, 50],
            [2, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osm_held_acts_as_modifier() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],  // Press OSM shift
            [2, 1, true, 50],  // Press A while OSM is held
            [2, 1, false, 50], // Release A
            [3, 0, false, 50], // Release OSM shift
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(A), 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [0; 6]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osm_times_out() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [2, 1, true, 1100], // One-shot timeout passed
            [2, 1, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_escape_cancels_osm() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [5, 2, true, 50],  // Escape press is swallowed
            [5, 2, false, 50], // Escape release goes through
            [2, 1, true, 50],
            [2, 1, false, 50],
        ],
        expected_reports: [
            [0, [0; 6]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
    assert_eq!(keyboard.state().oneshot_modifiers(), None);
}

#[test]
fn test_escape_with_held_osm_is_sent() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 5, true, 10],  // Hold OSM ctrl
            [5, 2, true, 400], // Ctrl+Escape
            [5, 2, false, 50],
            [5, 5, false, 50],
        ],
        expected_reports: [
            [KC_LCTRL, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [KC_LCTRL, [0; 6]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_escape_without_osm() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 2, true, 10],
            [5, 2, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Escape), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osl_applies_to_next_key() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 12, true, 10],  // Press OSL(SYMB)
            [5, 12, false, 50], // Release OSL(SYMB)
            [1, 9, true, 50],   // 7 on SYMB
            [1, 9, false, 50],
            [1, 9, true, 50],   // U on the base layer
            [1, 9, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Kc7), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(U), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
    assert!(!keyboard.state().is_layer_on(SYMB));
}

#[test]
fn test_osl_held_acts_as_momentary_layer() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 12, true, 10],
            [1, 9, true, 50],
            [1, 9, false, 50],
            [1, 10, true, 50],  // 8 on SYMB
            [1, 10, false, 50],
            [5, 12, false, 50],
        ],
        expected_reports: [
            [0, [kc8!(Kc7), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(Kc8), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
    assert!(!keyboard.state().is_layer_on(SYMB));
}

#[test]
fn test_osl_times_out() {
    let mut keyboard = create_test_keyboard(Variant::Kinesis);
    common::run_key_sequence(&mut keyboard, &key_sequence![[5, 12, true, 10], [5, 12, false, 50]]);
    assert!(keyboard.state().is_layer_on(SYMB));
    common::scan_for(&mut keyboard, 1100);
    assert!(!keyboard.state().is_layer_on(SYMB));
}

#[test]
fn test_osm_applies_to_tap_macro_only() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [5, 11, true, 50], // Tap A_ENT
            [5, 11, false, 50],
            [2, 1, true, 300],
            [2, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(Enter), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [0; 6]], // Watchdog
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osm_applies_to_tap_dance_only() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [1, 6, true, 50], // Tap CT_LBP
            [1, 6, false, 50],
            [2, 1, true, 300],
            [2, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(LeftBracket), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
    assert_eq!(keyboard.state().oneshot_modifiers(), None);
}

#[test]
fn test_osm_used_by_tap_dance_interrupted_by_next_key() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],
            [3, 0, false, 50],
            [1, 6, true, 50],
            [1, 6, false, 50],
            [2, 1, true, 50], // Finishes the dance before A
            [2, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(LeftBracket), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}

#[test]
fn test_osm_held_during_tap_dance_acts_as_modifier() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [3, 0, true, 10],  // Hold OSM shift
            [1, 6, true, 50],  // Tap CT_LBP
            [1, 6, false, 50],
            [3, 0, false, 300], // Release shift after the dance finished
            [2, 1, true, 50],
            [2, 1, false, 50],
        ],
        expected_reports: [
            [KC_LSHIFT, [kc8!(LeftBracket), 0, 0, 0, 0, 0]],
            [KC_LSHIFT, [0; 6]],
            [0, [0; 6]],
            [0, [kc8!(A), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}
