pub mod common;

use ergodox::keymaps::{APPS, MDIA, Variant};
use ergodox::unicode::UnicodeMode;

use crate::common::{KC_LCTRL, KC_LGUI, KC_LSHIFT, create_test_keyboard, run_key_sequence, scan_for};

// Matrix positions on the base layer
// (5, 6): A_GUI, (5, 11): A_ENT, (2, 1): A, (5, 1): OSL(MDIA), (5, 12): OSL(SYMB)
// (0, 2): APP_SLK on APPS, (0, 1)/(0, 2)/(0, 3): LIN/WIN/OSX on MDIA, (2, 0): ⌘ on SYMB

#[test]
fn test_gui_tap_released_by_watchdog() {
    let mut keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 6, true, 10],
            [5, 6, false, 90],
        ],
        settle: 150,
        expected_reports: [
            [KC_LGUI, [0; 6]],
        ]
    );
    // GUI is still down within the tapping term after the release
    assert!(keyboard.hooks().gui_timer().is_some());

    scan_for(&mut keyboard, 100);
    let reports = keyboard.writer().keyboard_reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].modifier, 0);
    assert!(keyboard.hooks().gui_timer().is_none());

    // The watchdog fires once
    scan_for(&mut keyboard, 500);
    assert_eq!(keyboard.writer().keyboard_reports().len(), 2);
}

#[test]
fn test_gui_hold_as_modifier() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 6, true, 10],
            [2, 1, true, 30], // A decides A_GUI as a hold
            [2, 1, false, 30],
            [5, 6, false, 30],
        ],
        settle: 300,
        expected_reports: [
            [KC_LGUI, [0; 6]],
            [KC_LGUI, [kc8!(A), 0, 0, 0, 0, 0]],
            [KC_LGUI, [0; 6]],
            [0, [0; 6]], // Watchdog
        ]
    );
}

#[test]
fn test_gui_double_tap_selects_app() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 6, true, 10],
            [5, 6, false, 50],
            [5, 6, true, 50],  // Second tap: alfred, APPS armed
            [5, 6, false, 50],
            [0, 2, true, 300], // Slack on APPS
            [0, 2, false, 50],
        ],
        expected_reports: [
            [KC_LGUI, [0; 6]],
            [KC_LGUI, [0; 6]],
            [0, [0; 6]], // Watchdog
        ]
    );
    assert_eq!(
        keyboard.writer().console,
        vec!["CMD:appsel_alfred\n".to_string(), "CMD:appsel_slack\n".to_string()]
    );
    assert!(!keyboard.state().is_layer_on(APPS));
}

#[test]
fn test_app_key_while_gui_held_on_second_tap() {
    let mut keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 6, true, 10],
            [5, 6, false, 50],
            [5, 6, true, 50], // Second tap, A_GUI stays down
            [0, 2, true, 50], // Slack on APPS
            [0, 2, false, 50],
            [5, 6, false, 50], // APPS is done
        ],
        settle: 300,
        expected_reports: [
            [KC_LGUI, [0; 6]],
            [KC_LGUI, [0; 6]],
            [0, [0; 6]], // Watchdog
        ]
    );
    assert_eq!(
        keyboard.writer().console,
        vec!["CMD:appsel_alfred\n".to_string(), "CMD:appsel_slack\n".to_string()]
    );
    assert!(!keyboard.state().is_layer_on(APPS));
    assert_eq!(keyboard.state().oneshot_layer(), None);

    scan_for(&mut keyboard, 3000);
    assert!(!keyboard.state().is_layer_on(APPS));
}

#[test]
fn test_apps_layer_times_out() {
    let mut keyboard = create_test_keyboard(Variant::Kinesis);
    run_key_sequence(
        &mut keyboard,
        &key_sequence![[5, 6, true, 10], [5, 6, false, 50], [5, 6, true, 50], [5, 6, false, 50]],
    );
    assert!(keyboard.state().is_layer_on(APPS));
    assert_eq!(keyboard.state().oneshot_layer(), Some(APPS));
    scan_for(&mut keyboard, 1100);
    assert!(!keyboard.state().is_layer_on(APPS));
}

#[test]
fn test_enter_tap() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 11, true, 10],
            [5, 11, false, 50],
        ],
        settle: 300,
        expected_reports: [
            [0, [kc8!(Enter), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [0; 6]], // Watchdog
        ]
    );
}

#[test]
fn test_enter_hold_is_gui() {
    key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 11, true, 10],
            [2, 1, true, 30],
            [2, 1, false, 30],
            [5, 11, false, 30],
        ],
        settle: 300,
        expected_reports: [
            [KC_LGUI, [0; 6]],
            [KC_LGUI, [kc8!(A), 0, 0, 0, 0, 0]],
            [KC_LGUI, [0; 6]],
            [KC_LGUI, [0; 6]], // Enter release
            [0, [0; 6]],       // Watchdog
        ]
    );
}

#[test]
fn test_unicode_mode_keys() {
    let keyboard = key_sequence_test!(
        keyboard: create_test_keyboard(Variant::Kinesis),
        sequence: [
            [5, 1, true, 10],  // OSL(MDIA)
            [5, 1, false, 50],
            [0, 1, true, 50],  // LIN
            [0, 1, false, 50],
        ],
        expected_reports: []
    );
    assert_eq!(keyboard.state().unicode_mode(), UnicodeMode::Linux);
    // The mode keys are swallowed and leave the one-shot layer armed
    assert!(keyboard.state().is_layer_on(MDIA));

    let keyboard = key_sequence_test!(
        keyboard: keyboard,
        sequence: [
            [0, 2, true, 50], // WIN
            [0, 2, false, 50],
        ],
        expected_reports: []
    );
    assert_eq!(keyboard.state().unicode_mode(), UnicodeMode::Windows);
}

#[test]
fn test_unicode_default_mode_is_macos() {
    let keyboard = create_test_keyboard(Variant::Classic);
    assert_eq!(keyboard.state().unicode_mode(), UnicodeMode::MacOs);
}

#[test]
fn test_unicode_key_linux() {
    let mut keyboard = create_test_keyboard(Variant::Kinesis);
    keyboard.state_mut().set_unicode_mode(UnicodeMode::Linux);
    key_sequence_test!(
        keyboard: keyboard,
        sequence: [
            [5, 12, true, 10], // OSL(SYMB)
            [5, 12, false, 50],
            [2, 0, true, 50],  // ⌘
            [2, 0, false, 50],
        ],
        expected_reports: [
            [KC_LCTRL, [0; 6]],
            [KC_LCTRL | KC_LSHIFT, [0; 6]],
            [KC_LCTRL | KC_LSHIFT, [kc8!(U), 0, 0, 0, 0, 0]],
            [KC_LCTRL | KC_LSHIFT, [0; 6]],
            [KC_LCTRL, [0; 6]],
            [0, [0; 6]],
            [0, [kc8!(Kc2), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(Kc3), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(Kc1), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(Kc8), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
            [0, [kc8!(Space), 0, 0, 0, 0, 0]],
            [0, [0; 6]],
        ]
    );
}
