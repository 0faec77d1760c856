pub mod common;

use ergodox::hid::{MouseReport, Report};
use ergodox::keymaps::{MDIA, Variant};

use crate::common::{TestKeyboard, create_test_keyboard, run_key_sequence};

// Matrix positions
// (5, 1): OSL(MDIA), on MDIA: (1, 3): mouse up, (1, 4): button 1, (1, 10): wheel up

fn mouse_reports(keyboard: &TestKeyboard) -> Vec<MouseReport> {
    keyboard
        .writer()
        .reports
        .iter()
        .filter_map(|r| match r {
            Report::MouseReport(report) => Some(*report),
            _ => None,
        })
        .collect()
}

fn moved(y: i8) -> MouseReport {
    MouseReport {
        y,
        ..Default::default()
    }
}

#[test]
fn test_mouse_move_repeats_while_held() {
    let mut keyboard = create_test_keyboard(Variant::Kinesis);
    run_key_sequence(
        &mut keyboard,
        &key_sequence![
            [5, 1, true, 10],   // Hold OSL(MDIA)
            [1, 3, true, 20],   // Mouse up
            [1, 3, false, 120], // Two more reports while held
            [5, 1, false, 20],
        ],
    );

    assert_eq!(mouse_reports(&keyboard), vec![moved(-8), moved(-8), moved(-8), moved(0)]);
    assert!(keyboard.writer().keyboard_reports().is_empty());
    assert!(!keyboard.state().is_layer_on(MDIA));
}

#[test]
fn test_mouse_button_and_wheel() {
    let mut keyboard = create_test_keyboard(Variant::Kinesis);
    run_key_sequence(
        &mut keyboard,
        &key_sequence![
            [5, 1, true, 10],
            [1, 4, true, 20], // Button 1
            [1, 4, false, 20],
            [1, 10, true, 20], // Wheel up
            [1, 10, false, 20],
            [5, 1, false, 20],
        ],
    );

    let button = MouseReport {
        buttons: 0b1,
        ..Default::default()
    };
    let wheel = MouseReport {
        wheel: 1,
        ..Default::default()
    };
    assert_eq!(
        mouse_reports(&keyboard),
        vec![button, MouseReport::default(), wheel, MouseReport::default()]
    );
}
