extern crate ergodox;

/// Run a key sequence and compare all keyboard reports sent, evaluates to the keyboard.
///
/// `settle` keeps scanning for that many milliseconds after the last event.
#[macro_export]
macro_rules! key_sequence_test {
    (keyboard: $keyboard:expr, sequence: [$([$row:expr, $col:expr, $pressed:expr, $delay:expr]),* $(,)?], $(settle: $settle:expr,)? expected_reports: [$([$modifier:expr, $keys:expr]),* $(,)?]) => {{
        let mut keyboard = $keyboard;
        let sequence = $crate::key_sequence![$([$row, $col, $pressed, $delay]),*];
        let expected_reports: Vec<ergodox::hid::KeyboardReport> = $crate::key_report![$([$modifier, $keys]),*];

        $crate::common::run_key_sequence(&mut keyboard, &sequence);
        $( $crate::common::scan_for(&mut keyboard, $settle); )?

        let reports = keyboard.writer().keyboard_reports();
        assert_eq!(
            expected_reports.len(),
            reports.len(),
            "expected {:?}, got {:?}",
            expected_reports,
            reports
        );
        for (i, (expected, report)) in expected_reports.iter().zip(reports.iter()).enumerate() {
            assert_eq!(expected, report, "on #{} reports, expected left but actually right", i);
        }
        keyboard
    }};
}

// a rust macro to map a str to k!(a) as u8
#[macro_export]
macro_rules! kc8 {
    ($key: ident) => {
        ergodox::keycode::HidKeyCode::$key as u8
    };
}

// a rust macro to create a key sequence to simulate key presses
#[macro_export]
macro_rules! key_sequence {
    ($([$row:expr, $col:expr, $pressed:expr, $delay:expr]),* $(,)?) => {
        vec![
            $(
                $crate::common::TestKeyPress {
                    row: $row,
                    col: $col,
                    pressed: $pressed,
                    delay: $delay,
                },
            )*
        ]
    };
}

// a rust macro to create a key report that simulates key status change in hid
#[macro_export]
macro_rules! key_report {
    ($([$modifier:expr, $keys:expr]),* $(,)?) => {
        vec![
            $(
                ergodox::hid::KeyboardReport {
                    modifier: $modifier,
                    keycodes: $keys,
                    leds: 0,
                    reserved: 0,
                },
            )*
        ]
    };
}
