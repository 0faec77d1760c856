/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Hid(
            $crate::keycode::HidKeyCode::$k,
        )))
    };
}

/// Create a normal key with modifiers, e.g. `wm!(V, ModifierCombination::LGUI)`
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::KeyWithModifier(
            $crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key, e.g. `s!(Kc9)` types `(`
#[macro_export]
macro_rules! s {
    ($x: ident) => {
        $crate::wm!($x, $crate::modifier::ModifierCombination::LSHIFT)
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: expr, $k: ident) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::LayerOn($x),
        )
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::action::KeyAction::TapHold(
            $crate::action::Action::Key($crate::keycode::KeyCode::Hid($crate::keycode::HidKeyCode::$k)),
            $crate::action::Action::Modifier($m),
        )
    };
}

/// Create a one shot modifier action
#[macro_export]
macro_rules! osm {
    ($m: expr) => {
        $crate::action::KeyAction::OneShot($crate::action::Action::Modifier($m))
    };
}

/// Create a one shot layer action
#[macro_export]
macro_rules! osl {
    ($x: expr) => {
        $crate::action::KeyAction::OneShot($crate::action::Action::LayerOn($x))
    };
}

/// Create a layer-tap-toggle action: momentary on hold, toggled after `tapping_toggle` taps
#[macro_export]
macro_rules! tt {
    ($x: expr) => {
        $crate::action::KeyAction::LayerTapToggle($x)
    };
}

/// Create a tap dance action by index in the tap dance table
#[macro_export]
macro_rules! td {
    ($index: expr) => {
        $crate::action::KeyAction::TapDance($index)
    };
}

/// Create a macro action, run on press and release
#[macro_export]
macro_rules! m {
    ($id: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::TriggerMacro($id))
    };
}

/// Create a macro action which receives the tap count of the key
#[macro_export]
macro_rules! tm {
    ($id: expr) => {
        $crate::action::KeyAction::TapMacro($id)
    };
}

/// Create a unicode action, e.g. `uc!(0x2318)` types ⌘
#[macro_export]
macro_rules! uc {
    ($cp: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::Unicode($cp))
    };
}

/// Create a layout specific keycode
#[macro_export]
macro_rules! user {
    ($id: expr) => {
        $crate::action::KeyAction::Single($crate::action::Action::User($id))
    };
}

/// Create the leader key
#[macro_export]
macro_rules! lead {
    () => {
        $crate::action::KeyAction::Single($crate::action::Action::Leader)
    };
}
