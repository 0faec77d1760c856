pub(crate) mod mouse;
pub(crate) mod oneshot;
pub(crate) mod tapping;

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{Error as _, OutputPin};
use ergodox_types::action::{Action, KeyAction};
use ergodox_types::keycode::{ConsumerKey, HidKeyCode, KeyCode};
use ergodox_types::modifier::ModifierCombination;
use ergodox_types::unicode::UnicodeMode;

use crate::channel::KEY_EVENT_CHANNEL;
use crate::config::BehaviorConfig;
use crate::event::{KeyEvent, KeyRecord};
use crate::hid::{HidWriter, KeyboardReport, MediaReport, Report};
use crate::hooks::KeymapHooks;
use crate::keyboard::mouse::MouseKeys;
use crate::keyboard::oneshot::OneShotState;
use crate::keyboard::tapping::TapHoldResolver;
use crate::keymap::KeyMap;
use crate::layout::{COL, Layer, NUM_LAYER, ROW};
use crate::leader::Leader;
use crate::light::{ErgodoxLeds, LedState};
use crate::tap_dance::TapDanceState;

/// Everything the layout callbacks can read and drive: layers, registered
/// keys and modifiers, one-shot state, unicode mode, LEDs and the output.
pub struct KeyboardState<'a, W: HidWriter> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    behavior: BehaviorConfig,
    writer: W,
    /// Time of the event or scan being processed
    now: Instant,

    /// Modifiers registered by modifier keys
    held_modifiers: ModifierCombination,
    /// Modifiers registered together with a key, e.g. the shift of `(`
    weak_modifiers: ModifierCombination,
    /// Registered keycodes, at most 6 like a boot keyboard report
    held_keycodes: [HidKeyCode; 6],
    /// Registered media key
    media_key: Option<ConsumerKey>,

    pub(crate) osm_state: OneShotState<ModifierCombination>,
    pub(crate) osm_since: Option<Instant>,
    pub(crate) osl_state: OneShotState<u8>,
    pub(crate) osl_since: Option<Instant>,

    pub(crate) mouse: MouseKeys,
    unicode_mode: UnicodeMode,
    leds: LedState,
}

impl<'a, W: HidWriter> KeyboardState<'a, W> {
    pub fn new(layers: &'a [Layer; NUM_LAYER], behavior: BehaviorConfig, writer: W) -> Self {
        Self {
            keymap: KeyMap::new(layers),
            behavior,
            writer,
            now: Instant::from_ticks(0),
            held_modifiers: ModifierCombination::new(),
            weak_modifiers: ModifierCombination::new(),
            held_keycodes: [HidKeyCode::No; 6],
            media_key: None,
            osm_state: OneShotState::None,
            osm_since: None,
            osl_state: OneShotState::None,
            osl_since: None,
            mouse: MouseKeys::default(),
            unicode_mode: UnicodeMode::default(),
            leds: LedState::default(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn leds(&self) -> LedState {
        self.leds
    }

    pub fn leds_mut(&mut self) -> &mut LedState {
        &mut self.leds
    }

    pub fn unicode_mode(&self) -> UnicodeMode {
        self.unicode_mode
    }

    pub fn set_unicode_mode(&mut self, mode: UnicodeMode) {
        info!("Unicode input mode: {:?}", mode);
        self.unicode_mode = mode;
    }

    pub fn layer_on(&mut self, layer: u8) {
        self.keymap.activate_layer(layer);
    }

    pub fn layer_off(&mut self, layer: u8) {
        self.keymap.deactivate_layer(layer);
    }

    pub fn layer_invert(&mut self, layer: u8) {
        self.keymap.toggle_layer(layer);
    }

    pub fn is_layer_on(&self, layer: u8) -> bool {
        self.keymap.is_layer_active(layer)
    }

    pub fn highest_layer(&self) -> u8 {
        self.keymap.highest_layer()
    }

    /// Print a line on the debug console
    pub fn print(&mut self, line: &str) {
        self.writer.write_console(line);
    }

    /// Pause the output, used between the taps of a slow tap sequence
    pub fn wait(&mut self, duration: Duration) {
        self.writer.delay(duration);
    }

    /// Currently registered modifiers, without one-shot modifiers
    pub fn modifiers(&self) -> ModifierCombination {
        self.held_modifiers | self.weak_modifiers
    }

    /// Register a keycode: a key, a modifier, a media key or a mouse key
    pub fn register_code(&mut self, key: KeyCode) {
        match key {
            KeyCode::Hid(k) => {
                if let Some(c) = k.process_as_consumer() {
                    self.register_media(c);
                } else if k.is_mouse_key() {
                    self.process_mouse_key(k, true);
                } else if k.is_modifier() {
                    self.held_modifiers |= k.to_modifier_combination();
                    self.send_keyboard_report(true);
                } else if k.is_basic_key() {
                    self.hold_keycode(k);
                    self.send_keyboard_report(true);
                }
            }
            KeyCode::Consumer(c) => self.register_media(c),
        }
    }

    pub fn unregister_code(&mut self, key: KeyCode) {
        match key {
            KeyCode::Hid(k) => {
                if k.process_as_consumer().is_some() {
                    self.unregister_media();
                } else if k.is_mouse_key() {
                    self.process_mouse_key(k, false);
                } else if k.is_modifier() {
                    self.held_modifiers &= !k.to_modifier_combination();
                    self.send_keyboard_report(false);
                } else if k.is_basic_key() {
                    self.release_keycode(k);
                    self.send_keyboard_report(false);
                }
            }
            KeyCode::Consumer(_) => self.unregister_media(),
        }
    }

    pub fn tap_code(&mut self, key: KeyCode) {
        self.register_code(key);
        self.unregister_code(key);
    }

    pub fn register_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers |= modifiers;
        self.send_keyboard_report(true);
    }

    pub fn unregister_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers &= !modifiers;
        self.send_keyboard_report(false);
    }

    /// Register a key together with modifiers, in a single report
    pub fn register_key_with_modifiers(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.weak_modifiers |= modifiers;
        match key {
            KeyCode::Hid(k) if k.is_basic_key() => {
                self.hold_keycode(k);
                self.send_keyboard_report(true);
            }
            _ => {
                self.send_keyboard_report(true);
                self.register_code(key);
            }
        }
    }

    pub fn unregister_key_with_modifiers(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.weak_modifiers &= !modifiers;
        match key {
            KeyCode::Hid(k) if k.is_basic_key() => {
                self.release_keycode(k);
                self.send_keyboard_report(false);
            }
            _ => {
                self.unregister_code(key);
                self.send_keyboard_report(false);
            }
        }
    }

    pub fn tap_key_with_modifiers(&mut self, key: KeyCode, modifiers: ModifierCombination) {
        self.register_key_with_modifiers(key, modifiers);
        self.unregister_key_with_modifiers(key, modifiers);
    }

    /// Register the keys of an action, used by tap dances and macros
    pub fn register_action(&mut self, action: Action) {
        match action {
            Action::Key(k) => self.register_code(k),
            Action::KeyWithModifier(k, m) => self.register_key_with_modifiers(k, m),
            Action::Modifier(m) => self.register_modifiers(m),
            Action::LayerOn(l) => self.layer_on(l),
            Action::LayerToggle(l) => self.layer_invert(l),
            Action::Unicode(cp) => self.send_unicode(cp),
            _ => warn!("Cannot register {:?}", action),
        }
    }

    pub fn unregister_action(&mut self, action: Action) {
        match action {
            Action::Key(k) => self.unregister_code(k),
            Action::KeyWithModifier(k, m) => self.unregister_key_with_modifiers(k, m),
            Action::Modifier(m) => self.unregister_modifiers(m),
            Action::LayerOn(l) => self.layer_off(l),
            _ => (),
        }
    }

    pub fn tap_action(&mut self, action: Action) {
        self.register_action(action);
        self.unregister_action(action);
    }

    fn hold_keycode(&mut self, key: HidKeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        match self.held_keycodes.iter_mut().find(|k| **k == HidKeyCode::No) {
            Some(slot) => *slot = key,
            None => warn!("No free slot in the keyboard report for {:?}", key),
        }
    }

    fn release_keycode(&mut self, key: HidKeyCode) {
        self.held_keycodes
            .iter_mut()
            .filter(|k| **k == key)
            .for_each(|k| *k = HidKeyCode::No);
    }

    fn register_media(&mut self, key: ConsumerKey) {
        self.media_key = Some(key);
        self.writer.write_report(Report::MediaReport(MediaReport {
            usage_id: key as u16,
        }));
    }

    fn unregister_media(&mut self) {
        self.media_key = None;
        self.writer
            .write_report(Report::MediaReport(MediaReport { usage_id: 0 }));
    }

    /// Modifiers of the next keyboard report.
    ///
    /// One-shot modifiers apply to pressed keys, and to releases only while
    /// their key is held down.
    fn resolve_modifiers(&self, pressed: bool) -> ModifierCombination {
        let mut modifiers = self.held_modifiers | self.weak_modifiers;
        match self.osm_state {
            OneShotState::Initial(m) | OneShotState::Single(m) if pressed => modifiers |= m,
            OneShotState::Held(m) => modifiers |= m,
            _ => (),
        }
        modifiers
    }

    pub(crate) fn send_keyboard_report(&mut self, pressed: bool) {
        let report = KeyboardReport {
            modifier: self.resolve_modifiers(pressed).into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        };
        self.writer.write_report(Report::KeyboardReport(report));
    }
}

/// The key processing engine: tap/hold decisions, tap dances, leader key and
/// the default action handling, with the layout callbacks in `H`.
///
/// The engine is synchronous and takes the current time with every call,
/// [`Keyboard::run`] drives it from the key event channel.
pub struct Keyboard<'a, H: KeymapHooks, W: HidWriter> {
    pub(crate) state: KeyboardState<'a, W>,
    pub(crate) hooks: H,
    pub(crate) tapping: TapHoldResolver,
    pub(crate) tap_dance: Option<TapDanceState>,
    pub(crate) leader: Leader,
}

impl<'a, H: KeymapHooks, W: HidWriter> Keyboard<'a, H, W> {
    pub fn new(layers: &'a [Layer; NUM_LAYER], behavior: BehaviorConfig, hooks: H, writer: W) -> Self {
        Self {
            state: KeyboardState::new(layers, behavior, writer),
            hooks,
            tapping: TapHoldResolver::default(),
            tap_dance: None,
            leader: Leader::default(),
        }
    }

    pub fn state(&self) -> &KeyboardState<'a, W> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut KeyboardState<'a, W> {
        &mut self.state
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn writer(&self) -> &W {
        &self.state.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.state.writer
    }

    pub fn led_state(&self) -> LedState {
        self.state.leds
    }

    /// Run the layout's init callback, before the first event
    pub fn init(&mut self, now: Instant) {
        self.state.now = now;
        self.hooks.matrix_init(&mut self.state);
    }

    /// Process one key event
    pub fn process(&mut self, event: KeyEvent, now: Instant) {
        self.state.now = now;
        debug!("Processing key event: {:?}", event);
        if event.pressed {
            self.tapping.forget_other_taps(&event);
        }

        // A pending tap/hold key is decided by this event first
        if let Some(pending) = self.tapping.pending {
            let term = self.state.behavior.tap_hold.tapping_term;
            if !event.pressed && event.same_key(&pending.event) {
                if now.saturating_duration_since(pending.pressed_at) < term {
                    self.tapping.pending = None;
                    let action = self.state.keymap.get_action_with_layer_cache(event);
                    debug!("Tapped {:?}, count {}", action, pending.count);
                    self.dispatch(pending.action, KeyRecord::with_tap(pending.event, pending.count, false));
                    self.dispatch(action, KeyRecord::with_tap(event, pending.count, false));
                    self.tapping.tapped(&event, pending.count, now);
                    return;
                }
                self.resolve_pending_hold(false);
            } else if event.pressed {
                self.resolve_pending_hold(true);
            }
        }

        let action = self.state.keymap.get_action_with_layer_cache(event);
        if action.is_tap_hold() {
            self.process_tap_hold(action, event);
            return;
        }
        self.dispatch(action, KeyRecord::new(event));
    }

    /// Periodic work: timeouts of tap/hold keys, tap dances, one-shot keys and
    /// the leader key, mouse key repeat and the layout's scan callback.
    pub fn scan(&mut self, now: Instant) {
        self.state.now = now;
        if let Some(pending) = self.tapping.pending {
            if now.saturating_duration_since(pending.pressed_at) >= self.state.behavior.tap_hold.tapping_term {
                self.resolve_pending_hold(false);
            }
        }
        self.check_tap_dance_timeout();
        self.state.check_oneshot_timeout();
        self.state.tick_mouse();
        self.check_leader_timeout();
        self.hooks.matrix_scan(&mut self.state);
    }

    /// Process every key event waiting in [`KEY_EVENT_CHANNEL`], then scan
    pub fn process_pending_events(&mut self, now: Instant) {
        while let Ok(event) = KEY_EVENT_CHANNEL.try_receive() {
            self.process(event, now);
        }
        self.scan(now);
    }

    /// Set the LED pins to the state left by the last scan
    pub fn write_leds<P: OutputPin>(&self, leds: &mut ErgodoxLeds<P>) {
        if let Err(e) = leds.apply(self.state.leds) {
            error!("Failed to set LEDs: {:?}", e.kind());
        }
    }

    /// Main loop: process key events from [`KEY_EVENT_CHANNEL`], scan every
    /// `scan_interval` and update the LEDs after each scan
    pub async fn run<P: OutputPin>(&mut self, scan_interval: Duration, leds: &mut ErgodoxLeds<P>) -> ! {
        self.init(Instant::now());
        loop {
            match select(KEY_EVENT_CHANNEL.receive(), Timer::after(scan_interval)).await {
                Either::First(event) => self.process(event, Instant::now()),
                Either::Second(_) => (),
            }
            self.scan(Instant::now());
            self.write_leds(leds);
        }
    }

    /// A resolved record goes through the layout callback, the leader key,
    /// tap dances and finally the default action handling.
    pub(crate) fn dispatch(&mut self, action: KeyAction, record: KeyRecord) {
        self.preprocess_tap_dance(action, &record);

        if !self.hooks.process_record(&mut self.state, action, &record) {
            return;
        }

        if self.process_leader(action, &record) {
            return;
        }

        self.process_key_action(action, record);
    }

    fn process_key_action(&mut self, action: KeyAction, record: KeyRecord) {
        let pressed = record.pressed();
        match action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(a) => self.process_action(a, &record),
            KeyAction::OneShot(Action::Modifier(m)) => self.state.process_action_osm(m, pressed),
            KeyAction::OneShot(Action::LayerOn(l)) => self.state.process_action_osl(l, pressed),
            KeyAction::OneShot(a) => self.process_action(a, &record),
            KeyAction::TapHold(tap, hold) => {
                if record.tap.count > 0 {
                    self.process_action(tap, &record);
                } else {
                    self.process_action(hold, &record);
                }
            }
            KeyAction::LayerTapToggle(layer) => {
                let toggle = self.state.behavior.tap_hold.tapping_toggle;
                // A hold is momentary, `tapping_toggle` taps leave the layer toggled
                if (pressed && record.tap.count < toggle) || (!pressed && record.tap.count <= toggle) {
                    self.state.layer_invert(layer);
                }
            }
            KeyAction::TapMacro(id) => {
                // One-shot keys apply to the macro. A one-shot layer armed by the
                // macro's own press is left to the macro.
                self.state.update_osm(pressed);
                if pressed || matches!(self.state.osl_state, OneShotState::Single(_)) {
                    self.state.update_osl(pressed);
                }
                self.hooks.process_macro(&mut self.state, id, &record);
            }
            KeyAction::TapDance(id) => {
                if pressed {
                    // A held one-shot key works like a normal modifier or layer from now on
                    self.state.update_osm(true);
                    self.state.update_osl(true);
                }
                self.process_tap_dance(id, &record);
            }
        }
    }

    fn process_action(&mut self, action: Action, record: &KeyRecord) {
        let pressed = record.pressed();
        match action {
            Action::No | Action::Leader => return,
            Action::Key(key) => {
                if pressed {
                    self.state.register_code(key);
                } else {
                    self.state.unregister_code(key);
                }
                if matches!(key, KeyCode::Hid(k) if k.is_modifier()) {
                    return;
                }
            }
            Action::KeyWithModifier(key, modifiers) => {
                if pressed {
                    self.state.register_key_with_modifiers(key, modifiers);
                } else {
                    self.state.unregister_key_with_modifiers(key, modifiers);
                }
            }
            Action::Modifier(modifiers) => {
                if pressed {
                    self.state.register_modifiers(modifiers);
                } else {
                    self.state.unregister_modifiers(modifiers);
                }
                return;
            }
            Action::LayerOn(layer) => {
                if pressed {
                    self.state.layer_on(layer);
                } else {
                    self.state.layer_off(layer);
                }
                return;
            }
            Action::LayerToggle(layer) => {
                if pressed {
                    self.state.layer_invert(layer);
                }
                return;
            }
            Action::Unicode(code_point) => {
                if pressed {
                    self.state.send_unicode(code_point);
                }
            }
            Action::User(id) => debug!("Keycode {} is not handled by the layout", id),
            Action::TriggerMacro(id) => self.hooks.process_macro(&mut self.state, id, record),
        }

        // A one-shot modifier or layer applies to this key only
        self.state.update_osm(pressed);
        self.state.update_osl(pressed);
    }
}
