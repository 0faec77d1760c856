use embassy_time::Instant;
use ergodox_types::modifier::ModifierCombination;

use crate::hid::HidWriter;
use crate::keyboard::KeyboardState;

/// State machine for one shot keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OneShotState<T> {
    /// First one shot key press
    Initial(T),
    /// One shot key was released before any other key, normal one shot behavior
    Single(T),
    /// Another key was pressed before one shot key was released, treat as a normal modifier/layer
    Held(T),
    /// One shot inactive
    #[default]
    None,
}

impl<T> OneShotState<T> {
    /// Get the current one shot value if any
    pub fn value(&self) -> Option<&T> {
        match self {
            OneShotState::Initial(v) | OneShotState::Single(v) | OneShotState::Held(v) => Some(v),
            OneShotState::None => None,
        }
    }
}

impl<'a, W: HidWriter> KeyboardState<'a, W> {
    pub(crate) fn process_action_osm(&mut self, modifiers: ModifierCombination, pressed: bool) {
        if pressed {
            self.osm_state = match self.osm_state {
                OneShotState::None => OneShotState::Initial(modifiers),
                OneShotState::Initial(m) => OneShotState::Initial(m | modifiers),
                OneShotState::Single(m) => OneShotState::Single(m | modifiers),
                OneShotState::Held(m) => OneShotState::Held(m | modifiers),
            };
            self.update_osl(pressed);
            return;
        }

        match self.osm_state {
            OneShotState::Initial(m) | OneShotState::Single(m) => {
                self.osm_state = OneShotState::Single(m);
                self.osm_since = Some(self.now);
            }
            OneShotState::Held(m) => {
                if !m.contains(modifiers) {
                    return;
                }
                self.osm_state = OneShotState::None;
                self.osm_since = None;
                // Release the modifiers that were used like normal modifiers
                self.send_keyboard_report(false);
            }
            OneShotState::None => (),
        }
    }

    pub(crate) fn process_action_osl(&mut self, layer: u8, pressed: bool) {
        if pressed {
            // Deactivate old layer if any
            if let Some(&l) = self.osl_state.value() {
                self.keymap.deactivate_layer(l);
            }
            self.osl_state = match self.osl_state {
                OneShotState::None | OneShotState::Initial(_) => OneShotState::Initial(layer),
                OneShotState::Single(_) => OneShotState::Single(layer),
                OneShotState::Held(_) => OneShotState::Held(layer),
            };
            self.keymap.activate_layer(layer);
            return;
        }

        match self.osl_state {
            OneShotState::Initial(l) | OneShotState::Single(l) => {
                self.osl_state = OneShotState::Single(l);
                self.osl_since = Some(self.now);
            }
            OneShotState::Held(l) => {
                self.osl_state = OneShotState::None;
                self.osl_since = None;
                self.keymap.deactivate_layer(l);
            }
            OneShotState::None => (),
        }
    }

    /// Another key is pressed or released
    pub(crate) fn update_osm(&mut self, pressed: bool) {
        match self.osm_state {
            OneShotState::Initial(m) => self.osm_state = OneShotState::Held(m),
            OneShotState::Single(_) if !pressed => {
                self.osm_state = OneShotState::None;
                self.osm_since = None;
            }
            _ => (),
        }
    }

    pub(crate) fn update_osl(&mut self, pressed: bool) {
        match self.osl_state {
            OneShotState::Initial(l) => self.osl_state = OneShotState::Held(l),
            OneShotState::Single(l) if !pressed => {
                self.keymap.deactivate_layer(l);
                self.osl_state = OneShotState::None;
                self.osl_since = None;
            }
            _ => (),
        }
    }

    /// Drop one shot keys which were not used within the one shot timeout
    pub(crate) fn check_oneshot_timeout(&mut self) {
        let timeout = self.behavior.one_shot.timeout;
        let now = self.now;
        let expired = |since: Option<Instant>| since.is_some_and(|t| now.saturating_duration_since(t) > timeout);

        if expired(self.osm_since) {
            debug!("One shot modifiers timed out");
            self.osm_state = OneShotState::None;
            self.osm_since = None;
        }
        if expired(self.osl_since) {
            if let OneShotState::Single(l) = self.osl_state {
                debug!("One shot layer {} timed out", l);
                self.keymap.deactivate_layer(l);
            }
            self.osl_state = OneShotState::None;
            self.osl_since = None;
        }
    }

    /// Active one shot modifiers, if any
    pub fn oneshot_modifiers(&self) -> Option<ModifierCombination> {
        self.osm_state.value().copied()
    }

    /// Returns `true` if one shot modifiers were tapped and wait for the next key.
    ///
    /// A one shot modifier key that is still held works like a normal modifier.
    pub fn oneshot_modifiers_pending(&self) -> bool {
        matches!(self.osm_state, OneShotState::Single(_))
    }

    pub fn clear_oneshot_modifiers(&mut self) {
        self.osm_state = OneShotState::None;
        self.osm_since = None;
    }

    /// Returns `true` if armed one shot modifiers are older than the one shot timeout
    pub fn oneshot_modifiers_timed_out(&self) -> bool {
        self.osm_since
            .is_some_and(|t| self.now.saturating_duration_since(t) > self.behavior.one_shot.timeout)
    }

    /// Layer of the active one shot layer, if any
    pub fn oneshot_layer(&self) -> Option<u8> {
        self.osl_state.value().copied()
    }

    /// Arm `layer` as a one shot layer, as if its one shot key was just pressed.
    ///
    /// The layer itself is not switched on here.
    pub fn set_oneshot_layer(&mut self, layer: u8) {
        self.osl_state = OneShotState::Initial(layer);
        self.osl_since = None;
    }

    /// The key that armed the one shot layer is released: the layer now waits for the next key.
    ///
    /// If another key was already pressed while it was held, the layer is done.
    pub fn clear_oneshot_layer_pressed(&mut self) {
        match self.osl_state {
            OneShotState::Initial(l) => {
                self.osl_state = OneShotState::Single(l);
                self.osl_since = Some(self.now);
            }
            OneShotState::Held(l) => {
                self.keymap.deactivate_layer(l);
                self.osl_state = OneShotState::None;
                self.osl_since = None;
            }
            _ => (),
        }
    }
}
