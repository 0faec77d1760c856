use ergodox_types::action::KeyAction;

use crate::event::KeyEvent;

/// Keymap represents the stack of layers.
///
/// Layers are static tables, the runtime state is a bitmask of active layers
/// on top of the default layer. A release always resolves on the layer its
/// press was resolved on, whatever happened to the layer state in between.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Active layers, bit `n` set means layer `n` is on
    layer_state: u32,
    /// Default layer number, always active
    default_layer: u8,
    /// Layer each currently pressed key was resolved on
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        Self {
            layers,
            layer_state: 0,
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers
            .get(layer_num)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Fetch the action in keymap, with layer cache
    pub(crate) fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if row >= ROW || col >= COL {
            warn!("Key event out of the matrix: {:?}", key_event);
            return KeyAction::No;
        }

        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        match self.resolve_layer(row, col) {
            Some(layer) => {
                self.layer_cache[row][col] = layer;
                self.layers[layer as usize][row][col]
            }
            None => KeyAction::No,
        }
    }

    /// Highest active layer holding a non-transparent action at the position
    fn resolve_layer(&self, row: usize, col: usize) -> Option<u8> {
        (0..NUM_LAYER)
            .rev()
            .filter(|&l| self.is_layer_active(l as u8))
            .take_while(|&l| l >= self.default_layer as usize)
            .find(|&l| self.layers[l][row][col] != KeyAction::Transparent)
            .map(|l| l as u8)
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        layer_num == self.default_layer || (layer_num < 32 && self.layer_state & (1 << layer_num) != 0)
    }

    /// Highest active layer, the default layer when no other layer is on
    pub fn highest_layer(&self) -> u8 {
        match self.layer_state {
            0 => self.default_layer,
            state => (31 - state.leading_zeros() as u8).max(self.default_layer),
        }
    }

    /// Bitmask of the active layers, without the default layer
    pub fn layer_state(&self) -> u32 {
        self.layer_state
    }

    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.default_layer = layer_num;
        }
    }

    fn check_layer(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            warn!(
                "Not a valid layer {}, keyboard supports only {} layers",
                layer_num, NUM_LAYER
            );
            return false;
        }
        true
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state |= 1 << layer_num;
        }
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state &= !(1 << layer_num);
        }
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if self.check_layer(layer_num) {
            self.layer_state ^= 1 << layer_num;
        }
    }

    /// Deactivate every layer but the default one
    pub fn clear_layers(&mut self) {
        self.layer_state = 0;
    }
}

#[cfg(test)]
mod tests {
    use ergodox_types::action::{Action, KeyAction};
    use ergodox_types::keycode::{HidKeyCode, KeyCode};

    use super::*;

    const fn key(k: HidKeyCode) -> KeyAction {
        KeyAction::Single(Action::Key(KeyCode::Hid(k)))
    }

    const LAYERS: [[[KeyAction; 2]; 1]; 3] = [
        [[key(HidKeyCode::A), key(HidKeyCode::B)]],
        [[key(HidKeyCode::C), KeyAction::Transparent]],
        [[KeyAction::Transparent, KeyAction::Transparent]],
    ];

    #[test]
    fn test_transparent_falls_through() {
        let mut keymap = KeyMap::new(&LAYERS);
        keymap.activate_layer(1);
        keymap.activate_layer(2);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 0)), key(HidKeyCode::C));
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 1)), key(HidKeyCode::B));
    }

    #[test]
    fn test_release_uses_layer_of_press() {
        let mut keymap = KeyMap::new(&LAYERS);
        keymap.activate_layer(1);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 0)), key(HidKeyCode::C));
        keymap.deactivate_layer(1);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::release(0, 0)), key(HidKeyCode::C));
        // The cache is restored after the release
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(0, 0)), key(HidKeyCode::A));
    }

    #[test]
    fn test_highest_layer() {
        let mut keymap = KeyMap::new(&LAYERS);
        assert_eq!(keymap.highest_layer(), 0);
        keymap.activate_layer(1);
        assert_eq!(keymap.highest_layer(), 1);
        keymap.toggle_layer(2);
        assert_eq!(keymap.highest_layer(), 2);
        keymap.toggle_layer(2);
        assert_eq!(keymap.highest_layer(), 1);
        keymap.clear_layers();
        assert_eq!(keymap.highest_layer(), 0);
        assert_eq!(keymap.layer_state(), 0);
    }

    #[test]
    fn test_invalid_layer_is_ignored() {
        let mut keymap = KeyMap::new(&LAYERS);
        keymap.activate_layer(7);
        assert_eq!(keymap.layer_state(), 0);
        keymap.set_default_layer(9);
        assert_eq!(keymap.default_layer(), 0);
        assert_eq!(keymap.get_action_with_layer_cache(KeyEvent::press(3, 0)), KeyAction::No);
    }
}
