//! LEDs of the ErgoDox EZ: the board LED on the left half and three LEDs on the right half.
use embedded_hal::digital::{OutputPin, PinState};

/// Desired on/off state of every LED
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    pub board: bool,
    /// Right LEDs 1 to 3
    pub right: [bool; 3],
}

impl LedState {
    pub fn all_off(&mut self) {
        *self = LedState::default();
    }

    /// Set right LED `led`, numbered from 1 like the labels on the PCB
    pub fn set_right(&mut self, led: usize, on: bool) {
        match self.right.get_mut(led.wrapping_sub(1)) {
            Some(l) => *l = on,
            None => warn!("There is no right LED {}", led),
        }
    }

    pub fn right_on(&self, led: usize) -> bool {
        self.right.get(led.wrapping_sub(1)).copied().unwrap_or(false)
    }
}

struct SingleLed<P: OutputPin> {
    pin: P,
    on_state: PinState,
}

impl<P: OutputPin> SingleLed<P> {
    fn new(pin: P, on_state: PinState) -> Self {
        Self { pin, on_state }
    }

    fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on {
            self.pin.set_state(self.on_state)
        } else {
            self.pin.set_state(!self.on_state)
        }
    }
}

/// Drives the four LED pins from a [`LedState`], touching the pins only when the state changes
pub struct ErgodoxLeds<P: OutputPin> {
    board: SingleLed<P>,
    right: [SingleLed<P>; 3],
    current: Option<LedState>,
}

impl<P: OutputPin> ErgodoxLeds<P> {
    pub fn new(board: P, right: [P; 3], on_state: PinState) -> Self {
        Self {
            board: SingleLed::new(board, on_state),
            right: right.map(|p| SingleLed::new(p, on_state)),
            current: None,
        }
    }

    pub fn apply(&mut self, state: LedState) -> Result<(), P::Error> {
        if self.current == Some(state) {
            return Ok(());
        }
        self.board.set(state.board)?;
        for (led, on) in self.right.iter_mut().zip(state.right) {
            led.set(on)?;
        }
        debug!("LED state: {:?}", state);
        self.current = Some(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    use super::*;

    #[test]
    fn test_apply_sets_pins_once() {
        let board = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::Low)]);
        let r1 = PinMock::new(&[Transaction::set(State::High), Transaction::set(State::Low)]);
        let r2 = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::High)]);
        let r3 = PinMock::new(&[Transaction::set(State::Low), Transaction::set(State::Low)]);
        let mut pins = [board.clone(), r1.clone(), r2.clone(), r3.clone()];

        let mut leds = ErgodoxLeds::new(board, [r1, r2, r3], PinState::High);
        let mut state = LedState::default();
        state.set_right(1, true);
        leds.apply(state).unwrap();
        // Unchanged state does not touch the pins
        leds.apply(state).unwrap();

        state.all_off();
        state.set_right(2, true);
        // Every pin is written on a change
        leds.apply(state).unwrap();

        for pin in pins.iter_mut() {
            pin.done();
        }
    }

    #[test]
    fn test_right_led_numbering() {
        let mut state = LedState::default();
        state.set_right(3, true);
        assert_eq!(state.right, [false, false, true]);
        assert!(state.right_on(3));
        state.set_right(0, true);
        state.set_right(4, true);
        assert_eq!(state.right, [false, false, true]);
    }
}
