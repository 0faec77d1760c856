//! Tunable behavior of the layout engine.
use embassy_time::Duration;

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_hold: TapHoldConfig,
    pub one_shot: OneShotConfig,
    pub leader: LeaderConfig,
    pub mouse: MouseKeyConfig,
    pub macros: MacroConfig,
}

/// Configurations for tap/hold keys and tap dances
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// A press shorter than this is a tap, also the window for the next tap of a dance
    pub tapping_term: Duration,
    /// Number of taps that toggles the layer of a layer-tap-toggle key
    pub tapping_toggle: u8,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(200),
            tapping_toggle: 5,
        }
    }
}

/// Config for one shot behavior
#[derive(Clone, Copy, Debug)]
pub struct OneShotConfig {
    pub timeout: Duration,
}

impl Default for OneShotConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(1),
        }
    }
}

/// Config for the leader key
#[derive(Clone, Copy, Debug)]
pub struct LeaderConfig {
    /// Time after the leader key press when the sequence is looked up
    pub timeout: Duration,
}

impl Default for LeaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(300),
        }
    }
}

/// Config for mouse keys
#[derive(Clone, Copy, Debug)]
pub struct MouseKeyConfig {
    /// Interval of repeated mouse reports while a movement key is held
    pub interval: Duration,
    pub move_delta: i8,
    pub wheel_delta: i8,
}

impl Default for MouseKeyConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(50),
            move_delta: 8,
            wheel_delta: 1,
        }
    }
}

/// Config for keystrokes sent by macros
#[derive(Clone, Copy, Debug)]
pub struct MacroConfig {
    /// Pause after each tap of a slow tap sequence
    pub tap_delay: Duration,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            tap_delay: Duration::from_millis(50),
        }
    }
}
