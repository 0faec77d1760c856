//! Leader key: keys typed shortly after the leader key are collected instead of
//! sent, and the layout looks the sequence up once the leader timeout elapses.
use embassy_time::{Duration, Instant};
use ergodox_types::action::{Action, KeyAction};
use ergodox_types::keycode::HidKeyCode;
use heapless::Vec;

use crate::event::{KeyEvent, KeyRecord};
use crate::hid::HidWriter;
use crate::hooks::KeymapHooks;
use crate::keyboard::Keyboard;

/// Max number of keys recorded after the leader key
pub const LEADER_SEQUENCE_LEN: usize = 5;

#[derive(Default)]
pub(crate) struct Leader {
    started_at: Option<Instant>,
    sequence: Vec<HidKeyCode, LEADER_SEQUENCE_LEN>,
    /// Keys pressed during the sequence, their releases are swallowed too
    swallowed: Vec<(u8, u8), 8>,
}

impl Leader {
    fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.sequence.clear();
    }

    fn is_leading_at(&self, now: Instant, timeout: Duration) -> bool {
        self.started_at
            .is_some_and(|t| now.saturating_duration_since(t) < timeout)
    }

    fn take_swallowed(&mut self, event: &KeyEvent) -> bool {
        match self
            .swallowed
            .iter()
            .position(|&(row, col)| row == event.row && col == event.col)
        {
            Some(i) => {
                self.swallowed.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// The finished sequence, when the timeout elapsed
    fn expired(&mut self, now: Instant, timeout: Duration) -> Option<Vec<HidKeyCode, LEADER_SEQUENCE_LEN>> {
        let started_at = self.started_at?;
        if now.saturating_duration_since(started_at) <= timeout {
            return None;
        }
        self.started_at = None;
        Some(core::mem::take(&mut self.sequence))
    }
}

impl<'a, H: KeymapHooks, W: HidWriter> Keyboard<'a, H, W> {
    /// Returns `true` if the record is consumed by the leader key
    pub(crate) fn process_leader(&mut self, action: KeyAction, record: &KeyRecord) -> bool {
        let event = record.event;
        if action == KeyAction::Single(Action::Leader) {
            if event.pressed {
                debug!("Leader sequence started");
                self.leader.start(self.state.now());
            }
            return true;
        }

        if !event.pressed {
            return self.leader.take_swallowed(&event);
        }

        let timeout = self.state.behavior().leader.timeout;
        if !self.leader.is_leading_at(self.state.now(), timeout) {
            return false;
        }

        // Keys without a keycode are recorded as `No`, so that the sequence matches nothing
        let keycode = action.leader_keycode().unwrap_or(HidKeyCode::No);
        if self.leader.sequence.push(keycode).is_err() {
            debug!("Leader sequence is full, ignoring {:?}", keycode);
        }
        if self.leader.swallowed.push((event.row, event.col)).is_err() {
            warn!("Too many keys pressed during a leader sequence");
        }
        true
    }

    pub(crate) fn check_leader_timeout(&mut self) {
        let timeout = self.state.behavior().leader.timeout;
        if let Some(sequence) = self.leader.expired(self.state.now(), timeout) {
            debug!("Leader sequence: {:?}", sequence.as_slice());
            self.hooks.leader_sequence(&mut self.state, &sequence);
        }
    }
}
