//! Tap or hold decision of tap/hold keys.
//!
//! A press is decided as a tap when the key is released within the tapping
//! term, and as a hold when the term elapses or another key is pressed first.
//! Pressing the same key again within the term after a tap counts as the next
//! tap of a sequence, decided right away.
use embassy_time::Instant;
use ergodox_types::action::KeyAction;

use crate::event::{KeyEvent, KeyRecord};
use crate::hid::HidWriter;
use crate::hooks::KeymapHooks;
use crate::keyboard::Keyboard;
use crate::layout::{COL, ROW};

/// A tap/hold key waiting for its decision
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingTap {
    pub(crate) event: KeyEvent,
    pub(crate) action: KeyAction,
    pub(crate) pressed_at: Instant,
    /// Tap count if this press turns out to be a tap
    pub(crate) count: u8,
}

#[derive(Clone, Copy, Debug)]
struct LastTap {
    row: u8,
    col: u8,
    count: u8,
    released_at: Instant,
}

pub(crate) struct TapHoldResolver {
    pub(crate) pending: Option<PendingTap>,
    last_tap: Option<LastTap>,
    /// Tap count of every decided and still pressed key, 0 for holds
    counts: [[u8; COL]; ROW],
}

impl Default for TapHoldResolver {
    fn default() -> Self {
        Self {
            pending: None,
            last_tap: None,
            counts: [[0; COL]; ROW],
        }
    }
}

impl TapHoldResolver {
    /// A press of another key ends a tap sequence
    pub(crate) fn forget_other_taps(&mut self, event: &KeyEvent) {
        if self
            .last_tap
            .is_some_and(|t| t.row != event.row || t.col != event.col)
        {
            self.last_tap = None;
        }
    }

    pub(crate) fn tapped(&mut self, event: &KeyEvent, count: u8, now: Instant) {
        self.last_tap = Some(LastTap {
            row: event.row,
            col: event.col,
            count,
            released_at: now,
        });
    }

    fn set_count(&mut self, event: &KeyEvent, count: u8) {
        if let Some(c) = self
            .counts
            .get_mut(event.row as usize)
            .and_then(|r| r.get_mut(event.col as usize))
        {
            *c = count;
        }
    }

    fn take_count(&mut self, event: &KeyEvent) -> u8 {
        self.counts
            .get_mut(event.row as usize)
            .and_then(|r| r.get_mut(event.col as usize))
            .map(core::mem::take)
            .unwrap_or(0)
    }
}

impl<'a, H: KeymapHooks, W: HidWriter> Keyboard<'a, H, W> {
    pub(crate) fn process_tap_hold(&mut self, action: KeyAction, event: KeyEvent) {
        let now = self.state.now();
        let term = self.state.behavior().tap_hold.tapping_term;

        if !event.pressed {
            let count = self.tapping.take_count(&event);
            self.dispatch(action, KeyRecord::with_tap(event, count, false));
            if count > 0 {
                self.tapping.tapped(&event, count, now);
            }
            return;
        }

        match self.tapping.last_tap {
            Some(last)
                if last.row == event.row
                    && last.col == event.col
                    && now.saturating_duration_since(last.released_at) < term =>
            {
                let count = last.count.saturating_add(1);
                debug!("Sequential tap {} of {:?}", count, action);
                self.tapping.set_count(&event, count);
                self.dispatch(action, KeyRecord::with_tap(event, count, false));
            }
            _ => {
                self.tapping.pending = Some(PendingTap {
                    event,
                    action,
                    pressed_at: now,
                    count: 1,
                });
            }
        }
    }

    /// Decide the pending key as a hold
    pub(crate) fn resolve_pending_hold(&mut self, interrupted: bool) {
        if let Some(pending) = self.tapping.pending.take() {
            debug!("Hold {:?}, interrupted: {}", pending.action, interrupted);
            self.tapping.set_count(&pending.event, 0);
            self.tapping.last_tap = None;
            self.dispatch(pending.action, KeyRecord::with_tap(pending.event, 0, interrupted));
        }
    }
}
