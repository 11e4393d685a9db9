//! Players and the action handoff between the frame loop and a
//! game-logic thread.
//!
//! The frame loop is the only producer: it calls [`ActionInbox::submit`]
//! once per committed placement and never blocks. A game-logic thread
//! (when one is used) parks in [`ActionInbox::wait`] until an action
//! arrives; a single-threaded host can drain with
//! [`ActionInbox::try_take`] instead. Never submit from more than one
//! thread.

use std::sync::{Condvar, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A player decision produced by the placement cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Place { position: (i32, i32), rotations: u8 },
}

/// Single-slot action mailbox. A later submit overwrites an unconsumed
/// action; the slot holds at most one decision.
#[derive(Default)]
pub struct ActionInbox {
    slot: Mutex<Option<Action>>,
    ready: Condvar,
}

impl ActionInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit an action and wake the waiter. Never blocks beyond the
    /// slot lock.
    pub fn submit(&self, action: Action) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(action);
        self.ready.notify_one();
    }

    /// Take the pending action without waiting.
    pub fn try_take(&self) -> Option<Action> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Park until an action is submitted, then take it.
    pub fn wait(&self) -> Action {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(action) = slot.take() {
                return action;
            }
            slot = self
                .ready
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}
