use std::time::Duration;

use crate::holdem::StreetSettings;

/// Identifies the hand a deferred action was scheduled against.
///
/// The engine hands out a new token on every deal. An action carrying an
/// older token belongs to a hand that has been replaced and is dropped
/// instead of being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HandToken(u64);

impl HandToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Engine operations a controller can delay so feedback stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    AdvanceStreet(StreetSettings),
    CompleteHand,
    NewHand {
        num_players: usize,
        big_blind: u32,
        hero_seat: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    /// Logical time the action becomes runnable.
    pub due: Duration,
    pub token: HandToken,
    pub action: Deferred,
}

/// Pending deferred actions ordered by due time.
///
/// There is no wall clock in here. The owner passes the current logical
/// time to [`DeferredQueue::pop_due`], which keeps scheduling deterministic.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<Scheduled>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action`. Actions due at the same time run in the order they
    /// were scheduled.
    pub fn schedule(&mut self, due: Duration, token: HandToken, action: Deferred) {
        let idx = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(idx, Scheduled { due, token, action });
    }

    /// Drop every pending action.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Drop the pending actions `pred` matches. Returns how many were
    /// dropped.
    pub fn cancel_where<F: Fn(&Deferred) -> bool>(&mut self, pred: F) -> usize {
        let before = self.pending.len();
        self.pending.retain(|s| !pred(&s.action));
        before - self.pending.len()
    }

    /// Take the earliest action that is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Scheduled> {
        match self.pending.first() {
            Some(first) if first.due <= now => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|s| s.due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
