//! Last-query-wins ordering of address searches.
//!
//! Every lookup of a search session is tagged with a [`Ticket`] issued by the
//! session's [`Tracker`]. Only the result of the latest issued [`Ticket`] may
//! be published, whatever order the lookups complete in.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

use derive_more::{Display, From, FromStr, Into};
use uuid::Uuid;

/// ID of a search session (a single address input of a client).
#[derive(
    Clone, Copy, Debug, Display, Eq, From, FromStr, Hash, Into, PartialEq,
)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random [`SessionId`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Generation token of a single lookup.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Ticket(u64);

/// Issuer of monotonic [`Ticket`]s for a search session.
#[derive(Debug, Default)]
pub struct Tracker {
    /// Latest issued generation.
    latest: AtomicU64,
}

impl Tracker {
    /// Issues a new [`Ticket`], superseding all the previously issued ones.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Indicates whether the provided [`Ticket`] is the latest issued one.
    #[must_use]
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Wraps the provided `result` of the lookup tagged with the `ticket`
    /// into an [`Outcome`].
    pub fn settle<T>(&self, ticket: Ticket, result: T) -> Outcome<T> {
        if self.is_latest(ticket) {
            Outcome::Results(result)
        } else {
            Outcome::Superseded
        }
    }
}

/// Outcome of a tracked lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<T> {
    /// Lookup is the latest one of its session.
    Results(T),

    /// Newer lookup was issued in the same session, so this one is discarded.
    Superseded,
}

/// Registry of the [`Tracker`]s of live search sessions.
#[derive(Debug)]
pub struct Sessions {
    /// [`Tracker`]s by their [`SessionId`].
    trackers: Mutex<HashMap<SessionId, Arc<Tracker>>>,

    /// Maximum number of tracked sessions.
    capacity: usize,
}

impl Sessions {
    /// Creates a new empty [`Sessions`] registry tracking at most `capacity`
    /// sessions.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            trackers: Mutex::default(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the [`Tracker`] of the session with the provided [`SessionId`],
    /// creating it if required.
    ///
    /// When the registry is full, idle sessions (the ones without a lookup in
    /// flight) are forgotten first.
    pub fn tracker(&self, id: SessionId) -> Arc<Tracker> {
        let mut trackers =
            self.trackers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(t) = trackers.get(&id) {
            return Arc::clone(t);
        }

        if trackers.len() >= self.capacity {
            trackers.retain(|_, t| Arc::strong_count(t) > 1);
        }
        Arc::clone(trackers.entry(id).or_default())
    }

    /// Returns the number of tracked sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Indicates whether no session is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod spec {
    use std::sync::Arc;

    use super::{Outcome, SessionId, Sessions, Tracker};

    #[test]
    fn only_latest_ticket_settles() {
        let tracker = Tracker::default();

        let first = tracker.issue();
        let second = tracker.issue();
        assert!(first < second);

        assert_eq!(tracker.settle(second, "annecy"), Outcome::Results("annecy"));
        assert_eq!(tracker.settle(first, "ann"), Outcome::Superseded);

        let third = tracker.issue();
        assert_eq!(tracker.settle(second, "annecy"), Outcome::Superseded);
        assert!(tracker.is_latest(third));
    }

    #[test]
    fn sessions_are_independent() {
        let sessions = Sessions::new(8);
        let (a, b) = (SessionId::new(), SessionId::new());

        let ta = sessions.tracker(a).issue();
        let tb = sessions.tracker(b).issue();
        _ = sessions.tracker(b).issue();

        assert!(sessions.tracker(a).is_latest(ta));
        assert!(!sessions.tracker(b).is_latest(tb));
        assert_eq!(sessions.len(), 2);
    }

    #[test]
    fn full_registry_forgets_idle_sessions() {
        let sessions = Sessions::new(2);
        let busy = SessionId::new();
        let held = sessions.tracker(busy);
        _ = sessions.tracker(SessionId::new());

        _ = sessions.tracker(SessionId::new());

        assert_eq!(sessions.len(), 2);
        assert!(Arc::ptr_eq(&held, &sessions.tracker(busy)));
    }
}
