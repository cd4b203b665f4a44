//! Typed board change events for external display synchronization
//!
//! The solver never reads these events; they exist so a rendering
//! collaborator can mirror board mutations without polling. Dispatch is
//! synchronous and happens immediately after the state change is applied.

use std::collections::HashMap;
use std::fmt;

/// A single board mutation, reported after the state change is applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// A queen marker was written
    QueenPlaced {
        /// Row of the mutated cell
        row: usize,
        /// Column of the mutated cell
        col: usize,
    },
    /// A blocked marker was written
    BlockerPlaced {
        /// Row of the mutated cell
        row: usize,
        /// Column of the mutated cell
        col: usize,
    },
    /// The marker at the coordinates was cleared
    MarkerRemoved {
        /// Row of the mutated cell
        row: usize,
        /// Column of the mutated cell
        col: usize,
    },
    /// The region id at the coordinates changed
    RegionUpdated {
        /// Row of the mutated cell
        row: usize,
        /// Column of the mutated cell
        col: usize,
        /// Newly assigned region id
        region: usize,
    },
}

impl BoardEvent {
    /// The event kind, used as the callback registration key
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::QueenPlaced { .. } => EventKind::QueenPlaced,
            Self::BlockerPlaced { .. } => EventKind::BlockerPlaced,
            Self::MarkerRemoved { .. } => EventKind::MarkerRemoved,
            Self::RegionUpdated { .. } => EventKind::RegionUpdated,
        }
    }
}

/// Callback registration key, one per event variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Key for [`BoardEvent::QueenPlaced`]
    QueenPlaced,
    /// Key for [`BoardEvent::BlockerPlaced`]
    BlockerPlaced,
    /// Key for [`BoardEvent::MarkerRemoved`]
    MarkerRemoved,
    /// Key for [`BoardEvent::RegionUpdated`]
    RegionUpdated,
}

/// Boxed callback invoked synchronously after the matching mutation
pub type EventCallback = Box<dyn FnMut(&BoardEvent)>;

/// Per-kind callback table
///
/// At most one callback is held per event kind; registering a second one
/// replaces the first. No ordering guarantees exist beyond synchronous,
/// immediate invocation.
#[derive(Default)]
pub struct EventDispatcher {
    callbacks: HashMap<EventKind, EventCallback>,
}

impl EventDispatcher {
    /// Register a callback for one event kind, replacing any previous one
    pub fn set(&mut self, kind: EventKind, callback: EventCallback) {
        self.callbacks.insert(kind, callback);
    }

    /// Remove the callback for one event kind, if any
    pub fn unset(&mut self, kind: EventKind) {
        self.callbacks.remove(&kind);
    }

    /// Invoke the callback registered for the event's kind
    pub fn dispatch(&mut self, event: &BoardEvent) {
        if let Some(callback) = self.callbacks.get_mut(&event.kind()) {
            callback(event);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<EventKind> = self.callbacks.keys().copied().collect();
        kinds.sort_unstable_by_key(|kind| *kind as usize);
        f.debug_struct("EventDispatcher")
            .field("registered", &kinds)
            .finish()
    }
}
