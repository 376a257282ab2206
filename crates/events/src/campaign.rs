//! Campaign aggregate
//!
//! One [`CampaignState`] per loaded campaign: the frozen event store plus
//! the current bounce criteria. [`Campaign`] is the handle the application
//! constructs and passes around explicitly — there is no ambient global.
//!
//! Readers take cheap `Arc` snapshots and may run queries concurrently;
//! mutations (new load, criteria update, clear) are serialized by the write
//! lock and swap the state atomically, so a reader never observes a
//! half-updated aggregate.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::bounce::BounceCriteria;
use crate::store::EventStore;

/// Immutable state of one loaded campaign
#[derive(Debug)]
pub struct CampaignState {
    /// The campaign's events, frozen after ingestion
    store: Arc<EventStore>,
    /// Criteria every bounce query evaluates under
    criteria: BounceCriteria,
}

impl CampaignState {
    /// Create campaign state from a populated store and criteria
    pub fn new(store: EventStore, criteria: BounceCriteria) -> Self {
        Self {
            store: Arc::new(store),
            criteria,
        }
    }

    /// Create an empty campaign state with default criteria
    pub fn empty() -> Self {
        Self::new(EventStore::new(), BounceCriteria::default())
    }

    /// The campaign's event store
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// The current bounce criteria
    pub fn criteria(&self) -> BounceCriteria {
        self.criteria
    }

    /// Same events, different criteria
    ///
    /// Shares the underlying store, so criteria updates never copy event
    /// data.
    pub fn with_criteria(&self, criteria: BounceCriteria) -> Self {
        Self {
            store: Arc::clone(&self.store),
            criteria,
        }
    }
}

/// Handle to the currently loaded campaign
///
/// Single-writer, multi-reader: queries clone the current snapshot, writers
/// replace it wholesale.
#[derive(Debug)]
pub struct Campaign {
    state: RwLock<Arc<CampaignState>>,
}

impl Campaign {
    /// Create a handle over an initial state
    pub fn new(state: CampaignState) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
        }
    }

    /// Create a handle with no campaign loaded
    pub fn empty() -> Self {
        Self::new(CampaignState::empty())
    }

    /// Snapshot of the current state
    ///
    /// The snapshot is immutable and unaffected by later swaps; it stays
    /// valid for as long as the caller holds the `Arc`.
    pub fn snapshot(&self) -> Arc<CampaignState> {
        Arc::clone(&self.state.read())
    }

    /// Replace the loaded campaign wholesale
    pub fn replace(&self, state: CampaignState) {
        *self.state.write() = Arc::new(state);
    }

    /// Swap in new bounce criteria, keeping the loaded events
    pub fn update_bounce_criteria(&self, criteria: BounceCriteria) {
        let mut guard = self.state.write();
        *guard = Arc::new(guard.with_criteria(criteria));
    }

    /// Drop the loaded campaign, returning to an empty state
    pub fn clear(&self) {
        self.replace(CampaignState::empty());
    }
}

impl Default for Campaign {
    fn default() -> Self {
        Self::empty()
    }
}
