// Ports define what the router needs from event storage, without implementing it.
//
// Responsibilities
// - Describe the CRUD primitives over the event collection as an async trait.
// - Keep handlers independent of where events live.
//
// Testing guidance
// - The in memory adapter doubles as the test implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::modules::events::core::reply::{ReturnMode, StoreReply};

#[derive(Debug, Error, PartialEq)]
pub enum EventStoreError {
    #[error("event {0} not found")]
    NotFound(u64),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Assigns the next id and appends the event.
    async fn add_event(&self, event: NewEvent, mode: ReturnMode)
    -> Result<StoreReply, EventStoreError>;

    /// Every slot in id order. `None` marks a tombstone and only shows up when
    /// `include_tombstones` is set.
    async fn get_events(
        &self,
        include_tombstones: bool,
    ) -> Result<Vec<Option<Event>>, EventStoreError>;

    async fn get_event_by_id(&self, id: u64) -> Result<Option<Event>, EventStoreError>;

    /// Case-insensitive substring match on live titles.
    async fn get_events_by_title(&self, query: &str) -> Result<Vec<Event>, EventStoreError>;

    async fn update_event(
        &self,
        id: u64,
        patch: EventPatch,
        mode: ReturnMode,
    ) -> Result<StoreReply, EventStoreError>;

    /// Tombstones the slot. The id is never handed out again.
    async fn delete_event(&self, id: u64, mode: ReturnMode)
    -> Result<StoreReply, EventStoreError>;

    async fn get_events_count(&self, include_tombstones: bool) -> Result<usize, EventStoreError>;

    /// Physically drops the highest slot, freeing its id.
    async fn delete_last_entry(&self) -> Result<(), EventStoreError>;

    async fn live_events(&self) -> Result<Vec<Event>, EventStoreError> {
        Ok(self.get_events(false).await?.into_iter().flatten().collect())
    }
}
