// In memory implementation of the EventStore port.
//
// Purpose
// - Volatile storage for the service and its tests. A restart resets to the seed.
//
// Responsibilities
// - Keep slots keyed by id, with `None` as the tombstone of a deleted event.
// - Hand out ids from a counter that only `delete_last_entry` rewinds.
// - Take the lock once per operation so every call is atomic.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::events::core::event::{Event, EventPatch, NewEvent, seed_events};
use crate::modules::events::core::ports::{EventStore, EventStoreError};
use crate::modules::events::core::reply::{ReturnMode, StoreReply};

#[derive(Debug)]
struct Slots {
    by_id: BTreeMap<u64, Option<Event>>,
    next_id: u64,
}

impl Default for Slots {
    fn default() -> Self {
        Self {
            by_id: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Slots {
    fn live(&self) -> Vec<Event> {
        self.by_id.values().flatten().cloned().collect()
    }

    fn reply(&self, mode: ReturnMode, touched: Event) -> StoreReply {
        match mode {
            ReturnMode::All => StoreReply::Events(self.live()),
            ReturnMode::Single => StoreReply::Event(touched),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Slots>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two records every fresh process starts with.
    pub fn seeded() -> Self {
        let mut slots = Slots::default();
        for event in seed_events() {
            slots.next_id = event.id + 1;
            slots.by_id.insert(event.id, Some(event));
        }
        Self {
            inner: RwLock::new(slots),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn add_event(
        &self,
        event: NewEvent,
        mode: ReturnMode,
    ) -> Result<StoreReply, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let id = guard.next_id;
        guard.next_id += 1;
        let event = event.into_event(id);
        guard.by_id.insert(id, Some(event.clone()));
        tracing::debug!(id, "event added");
        Ok(guard.reply(mode, event))
    }

    async fn get_events(
        &self,
        include_tombstones: bool,
    ) -> Result<Vec<Option<Event>>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        if include_tombstones {
            return Ok(guard.by_id.values().cloned().collect());
        }
        Ok(guard.live().into_iter().map(Some).collect())
    }

    async fn get_event_by_id(&self, id: u64) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.by_id.get(&id).cloned().flatten())
    }

    async fn get_events_by_title(&self, query: &str) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        let needle = query.to_lowercase();
        let guard = self.inner.read().await;
        Ok(guard
            .by_id
            .values()
            .flatten()
            .filter(|event| {
                event
                    .title_str()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn update_event(
        &self,
        id: u64,
        patch: EventPatch,
        mode: ReturnMode,
    ) -> Result<StoreReply, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let Some(Some(event)) = guard.by_id.get_mut(&id) else {
            return Err(EventStoreError::NotFound(id));
        };
        event.apply(patch);
        let updated = event.clone();
        tracing::debug!(id, "event updated");
        Ok(guard.reply(mode, updated))
    }

    async fn delete_event(
        &self,
        id: u64,
        mode: ReturnMode,
    ) -> Result<StoreReply, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let deleted = guard
            .by_id
            .get_mut(&id)
            .and_then(Option::take)
            .ok_or(EventStoreError::NotFound(id))?;
        tracing::debug!(id, "event tombstoned");
        Ok(match mode {
            ReturnMode::All => StoreReply::Events(guard.live()),
            ReturnMode::Single => StoreReply::DeletedEvent(deleted),
        })
    }

    async fn get_events_count(&self, include_tombstones: bool) -> Result<usize, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        if include_tombstones {
            return Ok(guard.by_id.len());
        }
        Ok(guard.by_id.values().flatten().count())
    }

    async fn delete_last_entry(&self) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if let Some((id, _)) = guard.by_id.pop_last() {
            guard.next_id = id;
        }
        Ok(())
    }
}
