use serde::Serialize;

use crate::modules::events::core::event::Event;

/// Whether a mutation answers with every live event or only the touched one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnMode {
    #[default]
    All,
    Single,
}

/// What a store mutation hands back. Serialized as `{"events": [...]}`,
/// `{"event": {...}}` or `{"deletedEvent": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StoreReply {
    Events(Vec<Event>),
    Event(Event),
    DeletedEvent(Event),
}
