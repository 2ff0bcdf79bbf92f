// Event records and the payloads used to create and patch them.
//
// Purpose
// - Give the loosely shaped JSON event a fixed set of known fields plus an open
//   extension map, so merges stay well defined.
//
// Boundaries
// - No validation. Known fields hold any JSON value, `null` included, and stay
//   absent when the caller leaves them out. Unknown fields are carried verbatim
//   in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the record itself. They never live in `extra`.
const RESERVED_KEYS: [&str; 3] = ["id", "title", "description"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// The title when it is a string. Any other value never matches a search.
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_ref().and_then(Value::as_str)
    }

    /// Shallow merge of `patch` onto this record. The id is never touched.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        self.extra.extend(strip_reserved(patch.extra));
    }
}

/// Body of a create request: an event without its id.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewEvent {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewEvent {
    pub fn into_event(self, id: u64) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            extra: strip_reserved(self.extra),
        }
    }
}

/// Body of an update request. A field sent as `null` is merged as `null`; a
/// field left out keeps its value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventPatch {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// `Option<Value>` alone would read `null` as absent.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
    extra
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: Some("an event".into()),
            description: Some("something really cool".into()),
            extra: Map::new(),
        },
        Event {
            id: 2,
            title: Some("another event".into()),
            description: Some("something even cooler".into()),
            extra: Map::new(),
        },
    ]
}
