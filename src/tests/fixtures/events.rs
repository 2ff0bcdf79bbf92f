// Shared test fixture for create payloads.

use crate::modules::events::core::event::NewEvent;
use serde_json::Value;

pub struct EventBuilder {
    inner: NewEvent,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewEvent {
                title: Some("a fixture event".into()),
                description: Some("built for tests".into()),
                ..NewEvent::default()
            },
        }
    }

    pub fn title(mut self, v: impl Into<Value>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<Value>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.inner.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod event_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = EventBuilder::new()
            .title("t")
            .description(Value::Null)
            .field("room", json!("B12"))
            .build();

        assert_eq!(built.title, Some(json!("t")));
        assert_eq!(built.description, Some(Value::Null));
        assert_eq!(built.extra.get("room"), Some(&json!("B12")));
    }
}
