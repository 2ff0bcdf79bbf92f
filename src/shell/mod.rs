// Composition root for the events service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the event store and wire it into the router state.
// - Own the HTTP surface, its layers and error mapping.

pub mod config;
pub mod error;
pub mod http;
pub mod state;
