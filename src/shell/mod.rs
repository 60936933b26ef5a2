// Composition root for the events backend.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory store and auth adapters.
// - Wire them into the lifecycle mutator and the event feed.
// - Spawn the feed runner and serve REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;
