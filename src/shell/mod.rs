// Composition root for the work_timers bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate infrastructure and wire it into use case handlers.
// - Expose the REST router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
