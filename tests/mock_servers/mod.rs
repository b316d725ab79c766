//! Mock servers for content integration testing
//!
//! These mock servers simulate the content backend so the GraphQL client and
//! the cache can be exercised over real HTTP.

pub mod graphql;

pub use graphql::MockGraphQlServer;
