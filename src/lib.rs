//! spsa.church site
//!
//! Server-rendered church website with a GraphQL content backend.
//!
//! This library provides:
//! - Header navigation logic (drawer state, active route, menu URLs)
//! - A small injectable store for UI state
//! - Dioxus components and pages shared by server rendering and the browser
//! - Content fetching with an in-memory cache (server)
//! - The HTTP API and server-rendered pages (server)

pub mod app;
pub mod content;
pub mod menu;
pub mod store;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
