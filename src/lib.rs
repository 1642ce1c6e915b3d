//! Fichatrack — repair-ticket status tracker.
//!
//! ARCHITECTURE
//! ============
//! One pipeline: validate the customer identifier, fetch that customer's
//! repair tickets from the maintenance backend, render them as an HTML
//! status view (or the empty-state placeholder). The pipeline is exposed
//! two ways: [`flow::SearchFlow`] drives an injected presentation surface
//! for embedded use, and [`routes`] serves the same sequence over HTTP.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod model;
pub mod render;
pub mod routes;
pub mod validate;
