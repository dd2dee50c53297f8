//! Folio site
//!
//! The portfolio page as Dioxus components, plus the Axum server that
//! renders it once and serves it with its static assets.

pub mod ui;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod state;
