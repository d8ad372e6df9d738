//! HTTP service that screens uploaded player options files (flat or zipped)
//! before a game is generated from them.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use adapters::{router::build_router, state::AppState};
