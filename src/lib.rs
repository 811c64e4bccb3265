//! Random Video API — Shared Library
//!
//! This crate contains the configuration, upstream models, YouTube
//! client, selection logic, and response shaping used by the API
//! handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod selector;
pub mod youtube;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
