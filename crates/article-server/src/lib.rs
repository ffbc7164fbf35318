//! HTTP/JSON API server for articles.
//!
//! Exposes list, fetch, create, update, and delete over REST routes backed by
//! a single lock-guarded [`article_store::ArticleStore`]. This crate contains
//! the configuration, application state, error handling, and route
//! definitions; the binary in `main.rs` wires them to a TCP listener.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
