//! Storage for articles.
//!
//! Provides the [`ArticleStore`] trait defining the storage contract and the
//! [`InMemoryStore`] backend, an insertion-ordered list scanned linearly.
//!
//! # Modules
//!
//! - [`types`]: Article and ArticleFields records
//! - [`traits`]: ArticleStore trait definition
//! - [`memory`]: InMemoryStore implementation and sample seed data

pub mod memory;
pub mod traits;
pub mod types;

pub use memory::InMemoryStore;
pub use traits::ArticleStore;
pub use types::{Article, ArticleFields};
