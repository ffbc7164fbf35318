//! HTTP handler modules for the article API.
//!
//! Handlers are thin: they decode the request, acquire the store lock,
//! call one [`article_store::ArticleStore`] method, and encode the result.

pub mod articles;
pub mod home;
