//! The [`ArticleStore`] trait defining the storage contract for articles.
//!
//! Id-based operations address the *first* article whose id matches, in
//! insertion order. Duplicate ids are allowed; later duplicates are only
//! reachable through [`ArticleStore::list`].
//!
//! The trait is synchronous. Callers that share a store between tasks wrap
//! it in a single lock and hold that lock for the whole call.

use crate::types::{Article, ArticleFields};

/// The storage contract for articles.
pub trait ArticleStore {
    /// Returns a copy of every article in insertion order.
    fn list(&self) -> Vec<Article>;

    /// Returns the first article with the given id.
    fn find_by_id(&self, id: &str) -> Option<Article>;

    /// Appends an article to the end. No uniqueness check is made.
    fn append(&mut self, article: Article);

    /// Removes the first article with the given id, keeping the order of the
    /// rest. Returns `false` and leaves the store unchanged if none matches.
    fn remove_by_id(&mut self, id: &str) -> bool;

    /// Overwrites title, desc and content of the first article with the given
    /// id and returns the updated article. Returns `None` if none matches.
    fn update_by_id(&mut self, id: &str, fields: ArticleFields) -> Option<Article>;

    /// Number of stored articles.
    fn len(&self) -> usize;

    /// Returns `true` when the store holds no articles.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
