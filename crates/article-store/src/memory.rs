//! In-memory implementation of [`ArticleStore`].
//!
//! [`InMemoryStore`] keeps articles in a `Vec` in insertion order. Every
//! id-based operation is a linear scan that stops at the first match.

use crate::traits::ArticleStore;
use crate::types::{Article, ArticleFields};

/// In-memory implementation of [`ArticleStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    articles: Vec<Article>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        InMemoryStore {
            articles: Vec::new(),
        }
    }

    /// Creates a store holding `articles` in the given order.
    pub fn from_articles(articles: Vec<Article>) -> Self {
        InMemoryStore { articles }
    }

    /// Creates a store holding the two sample articles the service starts with.
    pub fn seeded() -> Self {
        Self::from_articles(sample_articles())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.articles.iter().position(|article| article.id == id)
    }
}

/// The two articles a fresh service is seeded with, ids `"1"` and `"2"`.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article::new("1", "Hello", "Article Description", "Article Content"),
        Article::new("2", "Hello 2", "Article Description", "Article Content"),
    ]
}

impl ArticleStore for InMemoryStore {
    fn list(&self) -> Vec<Article> {
        self.articles.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Article> {
        self.articles.iter().find(|article| article.id == id).cloned()
    }

    fn append(&mut self, article: Article) {
        self.articles.push(article);
    }

    fn remove_by_id(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                // `remove` shifts the tail left, so order is preserved.
                self.articles.remove(index);
                true
            }
            None => false,
        }
    }

    fn update_by_id(&mut self, id: &str, fields: ArticleFields) -> Option<Article> {
        let index = self.position(id)?;
        let article = &mut self.articles[index];
        article.apply(fields);
        Some(article.clone())
    }

    fn len(&self) -> usize {
        self.articles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(store: &InMemoryStore) -> Vec<String> {
        store.list().into_iter().map(|a| a.id).collect()
    }

    fn fields(title: &str, desc: &str, content: &str) -> ArticleFields {
        ArticleFields {
            title: title.into(),
            desc: desc.into(),
            content: content.into(),
        }
    }

    #[test]
    fn test_seeded_store() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.find_by_id("2").unwrap().title, "Hello 2");
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.find_by_id("1"), None);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = InMemoryStore::new();
        store.append(Article::new("b", "", "", ""));
        store.append(Article::new("a", "", "", ""));
        store.append(Article::new("c", "", "", ""));
        assert_eq!(ids(&store), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut store = InMemoryStore::new();
        store.append(Article::new("x", "first", "", ""));
        store.append(Article::new("x", "second", "", ""));
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id("x").unwrap().title, "first");

        let updated = store.update_by_id("x", fields("changed", "", "")).unwrap();
        assert_eq!(updated.title, "changed");
        let titles: Vec<_> = store.list().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["changed", "second"]);

        assert!(store.remove_by_id("x"));
        assert_eq!(store.find_by_id("x").unwrap().title, "second");
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = InMemoryStore::seeded();
        store.append(Article::new("3", "X", "", ""));
        assert!(store.remove_by_id("2"));
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = InMemoryStore::seeded();
        assert!(!store.remove_by_id("missing"));
        assert_eq!(ids(&store), vec!["1", "2"]);
    }

    #[test]
    fn test_update_overwrites_fields_in_place() {
        let mut store = InMemoryStore::seeded();
        let updated = store
            .update_by_id("1", fields("New", "New desc", "New content"))
            .unwrap();
        assert_eq!(updated, Article::new("1", "New", "New desc", "New content"));
        assert_eq!(ids(&store), vec!["1", "2"]);
        assert_eq!(store.find_by_id("1"), Some(updated));
        assert_eq!(store.find_by_id("2").unwrap().title, "Hello 2");
    }

    #[test]
    fn test_update_absent_is_noop() {
        let mut store = InMemoryStore::seeded();
        let before = store.list();
        assert_eq!(store.update_by_id("9", fields("a", "b", "c")), None);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let mut store = InMemoryStore::seeded();
        let snapshot = store.list();
        store.append(Article::new("3", "", "", ""));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.len(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Append(u8),
        Remove(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..8).prop_map(Op::Append),
            (0u8..8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_size_tracks_appends_and_removals(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut store = InMemoryStore::seeded();
            let mut expected = 2usize;
            for op in ops {
                match op {
                    Op::Append(n) => {
                        store.append(Article::new(n.to_string(), "", "", ""));
                        expected += 1;
                    }
                    Op::Remove(n) => {
                        if store.remove_by_id(&n.to_string()) {
                            expected -= 1;
                        }
                    }
                }
                prop_assert_eq!(store.len(), expected);
                prop_assert_eq!(store.list().len(), expected);
            }
        }
    }
}
