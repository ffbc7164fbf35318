//! Article record types.
//!
//! [`Article`] is the single managed resource. Its `id` is supplied by the
//! caller and is not required to be unique.

use serde::{Deserialize, Serialize};

/// A stored article.
///
/// Missing fields in incoming JSON decode to empty strings, so a partial
/// body still produces a complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Caller-supplied identifier.
    pub id: String,
    /// Article title.
    pub title: String,
    /// Short description.
    pub desc: String,
    /// Body text.
    pub content: String,
}

impl Article {
    /// Creates an article from its four fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        desc: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Article {
            id: id.into(),
            title: title.into(),
            desc: desc.into(),
            content: content.into(),
        }
    }

    /// Splits the article into its id and its mutable fields.
    pub fn into_parts(self) -> (String, ArticleFields) {
        let fields = ArticleFields {
            title: self.title,
            desc: self.desc,
            content: self.content,
        };
        (self.id, fields)
    }

    /// Overwrites the mutable fields. The id is left untouched.
    pub fn apply(&mut self, fields: ArticleFields) {
        self.title = fields.title;
        self.desc = fields.desc;
        self.content = fields.content;
    }
}

/// The fields of an [`Article`] that an update may overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    /// New title.
    pub title: String,
    /// New description.
    pub desc: String,
    /// New body text.
    pub content: String,
}
