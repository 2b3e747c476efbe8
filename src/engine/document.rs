#![forbid(unsafe_code)]

//! The text buffer threaded through a rewrite run

use std::fmt;

/// A document's full text content
///
/// A document has no identity beyond its content: two documents with the
/// same text are equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document(String);

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Document(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Document(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Document(text.to_string())
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
