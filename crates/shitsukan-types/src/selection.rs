//! Selection paths through the category tree and the leaf they identify.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a selectable leaf; names one remote texture record.
///
/// Opaque to the controller. It is used verbatim as the last segment of the
/// fetch URL and compared by string equality.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeafId(String);

impl LeafId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for LeafId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafId({})", self.0)
    }
}

impl From<&str> for LeafId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LeafId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered walk from the root of the category tree to a chosen node.
///
/// The last element is the leaf identifier. An empty path means "nothing
/// selected" and collapses the controller back to its defaults.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionPath(Vec<String>);

impl SelectionPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The empty path (nothing selected).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The leaf identifier, i.e. the last element. `None` for an empty path
    /// or one whose last element is blank; both mean nothing is selected.
    pub fn leaf(&self) -> Option<LeafId> {
        self.0
            .last()
            .filter(|s| !s.is_empty())
            .map(|s| LeafId::new(s.as_str()))
    }
}

impl From<Vec<String>> for SelectionPath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl fmt::Display for SelectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" / "))
    }
}
