use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rank entry, unique within one branch catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankId(u32);

impl RankId {
    /// Creates a new `RankId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankId({})", self.0)
    }
}

impl fmt::Display for RankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a branch catalog.
///
/// The `rank` label doubles as the answer key for multiple-choice questions,
/// so two entries with the same label are indistinguishable to the quiz.
/// Entries are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub id: RankId,
    pub rank: String,
    pub description: String,
    pub fact: String,
    pub image_ref: String,
}

impl RankEntry {
    #[must_use]
    pub fn new(
        id: RankId,
        rank: impl Into<String>,
        description: impl Into<String>,
        fact: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rank: rank.into(),
            description: description.into(),
            fact: fact.into(),
            image_ref: image_ref.into(),
        }
    }
}
