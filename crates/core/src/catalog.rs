use std::collections::HashSet;
use thiserror::Error;

use crate::catalog_data;
use crate::model::{Branch, RankEntry, RankId};

/// A quiz needs one correct answer plus three distractors.
pub const MIN_DISTINCT_LABELS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog for {branch} is empty")]
    Empty { branch: Branch },

    #[error("catalog for {branch} has only {distinct} distinct labels, needs {MIN_DISTINCT_LABELS}")]
    TooFewLabels { branch: Branch, distinct: usize },
}

/// Read-only provider of the per-branch rank catalogs.
///
/// Each branch exposes an ordered, immutable entry list. `Combined` is the
/// concatenation navy + army + air; it is materialized once at construction
/// so `entries` can hand out slices for every branch.
#[derive(Debug, Clone)]
pub struct Catalog {
    navy: Vec<RankEntry>,
    army: Vec<RankEntry>,
    air: Vec<RankEntry>,
    combined: Vec<RankEntry>,
}

impl Catalog {
    /// Build a catalog from per-branch entry lists.
    pub fn new(navy: Vec<RankEntry>, army: Vec<RankEntry>, air: Vec<RankEntry>) -> Self {
        let mut combined = Vec::with_capacity(navy.len() + army.len() + air.len());
        combined.extend(navy.iter().cloned());
        combined.extend(army.iter().cloned());
        combined.extend(air.iter().cloned());
        Self {
            navy,
            army,
            air,
            combined,
        }
    }

    /// The embedded Canadian Armed Forces datasets (19 entries per branch).
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            from_raw(catalog_data::NAVY),
            from_raw(catalog_data::ARMY),
            from_raw(catalog_data::AIR),
        )
    }

    /// Ordered entries for a branch.
    #[must_use]
    pub fn entries(&self, branch: Branch) -> &[RankEntry] {
        match branch {
            Branch::Navy => &self.navy,
            Branch::Army => &self.army,
            Branch::Air => &self.air,
            Branch::Combined => &self.combined,
        }
    }

    /// Check that a branch can back a quiz: non-empty with at least
    /// [`MIN_DISTINCT_LABELS`] distinct rank labels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` or `CatalogError::TooFewLabels`.
    pub fn validate(&self, branch: Branch) -> Result<(), CatalogError> {
        check_quizable(branch, self.entries(branch))
    }
}

/// Validate that an entry list can back a quiz for `branch`.
///
/// # Errors
///
/// Returns `CatalogError::Empty` for an empty list and
/// `CatalogError::TooFewLabels` when fewer than [`MIN_DISTINCT_LABELS`]
/// distinct rank labels exist.
pub fn check_quizable(branch: Branch, entries: &[RankEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty { branch });
    }
    let distinct: HashSet<&str> = entries.iter().map(|e| e.rank.as_str()).collect();
    if distinct.len() < MIN_DISTINCT_LABELS {
        return Err(CatalogError::TooFewLabels {
            branch,
            distinct: distinct.len(),
        });
    }
    Ok(())
}

fn from_raw(raw: &[catalog_data::RawRank]) -> Vec<RankEntry> {
    raw.iter()
        .map(|(id, rank, description, fact, image_ref)| {
            RankEntry::new(RankId::new(*id), *rank, *description, *fact, *image_ref)
        })
        .collect()
}
