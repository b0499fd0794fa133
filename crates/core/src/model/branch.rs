use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service branch a quiz draws its questions from.
///
/// `Combined` concatenates the navy, army and air catalogs in that fixed
/// order. Stats are kept per branch, `Combined` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Navy,
    Army,
    Air,
    Combined,
}

impl Branch {
    /// All branches, in catalog concatenation order.
    pub const ALL: [Branch; 4] = [Branch::Navy, Branch::Army, Branch::Air, Branch::Combined];

    /// Lowercase wire name, also used as the persistence key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Navy => "navy",
            Branch::Army => "army",
            Branch::Air => "air",
            Branch::Combined => "combined",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a `Branch` from its wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBranchError {
    input: String,
}

impl fmt::Display for ParseBranchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown branch: {}", self.input)
    }
}

impl std::error::Error for ParseBranchError {}

impl FromStr for Branch {
    type Err = ParseBranchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navy" => Ok(Branch::Navy),
            "army" => Ok(Branch::Army),
            "air" => Ok(Branch::Air),
            "combined" => Ok(Branch::Combined),
            other => Err(ParseBranchError {
                input: other.to_string(),
            }),
        }
    }
}
