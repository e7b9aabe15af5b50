//! Dataset records - the unit a search returns.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Source category for a dataset.
///
/// A closed set: the model is instructed to pick exactly one of these
/// four, and the validator rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Universities and academic consortia
    Academic,

    /// Government agencies and public-sector portals
    Government,

    /// Research institutions and labs
    Research,

    /// Companies and commercial data providers
    Commercial,
}

impl Domain {
    /// All valid domains, in canonical order.
    pub const ALL: [Domain; 4] = [
        Domain::Academic,
        Domain::Government,
        Domain::Research,
        Domain::Commercial,
    ];

    /// Canonical string form (matches the serialized representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Academic => "Academic",
            Domain::Government => "Government",
            Domain::Research => "Research",
            Domain::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ValidationError;

    /// Exact match only - no case folding, no aliases.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Academic" => Ok(Domain::Academic),
            "Government" => Ok(Domain::Government),
            "Research" => Ok(Domain::Research),
            "Commercial" => Ok(Domain::Commercial),
            other => Err(ValidationError::UnknownDomain {
                value: other.to_string(),
            }),
        }
    }
}

/// One discovered dataset.
///
/// Only ever materialized from a candidate that passed every validator
/// check; there is no partially-constructed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name (non-empty, not necessarily unique across results)
    pub name: String,

    /// What the dataset contains (50-200 characters)
    pub description: String,

    /// Direct access link, taken at face value - never fetched here
    pub url: String,

    /// Source category
    pub domain: Domain,

    /// Example applications, in the order the model gave them (2-5 entries)
    pub use_cases: Vec<String>,

    /// Rank-derived relevance in [0.0, 1.0]; non-increasing down the result
    pub relevance_score: f32,

    /// When this record was materialized (not when it was cached)
    pub timestamp: DateTime<Utc>,
}
