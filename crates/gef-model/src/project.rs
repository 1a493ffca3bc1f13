//! Project record vocabulary: type tags, treatment labels and column names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Project type column in the merged base table.
pub const TYPE_COLUMN: &str = "type";
/// External project identifier column in the merged base table.
pub const GEF_ID_COLUMN: &str = "gef_id";
/// Case label column written to every case table.
pub const TREATMENT_COLUMN: &str = "treatment";
/// Multi-country flag attached by classification.
pub const MULTICOUNTRY_COLUMN: &str = "multicountry";
/// Multi-agency flag attached by classification.
pub const MULTIAGENCY_COLUMN: &str = "multiagency";

/// Categorical project type from the `type` column.
///
/// The tag strings are the values used in the merged dataset; anything else is
/// kept verbatim as [`ProjectType::Other`] and matches no type predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Programmatic,
    MultiFocalArea,
    LandDegradation,
    Biodiversity,
    ExtendedBiodiversity,
    RandomControl,
    Other(String),
}

impl ProjectType {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "prog" => Self::Programmatic,
            "mfa" => Self::MultiFocalArea,
            "land" => Self::LandDegradation,
            "bio" => Self::Biodiversity,
            "bio_ext" => Self::ExtendedBiodiversity,
            "rand" => Self::RandomControl,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Programmatic => "prog",
            Self::MultiFocalArea => "mfa",
            Self::LandDegradation => "land",
            Self::Biodiversity => "bio",
            Self::ExtendedBiodiversity => "bio_ext",
            Self::RandomControl => "rand",
            Self::Other(tag) => tag,
        }
    }

    /// Random-control records carry no real project identifier.
    pub fn is_random_control(&self) -> bool {
        matches!(self, Self::RandomControl)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Tri-state case label stored in the `treatment` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treatment {
    #[default]
    Unassigned,
    Treatment,
    Control,
}

impl Treatment {
    /// Numeric code written to case tables (`-1` never survives a build).
    pub fn code(self) -> i32 {
        match self {
            Self::Unassigned => -1,
            Self::Treatment => 1,
            Self::Control => 0,
        }
    }

    pub fn is_assigned(self) -> bool {
        !matches!(self, Self::Unassigned)
    }
}
