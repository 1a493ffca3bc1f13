use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Comparison family a catalog design belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseFamily {
    Programmatic,
    Biodiversity,
    MultiFocalArea,
}

impl CaseFamily {
    pub fn label(self) -> &'static str {
        match self {
            Self::Programmatic => "programmatic",
            Self::Biodiversity => "biodiversity",
            Self::MultiFocalArea => "multi-focal-area",
        }
    }
}

/// Counts produced by one case build.
///
/// `treatment` and `control` are predicate match counts over the full base
/// table; `overlap` counts records matching both; `total` is the final case size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStats {
    pub treatment: usize,
    pub control: usize,
    pub overlap: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSummary {
    pub name: String,
    pub family: CaseFamily,
    pub stats: CaseStats,
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipCounts {
    pub land_focus: usize,
    pub bio_focus: usize,
    pub multicountry: usize,
    pub multiagency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub generated_at: String,
    pub root: PathBuf,
    pub dry_run: bool,
    pub seed: Option<u64>,
    pub base_records: usize,
    pub rejected_records: usize,
    pub membership: MembershipCounts,
    pub cases: Vec<CaseSummary>,
}
