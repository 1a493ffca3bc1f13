pub mod error;
pub mod ids;
pub mod project;
pub mod report;
pub mod sources;

pub use error::{ModelError, Result};
pub use ids::{GefId, SENTINEL_GEF_ID, normalize_gef_id};
pub use project::{
    GEF_ID_COLUMN, MULTIAGENCY_COLUMN, MULTICOUNTRY_COLUMN, ProjectType, TREATMENT_COLUMN,
    TYPE_COLUMN, Treatment,
};
pub use report::{CaseFamily, CaseStats, CaseSummary, MembershipCounts, RunReport};
pub use sources::{
    AncillarySource, COUNTRY_COLUMN, SECONDARY_AGENCY_COLUMN, SUB_FOCI_COLUMN,
};
