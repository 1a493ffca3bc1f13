//! Ancillary reference tables and the columns each one contributes.

use serde::{Deserialize, Serialize};

/// One of the four ancillary reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AncillarySource {
    /// Country-driven project sheet, scanned for focal-area tokens.
    CdProjects,
    /// Multi-focal-area project sheet, scanned for focal-area tokens.
    MfaProjects,
    /// AidData ancillary export with the free-text `Sub-Foci` field.
    AidData,
    /// GEF project list with country and secondary agency columns.
    GefProjects,
}

impl AncillarySource {
    pub const ALL: [AncillarySource; 4] = [
        Self::CdProjects,
        Self::MfaProjects,
        Self::AidData,
        Self::GefProjects,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::CdProjects => "CD_MFA_CD_projects_sheet.csv",
            Self::MfaProjects => "CD_MFA_MFA_projects_sheet.csv",
            Self::AidData => "GEF_MFA_AidData_Ancillary.csv",
            Self::GefProjects => "gef_projects_160726.csv",
        }
    }

    pub fn id_column(self) -> &'static str {
        match self {
            Self::CdProjects | Self::MfaProjects => "GEF ID",
            Self::AidData | Self::GefProjects => "GEF_ID",
        }
    }

    /// Columns that must be present besides the identifier.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Self::CdProjects | Self::MfaProjects => &[],
            Self::AidData => &[SUB_FOCI_COLUMN],
            Self::GefProjects => &[COUNTRY_COLUMN, SECONDARY_AGENCY_COLUMN],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CdProjects => "cd_projects",
            Self::MfaProjects => "mfa_projects",
            Self::AidData => "aiddata",
            Self::GefProjects => "gef_projects",
        }
    }
}

/// Free-text focal-area field in the AidData export.
pub const SUB_FOCI_COLUMN: &str = "Sub-Foci";
/// Country field in the GEF project list.
pub const COUNTRY_COLUMN: &str = "Country";
/// Secondary agency field in the GEF project list.
pub const SECONDARY_AGENCY_COLUMN: &str = "Secondary agency(ies)";
