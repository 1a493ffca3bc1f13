#![deny(unsafe_code)]

use std::fmt;

use gef_common::parse_integral;

use crate::error::ModelError;
use crate::project::ProjectType;

/// Reserved identifier for random-control records.
pub const SENTINEL_GEF_ID: &str = "-1";

/// A normalized project identifier: a canonical integer string or the sentinel.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GefId(String);

impl GefId {
    /// Parse an identifier that must be an integer or an integer-valued float.
    pub fn parse(raw: &str) -> Option<Self> {
        parse_integral(raw).map(|value| Self(value.to_string()))
    }

    pub fn sentinel() -> Self {
        Self(SENTINEL_GEF_ID.to_string())
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == SENTINEL_GEF_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize the raw `gef_id` of one base-table record.
///
/// Random-control records always receive the sentinel. Every other record must
/// carry an integer-valued identifier other than the sentinel; anything else is
/// rejected so the row can be dropped before classification.
pub fn normalize_gef_id(raw: Option<&str>, project_type: &ProjectType) -> Result<GefId, ModelError> {
    if project_type.is_random_control() {
        return Ok(GefId::sentinel());
    }
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Err(ModelError::MissingId {
            project_type: project_type.to_string(),
        });
    };
    let id = GefId::parse(raw).ok_or_else(|| ModelError::MalformedId {
        raw: raw.to_string(),
        project_type: project_type.to_string(),
    })?;
    if id.is_sentinel() {
        return Err(ModelError::ReservedId {
            raw: raw.to_string(),
            project_type: project_type.to_string(),
        });
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_forms_normalize() {
        let prog = ProjectType::Programmatic;
        assert_eq!(normalize_gef_id(Some("3"), &prog).unwrap().as_str(), "3");
        assert_eq!(normalize_gef_id(Some("3.0"), &prog).unwrap().as_str(), "3");
        assert_eq!(normalize_gef_id(Some(" 0042 "), &prog).unwrap().as_str(), "42");
    }

    #[test]
    fn random_control_ignores_raw_value() {
        let rand = ProjectType::RandomControl;
        assert!(normalize_gef_id(None, &rand).unwrap().is_sentinel());
        assert!(normalize_gef_id(Some("abc"), &rand).unwrap().is_sentinel());
        assert!(normalize_gef_id(Some("981"), &rand).unwrap().is_sentinel());
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let land = ProjectType::LandDegradation;
        assert_eq!(
            normalize_gef_id(Some("abc"), &land),
            Err(ModelError::MalformedId {
                raw: "abc".to_string(),
                project_type: "land".to_string(),
            })
        );
        assert!(normalize_gef_id(Some("12.5"), &land).is_err());
        assert_eq!(
            normalize_gef_id(Some("  "), &land),
            Err(ModelError::MissingId {
                project_type: "land".to_string(),
            })
        );
    }

    #[test]
    fn sentinel_is_reserved_for_random_controls() {
        let prog = ProjectType::Programmatic;
        for raw in ["-1", "-1.0", " -1 "] {
            assert_eq!(
                normalize_gef_id(Some(raw), &prog),
                Err(ModelError::ReservedId {
                    raw: raw.to_string(),
                    project_type: "prog".to_string(),
                })
            );
        }
        assert_eq!(normalize_gef_id(Some("-2"), &prog).unwrap().as_str(), "-2");
    }
}
