//! Record predicates used to select treatment and control groups.
//!
//! Predicates are plain values: they can be stored in the catalog, rendered
//! for listings and evaluated against any classified record.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use gef_classify::{ClassifiedRecord, CrossReference};
use gef_model::ProjectType;

/// A boolean test over one classified record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Record `type` equals the given tag.
    Type(ProjectType),
    /// Identifier is in the land-focus set.
    LandFocus,
    /// Identifier is in the biodiversity-focus set.
    BioFocus,
    /// Record's `multicountry` flag is set.
    MultiCountry,
    /// Record's `multiagency` flag is set.
    MultiAgency,
    /// Identifier appears on any `prog` record.
    InProgrammatic,
    /// Identifier appears on any `mfa` record.
    InMultiFocalArea,
    Not(Box<Predicate>),
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn matches(&self, record: &ClassifiedRecord, xref: &CrossReference) -> bool {
        match self {
            Self::Type(kind) => record.project_type == *kind,
            Self::LandFocus => record.land_focus,
            Self::BioFocus => record.bio_focus,
            Self::MultiCountry => record.multicountry,
            Self::MultiAgency => record.multiagency,
            Self::InProgrammatic => xref.programmatic.contains(&record.gef_id),
            Self::InMultiFocalArea => xref.multi_focal_area.contains(&record.gef_id),
            Self::Not(inner) => !inner.matches(record, xref),
            Self::All(parts) => parts.iter().all(|part| part.matches(record, xref)),
            Self::Any(parts) => parts.iter().any(|part| part.matches(record, xref)),
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, Self::All(parts) | Self::Any(parts) if parts.len() > 1)
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

/// `type == kind`.
pub fn is(kind: ProjectType) -> Predicate {
    Predicate::Type(kind)
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::All(mut parts) => {
                parts.push(rhs);
                Predicate::All(parts)
            }
            other => Predicate::All(vec![other, rhs]),
        }
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Predicate) -> Predicate {
        match self {
            Predicate::Any(mut parts) => {
                parts.push(rhs);
                Predicate::Any(parts)
            }
            other => Predicate::Any(vec![other, rhs]),
        }
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        match self {
            Predicate::Not(inner) => *inner,
            other => Predicate::Not(Box::new(other)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(kind) => write!(f, "type={kind}"),
            Self::LandFocus => f.write_str("land_focus"),
            Self::BioFocus => f.write_str("bio_focus"),
            Self::MultiCountry => f.write_str("multicountry"),
            Self::MultiAgency => f.write_str("multiagency"),
            Self::InProgrammatic => f.write_str("in_prog_ids"),
            Self::InMultiFocalArea => f.write_str("in_mfa_ids"),
            Self::Not(inner) => {
                f.write_str("!")?;
                inner.fmt_operand(f)
            }
            Self::All(parts) | Self::Any(parts) => {
                let separator = if matches!(self, Self::All(_)) { " & " } else { " | " };
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(separator)?;
                    }
                    part.fmt_operand(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gef_model::GefId;

    fn record(kind: ProjectType, id: &str) -> ClassifiedRecord {
        ClassifiedRecord {
            project_type: kind,
            gef_id: GefId::parse(id).unwrap(),
            land_focus: true,
            bio_focus: false,
            multicountry: false,
            multiagency: true,
        }
    }

    #[test]
    fn operators_flatten() {
        let p = is(ProjectType::Programmatic) & Predicate::LandFocus & Predicate::MultiCountry;
        assert!(matches!(&p, Predicate::All(parts) if parts.len() == 3));
        assert_eq!(!!Predicate::BioFocus, Predicate::BioFocus);
    }

    #[test]
    fn evaluates_against_record_and_xref() {
        let mut xref = CrossReference::default();
        xref.programmatic.insert(GefId::parse("5").unwrap());
        let land = record(ProjectType::LandDegradation, "5");

        let p = is(ProjectType::LandDegradation) & !Predicate::InProgrammatic;
        assert!(!p.matches(&land, &xref));
        let q = is(ProjectType::LandDegradation) & Predicate::MultiAgency & !Predicate::MultiCountry;
        assert!(q.matches(&land, &xref));
        let r = is(ProjectType::Biodiversity) | is(ProjectType::LandDegradation);
        assert!(r.matches(&land, &xref));
    }

    #[test]
    fn renders_nested_groups() {
        let p = (is(ProjectType::Biodiversity) | is(ProjectType::ExtendedBiodiversity))
            & !Predicate::MultiCountry;
        insta::assert_snapshot!(p.to_string(), @"(type=bio | type=bio_ext) & !multicountry");
    }
}
