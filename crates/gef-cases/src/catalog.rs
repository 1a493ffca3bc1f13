//! The ordered catalog of comparison designs.
//!
//! Each design is a named pair of predicates. Designs only read the shared
//! classified table, so they can be evaluated in any order.
//!
//! `m5` and `m9` each carry two definitions that earlier versions of the
//! pipeline disagreed on; both are kept under distinct names (`m5_alt`,
//! `m9_alt`) instead of picking one.

use gef_model::{CaseFamily, ProjectType};

use crate::predicate::Predicate::{
    BioFocus, InMultiFocalArea, InProgrammatic, LandFocus, MultiAgency, MultiCountry,
};
use crate::predicate::{Predicate, is};

/// One named comparison design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDesign {
    pub name: &'static str,
    pub family: CaseFamily,
    pub description: &'static str,
    pub treatment: Predicate,
    pub control: Predicate,
    /// Written even in dry-run mode unless strict dry-run is requested.
    pub always_persist: bool,
}

impl CaseDesign {
    fn new(
        name: &'static str,
        family: CaseFamily,
        description: &'static str,
        treatment: Predicate,
        control: Predicate,
    ) -> Self {
        Self {
            name,
            family,
            description,
            treatment,
            control,
            always_persist: false,
        }
    }

    fn persist_always(mut self) -> Self {
        self.always_persist = true;
        self
    }
}

fn prog() -> Predicate {
    is(ProjectType::Programmatic)
}

fn mfa() -> Predicate {
    is(ProjectType::MultiFocalArea)
}

fn land() -> Predicate {
    is(ProjectType::LandDegradation)
}

fn bio() -> Predicate {
    is(ProjectType::Biodiversity)
}

fn bio_ext() -> Predicate {
    is(ProjectType::ExtendedBiodiversity)
}

fn rand() -> Predicate {
    is(ProjectType::RandomControl)
}

/// The full catalog in evaluation order.
pub fn catalog() -> Vec<CaseDesign> {
    let mut designs = programmatic_designs();
    designs.extend(biodiversity_designs());
    designs.extend(multi_focal_area_designs());
    designs
}

fn programmatic_designs() -> Vec<CaseDesign> {
    use CaseFamily::Programmatic as P;
    vec![
        CaseDesign::new(
            "m1",
            P,
            "Programmatic w/ LD objectives vs null-case comparisons",
            prog() & LandFocus,
            rand(),
        )
        .persist_always(),
        CaseDesign::new(
            "m2",
            P,
            "Programmatic w/ biodiversity objectives vs null-case comparisons",
            prog() & BioFocus,
            rand(),
        ),
        CaseDesign::new(
            "m3",
            P,
            "Programmatic w/ LD objectives vs MFA w/ LD objectives",
            prog() & LandFocus,
            mfa() & LandFocus,
        )
        .persist_always(),
        CaseDesign::new(
            "m4",
            P,
            "Programmatic w/ biodiversity objectives vs MFA w/ biodiversity objectives",
            prog() & BioFocus,
            mfa() & BioFocus,
        ),
        CaseDesign::new(
            "m5",
            P,
            "Programmatic multi-country w/ LD vs non-programmatic single-country LD",
            prog() & LandFocus & MultiCountry,
            land() & !InProgrammatic & !MultiCountry,
        ),
        CaseDesign::new(
            "m5_alt",
            P,
            "Programmatic multi-country w/ LD vs single-country null-case comparisons",
            prog() & LandFocus & MultiCountry,
            rand() & !MultiCountry,
        ),
        CaseDesign::new(
            "m6",
            P,
            "Programmatic multi-country w/ biodiversity vs non-programmatic single-country biodiversity",
            prog() & BioFocus & MultiCountry,
            bio() & !InProgrammatic & !MultiCountry,
        ),
        CaseDesign::new(
            "m7",
            P,
            "Programmatic multi-agency w/ LD vs non-programmatic single-agency LD",
            prog() & LandFocus & MultiAgency,
            land() & !InProgrammatic & !MultiAgency,
        ),
        CaseDesign::new(
            "m8",
            P,
            "Programmatic multi-agency w/ biodiversity vs non-programmatic single-agency biodiversity",
            prog() & BioFocus & MultiAgency,
            bio() & !InProgrammatic & !MultiAgency,
        ),
        CaseDesign::new(
            "m9",
            P,
            "Programmatic multi-country w/ LD vs programmatic single-country w/ LD",
            prog() & LandFocus & MultiCountry,
            prog() & LandFocus & !MultiCountry,
        ),
        CaseDesign::new(
            "m9_alt",
            P,
            "Programmatic multi-country vs programmatic single-country, any focal area",
            prog() & MultiCountry,
            prog() & !MultiCountry,
        ),
        CaseDesign::new(
            "m10",
            P,
            "Programmatic multi-country w/ biodiversity vs programmatic single-country w/ biodiversity",
            prog() & BioFocus & MultiCountry,
            prog() & BioFocus & !MultiCountry,
        ),
        CaseDesign::new(
            "m11",
            P,
            "Programmatic multi-agency w/ LD vs programmatic single-agency w/ LD",
            prog() & LandFocus & MultiAgency,
            prog() & LandFocus & !MultiAgency,
        ),
        CaseDesign::new(
            "m12",
            P,
            "Programmatic multi-agency w/ biodiversity vs programmatic single-agency w/ biodiversity",
            prog() & BioFocus & MultiAgency,
            prog() & BioFocus & !MultiAgency,
        ),
    ]
}

fn biodiversity_designs() -> Vec<CaseDesign> {
    use CaseFamily::Biodiversity as B;
    vec![
        CaseDesign::new(
            "b1",
            B,
            "Biodiversity projects vs null-case comparisons",
            bio(),
            rand(),
        ),
        CaseDesign::new(
            "b2",
            B,
            "Extended biodiversity projects vs null-case comparisons",
            bio_ext(),
            rand(),
        ),
        CaseDesign::new(
            "b3",
            B,
            "Multi-country biodiversity vs single-country biodiversity",
            (bio() | bio_ext()) & MultiCountry,
            (bio() | bio_ext()) & !MultiCountry,
        ),
    ]
}

fn multi_focal_area_designs() -> Vec<CaseDesign> {
    use CaseFamily::MultiFocalArea as F;
    vec![
        CaseDesign::new(
            "f1",
            F,
            "MFA w/ LD objectives vs null-case comparisons",
            mfa() & LandFocus,
            rand(),
        ),
        CaseDesign::new(
            "f2",
            F,
            "MFA w/ biodiversity objectives vs null-case comparisons",
            mfa() & BioFocus,
            rand(),
        ),
        CaseDesign::new(
            "f3",
            F,
            "MFA w/ LD objectives vs non-MFA LD projects",
            mfa() & LandFocus,
            land() & !InMultiFocalArea,
        ),
        CaseDesign::new(
            "f4",
            F,
            "MFA w/ biodiversity objectives vs non-MFA biodiversity projects",
            mfa() & BioFocus,
            bio() & !InMultiFocalArea,
        ),
    ]
}

/// Look up a design by name.
pub fn find_design<'a>(designs: &'a [CaseDesign], name: &str) -> Option<&'a CaseDesign> {
    designs.iter().find(|design| design.name == name)
}
