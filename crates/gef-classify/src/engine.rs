//! Classification of normalized project records.
//!
//! Builds the land-focus, biodiversity-focus, multi-country and multi-agency
//! sets from the base records and the ancillary tables, then attaches the
//! per-record `multicountry` / `multiagency` flags.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::{debug, info};

use gef_ingest::AncillaryTables;
use gef_model::{
    AncillarySource, COUNTRY_COLUMN, GefId, MULTIAGENCY_COLUMN, MULTICOUNTRY_COLUMN, ProjectType,
    SECONDARY_AGENCY_COLUMN, SUB_FOCI_COLUMN,
};

use crate::error::Result;
use crate::membership::{MembershipSet, MembershipSets};
use crate::normalize::{NormalizedBase, ProjectRecord};
use crate::rules::{ids_with_type, keyword_match, non_missing, token_scan, value_in};

/// Token that marks a land-degradation focal area in the project sheets.
pub const LAND_TOKEN: &str = "LD";
/// Token that marks a biodiversity focal area in the project sheets.
pub const BIO_TOKEN: &str = "BD";
/// Free-text keywords indicating a land-degradation focus.
pub const LAND_KEYWORDS: [&str; 8] = [
    "LD",
    "Sustainable",
    "SFM",
    "REDD",
    "LULUCF",
    "Land",
    "Degradation",
    "Degredation",
];
/// Free-text keywords indicating a biodiversity focus.
pub const BIO_KEYWORDS: [&str; 2] = ["BD", "Biodiversity"];
/// `Country` values that mark a project as multi-country.
pub const MULTICOUNTRY_VALUES: [&str; 2] = ["Regional", "Global"];

/// Options that affect classification output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyOptions {
    /// Seed for the random-control flag draw. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// One classified base record, row-aligned with [`ClassifiedTable::data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedRecord {
    pub project_type: ProjectType,
    pub gef_id: GefId,
    pub land_focus: bool,
    pub bio_focus: bool,
    pub multicountry: bool,
    pub multiagency: bool,
}

/// Identifier lists derived from the base table's own type tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReference {
    /// Every identifier ever tagged `prog`.
    pub programmatic: MembershipSet,
    /// Every identifier ever tagged `mfa`.
    pub multi_focal_area: MembershipSet,
}

/// The classified base table, shared read-only by every case build.
#[derive(Debug, Clone)]
pub struct ClassifiedTable {
    pub data: DataFrame,
    pub records: Vec<ClassifiedRecord>,
    pub sets: MembershipSets,
    pub cross_reference: CrossReference,
    pub rejected: usize,
}

impl ClassifiedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Land-focus identifiers: `land` records, `LD` in either project sheet, or
/// land keywords in the AidData `Sub-Foci` text.
pub fn land_focus_ids(records: &[ProjectRecord], ancillary: &AncillaryTables) -> Result<MembershipSet> {
    focus_ids(
        records,
        ancillary,
        &[ProjectType::LandDegradation],
        LAND_TOKEN,
        &LAND_KEYWORDS,
    )
}

/// Biodiversity-focus identifiers: `bio`/`bio_ext` records, `BD` in either
/// project sheet, or biodiversity keywords in the AidData `Sub-Foci` text.
pub fn bio_focus_ids(records: &[ProjectRecord], ancillary: &AncillaryTables) -> Result<MembershipSet> {
    focus_ids(
        records,
        ancillary,
        &[ProjectType::Biodiversity, ProjectType::ExtendedBiodiversity],
        BIO_TOKEN,
        &BIO_KEYWORDS,
    )
}

fn focus_ids(
    records: &[ProjectRecord],
    ancillary: &AncillaryTables,
    types: &[ProjectType],
    token: &str,
    keywords: &[&str],
) -> Result<MembershipSet> {
    let mut sources = Vec::with_capacity(4);
    sources.push(ids_with_type(records, types));
    for source in [AncillarySource::CdProjects, AncillarySource::MfaProjects] {
        sources.push(token_scan(
            ancillary.get(source),
            source.label(),
            source.id_column(),
            token,
        )?);
    }
    let aid = AncillarySource::AidData;
    sources.push(keyword_match(
        ancillary.get(aid),
        aid.label(),
        aid.id_column(),
        SUB_FOCI_COLUMN,
        keywords,
    )?);
    debug!(
        token,
        by_type = sources[0].len(),
        cd_projects = sources[1].len(),
        mfa_projects = sources[2].len(),
        aiddata = sources[3].len(),
        "focus set contributions"
    );
    Ok(MembershipSet::union_all(sources))
}

/// Multi-country identifiers: GEF project list rows with `Country` of
/// `Regional` or `Global`.
pub fn multicountry_ids(ancillary: &AncillaryTables) -> Result<MembershipSet> {
    let gef = AncillarySource::GefProjects;
    value_in(
        ancillary.get(gef),
        gef.label(),
        gef.id_column(),
        COUNTRY_COLUMN,
        &MULTICOUNTRY_VALUES,
    )
}

/// Multi-agency identifiers: GEF project list rows naming a secondary agency.
pub fn multiagency_ids(ancillary: &AncillaryTables) -> Result<MembershipSet> {
    let gef = AncillarySource::GefProjects;
    non_missing(
        ancillary.get(gef),
        gef.label(),
        gef.id_column(),
        SECONDARY_AGENCY_COLUMN,
    )
}

/// Compute all four membership sets.
pub fn membership_sets(records: &[ProjectRecord], ancillary: &AncillaryTables) -> Result<MembershipSets> {
    Ok(MembershipSets {
        land_focus: land_focus_ids(records, ancillary)?,
        bio_focus: bio_focus_ids(records, ancillary)?,
        multicountry: multicountry_ids(ancillary)?,
        multiagency: multiagency_ids(ancillary)?,
    })
}

/// Classify a normalized base table.
///
/// Random-control records have no ancillary match, so their `multicountry` and
/// `multiagency` flags are drawn independently and uniformly at random. Runs
/// are reproducible only when `options.seed` is set.
pub fn classify(
    base: NormalizedBase,
    ancillary: &AncillaryTables,
    options: ClassifyOptions,
) -> Result<ClassifiedTable> {
    let NormalizedBase {
        mut data,
        records,
        rejected,
    } = base;
    let sets = membership_sets(&records, ancillary)?;
    let cross_reference = CrossReference {
        programmatic: ids_with_type(&records, &[ProjectType::Programmatic]),
        multi_focal_area: ids_with_type(&records, &[ProjectType::MultiFocalArea]),
    };

    let mut rng = match options.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut classified = Vec::with_capacity(records.len());
    let mut controls = 0usize;
    for record in records {
        let (multicountry, multiagency) = if record.project_type.is_random_control() {
            controls += 1;
            (rng.bool(), rng.bool())
        } else {
            (
                sets.multicountry.contains(&record.gef_id),
                sets.multiagency.contains(&record.gef_id),
            )
        };
        classified.push(ClassifiedRecord {
            land_focus: sets.land_focus.contains(&record.gef_id),
            bio_focus: sets.bio_focus.contains(&record.gef_id),
            multicountry,
            multiagency,
            project_type: record.project_type,
            gef_id: record.gef_id,
        });
    }

    let flag = |select: fn(&ClassifiedRecord) -> bool| -> Vec<i32> {
        classified.iter().map(|r| i32::from(select(r))).collect()
    };
    data.with_column(Series::new(
        MULTICOUNTRY_COLUMN.into(),
        flag(|r| r.multicountry),
    ))?;
    data.with_column(Series::new(
        MULTIAGENCY_COLUMN.into(),
        flag(|r| r.multiagency),
    ))?;

    info!(
        records = classified.len(),
        random_controls = controls,
        rejected = rejected.len(),
        land_focus = sets.land_focus.len(),
        bio_focus = sets.bio_focus.len(),
        multicountry = sets.multicountry.len(),
        multiagency = sets.multiagency.len(),
        seed = ?options.seed,
        "classification complete"
    );
    Ok(ClassifiedTable {
        data,
        records: classified,
        sets,
        cross_reference,
        rejected: rejected.len(),
    })
}
