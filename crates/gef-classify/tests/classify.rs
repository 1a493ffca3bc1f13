//! Integration tests for normalization and classification.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use gef_classify::{
    ClassifyOptions, MembershipSet, classify, land_focus_ids, membership_sets, normalize_base,
};
use gef_common::string_column;
use gef_ingest::AncillaryTables;
use gef_model::{GefId, MULTIAGENCY_COLUMN, MULTICOUNTRY_COLUMN};

fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| {
            let values: Vec<Option<String>> =
                values.into_iter().map(|v| v.map(String::from)).collect();
            Column::from(Series::new(name.into(), values))
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

fn empty_ancillary() -> AncillaryTables {
    AncillaryTables {
        cd_projects: test_df(vec![("GEF ID", vec![]), ("Focal", vec![])]),
        mfa_projects: test_df(vec![("GEF ID", vec![]), ("Focal", vec![])]),
        aiddata: test_df(vec![("GEF_ID", vec![]), ("Sub-Foci", vec![])]),
        gef_projects: test_df(vec![
            ("GEF_ID", vec![]),
            ("Country", vec![]),
            ("Secondary agency(ies)", vec![]),
        ]),
    }
}

fn sample_ancillary() -> AncillaryTables {
    AncillaryTables {
        cd_projects: test_df(vec![
            ("GEF ID", vec![Some("10"), Some("11"), Some("12")]),
            ("Focal 1", vec![Some("LD"), Some("BD"), Some("CC")]),
            ("Focal 2", vec![None, Some("LD"), None]),
        ]),
        mfa_projects: test_df(vec![
            ("GEF ID", vec![Some("20"), Some("21")]),
            ("Focal", vec![Some("BD"), Some("IW")]),
        ]),
        aiddata: test_df(vec![
            ("GEF_ID", vec![Some("30.0"), Some("31"), Some("32")]),
            ("Sub-Foci", vec![Some("REDD+ pilots"), None, Some("Biodiversity")]),
        ]),
        gef_projects: test_df(vec![
            ("GEF_ID", vec![Some("10"), Some("20"), Some("30")]),
            ("Country", vec![Some("Global"), Some("Kenya"), Some("Regional")]),
            ("Secondary agency(ies)", vec![Some("UNEP"), None, None]),
        ]),
    }
}

fn sample_base() -> DataFrame {
    test_df(vec![
        (
            "type",
            vec![
                Some("prog"),
                Some("mfa"),
                Some("land"),
                Some("bio"),
                Some("rand"),
                Some("rand"),
                Some("prog"),
            ],
        ),
        (
            "gef_id",
            vec![
                Some("10"),
                Some("20"),
                Some("40.0"),
                Some("50"),
                None,
                Some("77"),
                Some("abc"),
            ],
        ),
    ])
}

fn ids(set: &MembershipSet) -> Vec<String> {
    set.iter().map(|id| id.as_str().to_string()).collect()
}

#[test]
fn scenario_land_record_with_sfm_focus() {
    let base = test_df(vec![("type", vec![Some("land")]), ("gef_id", vec![Some("7")])]);
    let mut ancillary = empty_ancillary();
    ancillary.aiddata = test_df(vec![("GEF_ID", vec![Some("7")]), ("Sub-Foci", vec![Some("SFM")])]);
    let normalized = normalize_base(&base).unwrap();
    let land = land_focus_ids(&normalized.records, &ancillary).unwrap();
    assert_eq!(ids(&land), vec!["7"]);
}

#[test]
fn membership_sets_union_all_sources() {
    let normalized = normalize_base(&sample_base()).unwrap();
    let sets = membership_sets(&normalized.records, &sample_ancillary()).unwrap();
    assert_eq!(ids(&sets.land_focus), vec!["10", "11", "30", "40"]);
    assert_eq!(ids(&sets.bio_focus), vec!["11", "20", "32", "50"]);
    assert_eq!(ids(&sets.multicountry), vec!["10", "30"]);
    assert_eq!(ids(&sets.multiagency), vec!["10"]);
}

#[test]
fn malformed_record_is_absent_everywhere() {
    let normalized = normalize_base(&sample_base()).unwrap();
    assert_eq!(normalized.rejected.len(), 1);
    let table = classify(normalized, &sample_ancillary(), ClassifyOptions { seed: Some(1) }).unwrap();
    assert_eq!(table.rejected, 1);
    assert_eq!(table.len(), 6);
    let column = string_column(&table.data, "gef_id").unwrap();
    assert!(!column.iter().any(|id| id == "abc"));
    assert!(table.records.iter().all(|r| r.gef_id.as_str() != "abc"));
    for set in [
        &table.sets.land_focus,
        &table.sets.bio_focus,
        &table.sets.multicountry,
        &table.sets.multiagency,
        &table.cross_reference.programmatic,
    ] {
        assert!(set.iter().all(|id| id.as_str() != "abc"));
    }
}

#[test]
fn classification_is_idempotent() {
    let ancillary = sample_ancillary();
    let first = classify(normalize_base(&sample_base()).unwrap(), &ancillary, ClassifyOptions::default()).unwrap();
    let second = classify(normalize_base(&sample_base()).unwrap(), &ancillary, ClassifyOptions::default()).unwrap();
    assert_eq!(first.sets, second.sets);
    assert_eq!(first.cross_reference, second.cross_reference);
    let non_control = |table: &gef_classify::ClassifiedTable| {
        table
            .records
            .iter()
            .filter(|r| !r.project_type.is_random_control())
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(non_control(&first), non_control(&second));
}

#[test]
fn seeded_control_flags_are_reproducible() {
    let ancillary = sample_ancillary();
    let options = ClassifyOptions { seed: Some(42) };
    let first = classify(normalize_base(&sample_base()).unwrap(), &ancillary, options).unwrap();
    let second = classify(normalize_base(&sample_base()).unwrap(), &ancillary, options).unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(
        string_column(&first.data, MULTICOUNTRY_COLUMN).unwrap(),
        string_column(&second.data, MULTICOUNTRY_COLUMN).unwrap()
    );
}

#[test]
fn flags_follow_sets_for_real_projects() {
    let table = classify(
        normalize_base(&sample_base()).unwrap(),
        &sample_ancillary(),
        ClassifyOptions { seed: Some(3) },
    )
    .unwrap();
    let prog = &table.records[0];
    assert_eq!(prog.gef_id.as_str(), "10");
    assert!(prog.land_focus && !prog.bio_focus && prog.multicountry && prog.multiagency);

    let controls: Vec<_> = table
        .records
        .iter()
        .filter(|r| r.project_type.is_random_control())
        .collect();
    assert_eq!(controls.len(), 2);
    assert!(controls.iter().all(|r| r.gef_id == GefId::sentinel()));
    assert!(controls.iter().all(|r| !r.land_focus && !r.bio_focus));

    let multicountry = string_column(&table.data, MULTICOUNTRY_COLUMN).unwrap();
    let multiagency = string_column(&table.data, MULTIAGENCY_COLUMN).unwrap();
    for (record, (mc, ma)) in table.records.iter().zip(multicountry.iter().zip(multiagency.iter())) {
        assert_eq!(mc, if record.multicountry { "1" } else { "0" });
        assert_eq!(ma, if record.multiagency { "1" } else { "0" });
    }
}

#[test]
fn empty_sources_classify_without_error() {
    let base = test_df(vec![("type", vec![Some("prog")]), ("gef_id", vec![Some("1")])]);
    let table = classify(normalize_base(&base).unwrap(), &empty_ancillary(), ClassifyOptions::default()).unwrap();
    assert!(table.sets.land_focus.is_empty());
    assert!(!table.records[0].land_focus);
    assert_eq!(ids(&table.cross_reference.programmatic), vec!["1"]);
}

#[test]
fn random_controls_never_share_a_real_project_membership() {
    let base = test_df(vec![
        ("type", vec![Some("prog"), Some("rand")]),
        ("gef_id", vec![Some("-1"), None]),
    ]);
    let mut ancillary = empty_ancillary();
    ancillary.cd_projects = test_df(vec![("GEF ID", vec![Some("-1")]), ("Focal", vec![Some("LD")])]);
    let normalized = normalize_base(&base).unwrap();
    assert_eq!(normalized.rejected.len(), 1);
    let table = classify(normalized, &ancillary, ClassifyOptions { seed: Some(8) }).unwrap();

    assert_eq!(table.len(), 1);
    let control = &table.records[0];
    assert!(control.project_type.is_random_control());
    assert!(!control.land_focus);
    assert!(table.sets.land_focus.is_empty());
    assert!(!table.cross_reference.programmatic.contains(&GefId::sentinel()));
}

fn id_set() -> impl Strategy<Value = MembershipSet> {
    proptest::collection::vec(0u32..50, 0..10)
        .prop_map(|values| values.into_iter().filter_map(|v| GefId::parse(&v.to_string())).collect())
}

proptest! {
    #[test]
    fn union_is_order_independent(a in id_set(), b in id_set(), c in id_set(), d in id_set()) {
        let forward = MembershipSet::union_all(vec![a.clone(), b.clone(), c.clone(), d.clone()]);
        let backward = MembershipSet::union_all(vec![d.clone(), c.clone(), b.clone(), a.clone()]);
        let nested = a.union(c).union(b.union(d));
        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(&forward, &nested);
    }
}
