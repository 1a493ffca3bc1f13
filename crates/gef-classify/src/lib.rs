//! Identifier normalization and project classification.
//!
//! The pipeline is `normalize_base` followed by `classify`; the resulting
//! [`ClassifiedTable`] is read-only input for case construction.

pub mod engine;
pub mod error;
pub mod membership;
pub mod normalize;
pub mod rules;

pub use engine::{
    BIO_KEYWORDS, BIO_TOKEN, ClassifiedRecord, ClassifiedTable, ClassifyOptions, CrossReference,
    LAND_KEYWORDS, LAND_TOKEN, MULTICOUNTRY_VALUES, bio_focus_ids, classify, land_focus_ids,
    membership_sets, multiagency_ids, multicountry_ids,
};
pub use error::{ClassifyError, Result};
pub use membership::{MembershipSet, MembershipSets};
pub use normalize::{NormalizedBase, ProjectRecord, RejectedRecord, normalize_base};
pub use rules::{contains_any, ids_with_type, keyword_match, non_missing, token_scan, value_in};
