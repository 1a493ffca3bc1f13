//! Deduplicated identifier sets produced by classification.

use std::collections::BTreeSet;

use gef_model::GefId;

/// A set of normalized identifiers satisfying one classification rule.
///
/// Ordered so that iteration, logging and reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSet(BTreeSet<GefId>);

impl MembershipSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: GefId) -> bool {
        self.0.insert(id)
    }

    pub fn contains(&self, id: &GefId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GefId> {
        self.0.iter()
    }

    /// Union of `self` and `other`, consuming both.
    #[must_use]
    pub fn union(mut self, other: MembershipSet) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Union of any number of sets; order does not matter.
    pub fn union_all(sets: impl IntoIterator<Item = MembershipSet>) -> Self {
        sets.into_iter().fold(Self::new(), Self::union)
    }
}

impl FromIterator<GefId> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = GefId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<GefId> for MembershipSet {
    fn extend<I: IntoIterator<Item = GefId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// The four classification sets computed for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipSets {
    pub land_focus: MembershipSet,
    pub bio_focus: MembershipSet,
    pub multicountry: MembershipSet,
    pub multiagency: MembershipSet,
}

impl MembershipSets {
    pub fn counts(&self) -> gef_model::MembershipCounts {
        gef_model::MembershipCounts {
            land_focus: self.land_focus.len(),
            bio_focus: self.bio_focus.len(),
            multicountry: self.multicountry.len(),
            multiagency: self.multiagency.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> MembershipSet {
        ids.iter().filter_map(|id| GefId::parse(id)).collect()
    }

    #[test]
    fn union_deduplicates() {
        let merged = set(&["1", "2"]).union(set(&["2", "3"]));
        assert_eq!(merged, set(&["1", "2", "3"]));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn union_all_of_nothing_is_empty() {
        assert!(MembershipSet::union_all(Vec::new()).is_empty());
    }
}
