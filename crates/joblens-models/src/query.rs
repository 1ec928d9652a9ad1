//! Canonical query encoding of a [`FilterState`].
//!
//! The listing endpoint takes four parameters that are always present:
//! `employment_type`, `location`, `minimum_package` and `search`. An empty
//! value means "this dimension does not filter", never "match nothing".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{EmploymentType, FilterIdError, Location};
use crate::filters::FilterState;

/// Canonical, order-stable encoding of a filter state.
///
/// Building a `QuerySpec` is pure: the same `FilterState` value always
/// produces a byte-identical spec, because the underlying sets iterate in a
/// fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Comma-joined employment type ids, empty when unfiltered.
    pub employment_type: String,
    /// Comma-joined location ids, empty when unfiltered.
    pub location: String,
    /// Selected salary floor id, empty when unfiltered.
    pub minimum_package: String,
    /// Free-text search, empty when unfiltered.
    pub search: String,
}

impl QuerySpec {
    /// Encode a filter state.
    pub fn from_filters(filters: &FilterState) -> Self {
        Self {
            employment_type: join_ids(filters.employment_types.iter().map(|t| t.as_str())),
            location: join_ids(filters.locations.iter().map(|l| l.as_str())),
            minimum_package: filters
                .salary_floor
                .map(|f| f.as_str().to_string())
                .unwrap_or_default(),
            search: filters.search_text.clone(),
        }
    }

    /// The four query pairs, always present, in a fixed order.
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("employment_type", self.employment_type.as_str()),
            ("location", self.location.as_str()),
            ("minimum_package", self.minimum_package.as_str()),
            ("search", self.search.as_str()),
        ]
    }

    /// Decode the comma-joined employment type field back into a set.
    pub fn decode_employment_types(&self) -> Result<BTreeSet<EmploymentType>, FilterIdError> {
        split_ids(&self.employment_type)
    }

    /// Decode the comma-joined location field back into a set.
    pub fn decode_locations(&self) -> Result<BTreeSet<Location>, FilterIdError> {
        split_ids(&self.location)
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(",")
}

fn split_ids<T>(joined: &str) -> Result<BTreeSet<T>, T::Err>
where
    T: std::str::FromStr + Ord,
{
    if joined.is_empty() {
        return Ok(BTreeSet::new());
    }
    joined.split(',').map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::SalaryFloor;

    fn sample_filters() -> FilterState {
        let mut filters = FilterState::new();
        filters.toggle_employment_type(EmploymentType::Internship);
        filters.toggle_employment_type(EmploymentType::FullTime);
        filters.toggle_location(Location::Mumbai);
        filters.toggle_location(Location::Hyderabad);
        filters.set_salary_floor(Some(SalaryFloor::Lpa20));
        filters.set_search_text("engineer");
        filters
    }

    #[test]
    fn test_build_is_deterministic() {
        let filters = sample_filters();
        let first = QuerySpec::from_filters(&filters);
        let second = QuerySpec::from_filters(&filters);
        assert_eq!(first, second);
        assert_eq!(first.query_pairs(), second.query_pairs());
    }

    #[test]
    fn test_build_ignores_toggle_order() {
        let mut a = FilterState::new();
        a.toggle_employment_type(EmploymentType::PartTime);
        a.toggle_employment_type(EmploymentType::Freelance);

        let mut b = FilterState::new();
        b.toggle_employment_type(EmploymentType::Freelance);
        b.toggle_employment_type(EmploymentType::PartTime);

        assert_eq!(QuerySpec::from_filters(&a), QuerySpec::from_filters(&b));
    }

    #[test]
    fn test_empty_dimensions_encode_as_empty_strings() {
        let spec = QuerySpec::from_filters(&FilterState::new());
        assert_eq!(
            spec.query_pairs(),
            [
                ("employment_type", ""),
                ("location", ""),
                ("minimum_package", ""),
                ("search", ""),
            ]
        );
    }

    #[test]
    fn test_comma_join_round_trips_sets() {
        let filters = sample_filters();
        let spec = QuerySpec::from_filters(&filters);

        assert_eq!(
            spec.decode_employment_types().unwrap(),
            filters.employment_types
        );
        assert_eq!(spec.decode_locations().unwrap(), filters.locations);
    }

    #[test]
    fn test_empty_decodes_to_empty_set() {
        let spec = QuerySpec::default();
        assert!(spec.decode_employment_types().unwrap().is_empty());
        assert!(spec.decode_locations().unwrap().is_empty());
    }

    #[test]
    fn test_all_pairs_present_with_salary_only() {
        let mut filters = FilterState::new();
        filters.set_salary_floor(Some(SalaryFloor::Lpa40));
        let spec = QuerySpec::from_filters(&filters);
        assert_eq!(spec.minimum_package, "4000000");
        assert_eq!(spec.employment_type, "");
        assert_eq!(spec.search, "");
    }
}
