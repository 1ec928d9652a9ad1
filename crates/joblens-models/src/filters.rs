//! Filter state for the jobs listing.
//!
//! Mutations happen only through the operations here; the sets are ordered
//! so the query encoding derived from a given state is always identical.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::enums::{EmploymentType, Location, SalaryFloor};

/// Which filter dimensions trigger a fetch as soon as they change.
///
/// The observed contract is asymmetric: set toggles and the salary radio
/// fetch immediately, free-text search waits for an explicit submit. The
/// asymmetry is a UX contract, so it lives in configuration rather than
/// being hard-coded into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPolicy {
    pub employment_types: bool,
    pub locations: bool,
    pub salary_floor: bool,
    pub search_text: bool,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            employment_types: true,
            locations: true,
            salary_floor: true,
            search_text: false,
        }
    }
}

/// Active filters for the jobs listing.
///
/// Membership is what matters for the set-valued dimensions; `BTreeSet`
/// keeps iteration order stable regardless of toggle order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_text: String,
    pub employment_types: BTreeSet<EmploymentType>,
    pub salary_floor: Option<SalaryFloor>,
    pub locations: BTreeSet<Location>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an employment type in or out of the selection.
    /// Returns true if the type is selected after the toggle.
    pub fn toggle_employment_type(&mut self, ty: EmploymentType) -> bool {
        if !self.employment_types.remove(&ty) {
            self.employment_types.insert(ty);
            true
        } else {
            false
        }
    }

    /// Toggle a location in or out of the selection.
    /// Returns true if the location is selected after the toggle.
    pub fn toggle_location(&mut self, loc: Location) -> bool {
        if !self.locations.remove(&loc) {
            self.locations.insert(loc);
            true
        } else {
            false
        }
    }

    /// Select a salary floor, or clear it with `None`.
    pub fn set_salary_floor(&mut self, floor: Option<SalaryFloor>) {
        self.salary_floor = floor;
    }

    /// Replace the buffered search text. Does not imply a fetch.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// True when no dimension is filtering anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.employment_types.is_empty()
            && self.salary_floor.is_none()
            && self.locations.is_empty()
    }
}
