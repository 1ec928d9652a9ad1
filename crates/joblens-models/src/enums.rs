//! Closed filter enumerations.
//!
//! The remote jobs service accepts a fixed vocabulary of filter identifiers.
//! These enums are the only values the filter state may hold; arbitrary
//! strings never reach the query layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unknown filter identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} id: {value}")]
pub struct FilterIdError {
    pub kind: &'static str,
    pub value: String,
}

impl FilterIdError {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Employment type filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "FULLTIME")]
    FullTime,
    #[serde(rename = "PARTTIME")]
    PartTime,
    #[serde(rename = "FREELANCE")]
    Freelance,
    #[serde(rename = "INTERNSHIP")]
    Internship,
}

impl EmploymentType {
    /// All selectable employment types, in display order.
    pub const ALL: &'static [EmploymentType] = &[
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// Wire identifier sent in the `employment_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = FilterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULLTIME" => Ok(EmploymentType::FullTime),
            "PARTTIME" => Ok(EmploymentType::PartTime),
            "FREELANCE" => Ok(EmploymentType::Freelance),
            "INTERNSHIP" => Ok(EmploymentType::Internship),
            other => Err(FilterIdError::new("employment type", other)),
        }
    }
}

/// Metro-area location filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Location {
    Hyderabad,
    // Spelling matches the service's identifier, not the city name.
    Banglore,
    Chennai,
    Mumbai,
    Delhi,
}

impl Location {
    /// All selectable locations, in display order.
    pub const ALL: &'static [Location] = &[
        Location::Hyderabad,
        Location::Banglore,
        Location::Chennai,
        Location::Mumbai,
        Location::Delhi,
    ];

    /// Wire identifier sent in the `location` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Hyderabad => "HYDERABAD",
            Location::Banglore => "BANGLORE",
            Location::Chennai => "CHENNAI",
            Location::Mumbai => "MUMBAI",
            Location::Delhi => "DELHI",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Hyderabad => "Hyderabad",
            Location::Banglore => "Banglore",
            Location::Chennai => "Chennai",
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Location {
    type Err = FilterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HYDERABAD" => Ok(Location::Hyderabad),
            "BANGLORE" => Ok(Location::Banglore),
            "CHENNAI" => Ok(Location::Chennai),
            "MUMBAI" => Ok(Location::Mumbai),
            "DELHI" => Ok(Location::Delhi),
            other => Err(FilterIdError::new("location", other)),
        }
    }
}

/// Minimum annual package filter, in ascending tiers.
///
/// Single-select: at most one tier is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SalaryFloor {
    #[serde(rename = "1000000")]
    Lpa10,
    #[serde(rename = "2000000")]
    Lpa20,
    #[serde(rename = "3000000")]
    Lpa30,
    #[serde(rename = "4000000")]
    Lpa40,
}

impl SalaryFloor {
    /// All tiers, ascending.
    pub const ALL: &'static [SalaryFloor] = &[
        SalaryFloor::Lpa10,
        SalaryFloor::Lpa20,
        SalaryFloor::Lpa30,
        SalaryFloor::Lpa40,
    ];

    /// Wire identifier sent in the `minimum_package` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryFloor::Lpa10 => "1000000",
            SalaryFloor::Lpa20 => "2000000",
            SalaryFloor::Lpa30 => "3000000",
            SalaryFloor::Lpa40 => "4000000",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryFloor::Lpa10 => "10 LPA and above",
            SalaryFloor::Lpa20 => "20 LPA and above",
            SalaryFloor::Lpa30 => "30 LPA and above",
            SalaryFloor::Lpa40 => "40 LPA and above",
        }
    }
}

impl fmt::Display for SalaryFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SalaryFloor {
    type Err = FilterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1000000" => Ok(SalaryFloor::Lpa10),
            "2000000" => Ok(SalaryFloor::Lpa20),
            "3000000" => Ok(SalaryFloor::Lpa30),
            "4000000" => Ok(SalaryFloor::Lpa40),
            other => Err(FilterIdError::new("salary floor", other)),
        }
    }
}
