//! Typed request parameters, one struct per operation.
//!
//! Required fields are strings validated non-empty before any I/O. Optional
//! numeric selectors (`cycle`, `year`, `congress_number`) are omitted from the
//! query string when `None` or zero.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A required string parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Required<'a> {
    /// Rust field name, reported by validation errors.
    pub field: &'static str,
    /// Query-string key.
    pub param: &'static str,
    pub value: &'a str,
}

/// Maps a request struct onto query-string parameters.
pub trait Query {
    /// Required parameters in wire order.
    fn required(&self) -> Vec<Required<'_>>;

    /// Optional numeric parameters in wire order.
    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        Vec::new()
    }

    /// Reject the request if any required parameter is empty.
    fn validate(&self) -> Result<(), ApiError> {
        match self.required().into_iter().find(|r| r.value.is_empty()) {
            Some(missing) => Err(ApiError::Validation {
                field: missing.field,
            }),
            None => Ok(()),
        }
    }
}

fn required<'a>(field: &'static str, param: &'static str, value: &'a str) -> Required<'a> {
    Required {
        field,
        param,
        value,
    }
}

/// `getLegislators`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislatorsRequest {
    /// Two-letter state code or a CRP ID.
    pub id: String,
}

impl Query for LegislatorsRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("id", "id", &self.id)]
    }
}

/// `memPFDProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfileRequest {
    pub cid: String,
    /// Disclosure year; latest available when unset.
    #[serde(default)]
    pub year: Option<u32>,
}

impl Query for MemberProfileRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("cid", "cid", &self.cid)]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("year", self.year)]
    }
}

/// `candSummary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummaryRequest {
    pub cid: String,
    /// Defaults to the most recent cycle.
    #[serde(default)]
    pub cycle: Option<u32>,
}

impl Query for CandidateSummaryRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("cid", "cid", &self.cid)]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("cycle", self.cycle)]
    }
}

/// `candContrib`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateContributorsRequest {
    pub cid: String,
    #[serde(default)]
    pub cycle: Option<u32>,
}

impl Query for CandidateContributorsRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("cid", "cid", &self.cid)]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("cycle", self.cycle)]
    }
}

/// `candIndustry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIndustriesRequest {
    pub cid: String,
    #[serde(default)]
    pub cycle: Option<u32>,
}

impl Query for CandidateIndustriesRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("cid", "cid", &self.cid)]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("cycle", self.cycle)]
    }
}

/// `candIndByInd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIndustryDetailRequest {
    pub cid: String,
    /// CRP industry code, e.g. `K02`.
    pub industry: String,
    #[serde(default)]
    pub cycle: Option<u32>,
}

impl Query for CandidateIndustryDetailRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![
            required("cid", "cid", &self.cid),
            required("industry", "ind", &self.industry),
        ]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("cycle", self.cycle)]
    }
}

/// `candSector`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTopSectorsRequest {
    pub cid: String,
    #[serde(default)]
    pub cycle: Option<u32>,
}

impl Query for CandidateTopSectorsRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("cid", "cid", &self.cid)]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("cycle", self.cycle)]
    }
}

/// `congCmteIndus`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeFundraisingRequest {
    /// Committee code, e.g. `HARM`.
    pub committee: String,
    /// Industry code, e.g. `F10`.
    pub industry: String,
    /// Defaults to the current Congress.
    #[serde(default)]
    pub congress_number: Option<u32>,
}

impl Query for CommitteeFundraisingRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![
            required("committee", "cmte", &self.committee),
            required("industry", "indus", &self.industry),
        ]
    }

    fn optional(&self) -> Vec<(&'static str, Option<u32>)> {
        vec![("congno", self.congress_number)]
    }
}

/// `getOrgs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSearchRequest {
    /// Full or partial organization name.
    pub name: String,
}

impl Query for OrganizationSearchRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("name", "org", &self.name)]
    }
}

/// `orgSummary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummaryRequest {
    /// CRP organization ID, as returned by an organization search.
    pub id: String,
}

impl Query for OrganizationSummaryRequest {
    fn required(&self) -> Vec<Required<'_>> {
        vec![required("id", "id", &self.id)]
    }
}

/// `independentExpend`. Takes no parameters; returns the latest filings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndependentExpendituresRequest;

impl Query for IndependentExpendituresRequest {
    fn required(&self) -> Vec<Required<'_>> {
        Vec::new()
    }
}
