//! Domain records returned by the OpenSecrets API.
//!
//! # Design
//! Each record is the flat contents of one `@attributes` object. Field names
//! are descriptive and mapped to the terse wire keys with `rename`. Every
//! struct carries `#[serde(default)]` so a missing key yields the zero value,
//! while numeric fields go through [`wire_number`] and reject anything that
//! is not a parsable numeric string.
//!
//! Child collections (`assets`, `contributors`, ...) live in a separate JSON
//! branch from the parent's attributes. They are skipped during
//! deserialization and attached by the decoder afterwards.
//!
//! See the OpenData user's guide for the meaning of CRP-specific fields:
//! <https://www.opensecrets.org/resources/datadictionary/UserGuide.pdf>

use serde::{Deserialize, Serialize};

use crate::decode::wire_number;

/// A current member of Congress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legislator {
    /// CRP ID.
    pub cid: String,
    #[serde(rename = "firstlast")]
    pub first_last: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub party: String,
    pub office: String,
    /// `M` or `F`.
    pub gender: String,
    #[serde(deserialize_with = "wire_number")]
    pub first_elected: i64,
    /// Assigned by CRP; see the user's guide.
    #[serde(deserialize_with = "wire_number")]
    pub exit_code: i64,
    /// Usually expands on `exit_code`.
    pub comments: String,
    pub phone: String,
    pub fax: String,
    pub website: String,
    pub webform: String,
    pub congress_office: String,
    pub bioguide_id: String,
    pub votesmart_id: String,
    #[serde(rename = "feccandid")]
    pub fec_candidate_id: String,
    pub twitter_id: String,
    pub youtube_url: String,
    pub facebook_id: String,
    /// `YYYY-MM-DD`.
    pub birthdate: String,
}

/// Personal financial disclosure summary for a member of Congress or an
/// executive/judicial official.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberProfile {
    pub name: String,
    #[serde(deserialize_with = "wire_number")]
    pub data_year: i64,
    /// CRP ID.
    pub member_id: String,
    /// Low end of the calculated net worth range.
    #[serde(deserialize_with = "wire_number")]
    pub net_low: i64,
    #[serde(deserialize_with = "wire_number")]
    pub net_high: i64,
    #[serde(deserialize_with = "wire_number")]
    pub position_held_count: i64,
    #[serde(deserialize_with = "wire_number")]
    pub asset_count: i64,
    #[serde(deserialize_with = "wire_number")]
    pub asset_low: i64,
    #[serde(deserialize_with = "wire_number")]
    pub asset_high: i64,
    #[serde(deserialize_with = "wire_number")]
    pub transaction_count: i64,
    #[serde(rename = "tx_low", deserialize_with = "wire_number")]
    pub transaction_low: i64,
    #[serde(rename = "tx_high", deserialize_with = "wire_number")]
    pub transaction_high: i64,
    pub source: String,
    pub origin: String,
    /// `M/DD/YY`.
    pub update_timestamp: String,
    #[serde(skip_deserializing)]
    pub assets: Vec<Asset>,
    #[serde(skip_deserializing)]
    pub transactions: Vec<Transaction>,
    #[serde(skip_deserializing)]
    pub positions: Vec<Position>,
}

/// An asset reported on a disclosure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub name: String,
    #[serde(deserialize_with = "wire_number")]
    pub holdings_low: i64,
    #[serde(deserialize_with = "wire_number")]
    pub holdings_high: i64,
    pub industry: String,
    /// Sector ID.
    pub sector: String,
    pub subsidiary_of: String,
}

/// A transaction made during the reporting period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub asset_name: String,
    /// `Mon DD YYYY`.
    #[serde(rename = "tx_date")]
    pub date: String,
    /// Purchased, Sold, Exchanged.
    #[serde(rename = "tx_action")]
    pub action: String,
    #[serde(deserialize_with = "wire_number")]
    pub value_low: i64,
    #[serde(deserialize_with = "wire_number")]
    pub value_high: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub title: String,
    pub organization: String,
}

/// Fundraising snapshot for a candidate in one cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateSummary {
    #[serde(rename = "cand_name")]
    pub candidate_name: String,
    pub cid: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    /// Two-letter abbreviation.
    pub state: String,
    /// D, R, 3, L or U.
    pub party: String,
    /// S, H, D or blank.
    pub chamber: String,
    /// Members only.
    #[serde(deserialize_with = "wire_number")]
    pub first_elected: i64,
    /// Members only.
    #[serde(deserialize_with = "wire_number")]
    pub next_election: i64,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub spent: f64,
    #[serde(deserialize_with = "wire_number")]
    pub cash_on_hand: f64,
    #[serde(deserialize_with = "wire_number")]
    pub debt: f64,
    pub origin: String,
    pub source: String,
    /// Date of the candidate's last filed report (`MM/DD/YYYY`).
    pub last_updated: String,
}

/// Top contributors to a candidate. Six-year numbers for senators, two-year
/// numbers for representatives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateContributorSummary {
    #[serde(rename = "cand_name")]
    pub candidate_name: String,
    pub cid: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    pub origin: String,
    pub source: String,
    /// Explanatory text that must accompany published figures.
    pub notice: String,
    #[serde(skip_deserializing)]
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    #[serde(rename = "org_name")]
    pub organization_name: String,
    /// Total from all itemized sources.
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
}

/// Top industries contributing to a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateIndustriesSummary {
    #[serde(rename = "cand_name")]
    pub candidate_name: String,
    pub cid: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    pub origin: String,
    pub source: String,
    pub last_updated: String,
    #[serde(skip_deserializing)]
    pub industries: Vec<Industry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Industry {
    /// CRP industry code, e.g. `K02`.
    #[serde(rename = "industry_code")]
    pub code: String,
    #[serde(rename = "industry_name")]
    pub name: String,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
}

/// What a single industry gave to a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateIndustryDetail {
    #[serde(rename = "cand_name")]
    pub candidate_name: String,
    pub cid: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    pub industry: String,
    pub chamber: String,
    pub party: String,
    /// Full state name.
    pub state: String,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
    /// Rank within the chamber for this industry.
    #[serde(deserialize_with = "wire_number")]
    pub rank: i64,
    pub origin: String,
    pub source: String,
    pub last_updated: String,
}

/// Sector totals for a candidate's receipts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateTopSectorSummary {
    #[serde(rename = "cand_name")]
    pub candidate_name: String,
    pub cid: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    pub origin: String,
    pub source: String,
    pub notice: String,
    pub last_updated: String,
    #[serde(skip_deserializing)]
    pub sectors: Vec<Sector>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sector {
    #[serde(rename = "sector_name")]
    pub name: String,
    /// One-letter CRP sector ID.
    #[serde(rename = "sectorid")]
    pub id: String,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
}

/// Fundraising by one industry across the members of a congressional
/// committee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitteeFundraisingDetail {
    pub committee_name: String,
    pub industry: String,
    #[serde(rename = "congno", deserialize_with = "wire_number")]
    pub congress_number: i64,
    pub origin: String,
    pub source: String,
    pub last_updated: String,
    #[serde(skip_deserializing)]
    pub members: Vec<CommitteeMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitteeMember {
    #[serde(rename = "member_name")]
    pub name: String,
    pub cid: String,
    pub party: String,
    pub state: String,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
}

/// One hit from an organization name search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSearchResult {
    #[serde(rename = "orgid")]
    pub id: String,
    #[serde(rename = "orgname")]
    pub name: String,
}

/// Fundraising and lobbying totals for an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationSummary {
    #[serde(rename = "orgid")]
    pub id: String,
    #[serde(rename = "orgname")]
    pub name: String,
    #[serde(deserialize_with = "wire_number")]
    pub cycle: i64,
    #[serde(deserialize_with = "wire_number")]
    pub total: f64,
    #[serde(rename = "indivs", deserialize_with = "wire_number")]
    pub individuals: f64,
    #[serde(deserialize_with = "wire_number")]
    pub pacs: f64,
    #[serde(rename = "soft", deserialize_with = "wire_number")]
    pub soft_money: f64,
    #[serde(rename = "tot527", deserialize_with = "wire_number")]
    pub total_527: f64,
    #[serde(rename = "dems", deserialize_with = "wire_number")]
    pub democrats: f64,
    #[serde(rename = "repubs", deserialize_with = "wire_number")]
    pub republicans: f64,
    #[serde(deserialize_with = "wire_number")]
    pub lobbying: f64,
    #[serde(deserialize_with = "wire_number")]
    pub outside: f64,
    /// Members of Congress invested in the organization.
    #[serde(deserialize_with = "wire_number")]
    pub mems_invested: i64,
    #[serde(deserialize_with = "wire_number")]
    pub gave_to_pac: f64,
    #[serde(deserialize_with = "wire_number")]
    pub gave_to_party: f64,
    #[serde(deserialize_with = "wire_number")]
    pub gave_to_527: f64,
    #[serde(rename = "gave_to_cand", deserialize_with = "wire_number")]
    pub gave_to_candidate: f64,
    pub source: String,
    pub origin: String,
}

/// An independent expenditure for or against a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndependentExpenditure {
    #[serde(rename = "cmteid")]
    pub committee_id: String,
    #[serde(rename = "pacshort")]
    pub committee_name: String,
    /// `FOR:` or `AGAINST:`.
    #[serde(rename = "suppopp")]
    pub support_or_oppose: String,
    #[serde(rename = "candname")]
    pub candidate_name: String,
    /// Four-character district code, e.g. `NYS1`.
    pub district: String,
    #[serde(deserialize_with = "wire_number")]
    pub amount: f64,
    pub note: String,
    pub party: String,
    pub payee: String,
    /// `YYYY-MM-DD HH:mm:ss.ff`.
    pub date: String,
    pub origin: String,
    pub source: String,
}
