//! Per-operation descriptors.
//!
//! Every endpoint is the same pipeline with different names: a wire `method`
//! selector, the key its payload sits under in `response`, a request type,
//! and the shape to decode. Each descriptor is a zero-sized type that pins
//! those four things down so `OpenSecretsClient::execute` can run any of them.

use crate::decode::Envelope;
use crate::error::ApiError;
use crate::request::{
    CandidateContributorsRequest, CandidateIndustriesRequest, CandidateIndustryDetailRequest,
    CandidateSummaryRequest, CandidateTopSectorsRequest, CommitteeFundraisingRequest,
    IndependentExpendituresRequest, LegislatorsRequest, MemberProfileRequest,
    OrganizationSearchRequest, OrganizationSummaryRequest, Query,
};
use crate::types::{
    CandidateContributorSummary, CandidateIndustriesSummary, CandidateIndustryDetail,
    CandidateSummary, CandidateTopSectorSummary, CommitteeFundraisingDetail,
    IndependentExpenditure, Legislator, MemberProfile, OrganizationSearchResult,
    OrganizationSummary,
};

/// Describes one API endpoint.
pub trait Operation {
    /// Value of the `method` query parameter.
    const METHOD: &'static str;
    /// Key under `response` holding the payload.
    const RESOURCE: &'static str;

    type Request: Query;
    type Output;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError>;
}

pub struct GetLegislators;

impl Operation for GetLegislators {
    const METHOD: &'static str = "getLegislators";
    const RESOURCE: &'static str = "legislator";
    type Request = LegislatorsRequest;
    type Output = Vec<Legislator>;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.list()
    }
}

/// Personal financial disclosure. The three child lists are each wrapped in
/// a plural key: `assets -> asset -> [...]`.
pub struct GetMemberProfile;

impl Operation for GetMemberProfile {
    const METHOD: &'static str = "memPFDProfile";
    const RESOURCE: &'static str = "member_profile";
    type Request = MemberProfileRequest;
    type Output = MemberProfile;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        let assets = envelope.children(&["assets", "asset"])?;
        let transactions = envelope.children(&["transactions", "transaction"])?;
        let positions = envelope.children(&["positions", "position"])?;
        Ok(MemberProfile {
            assets,
            transactions,
            positions,
            ..envelope.attributes()?
        })
    }
}

pub struct GetCandidateSummary;

impl Operation for GetCandidateSummary {
    const METHOD: &'static str = "candSummary";
    const RESOURCE: &'static str = "summary";
    type Request = CandidateSummaryRequest;
    type Output = CandidateSummary;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.attributes()
    }
}

pub struct GetCandidateContributors;

impl Operation for GetCandidateContributors {
    const METHOD: &'static str = "candContrib";
    const RESOURCE: &'static str = "contributors";
    type Request = CandidateContributorsRequest;
    type Output = CandidateContributorSummary;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        let contributors = envelope.children(&["contributor"])?;
        Ok(CandidateContributorSummary {
            contributors,
            ..envelope.attributes()?
        })
    }
}

pub struct GetCandidateIndustries;

impl Operation for GetCandidateIndustries {
    const METHOD: &'static str = "candIndustry";
    const RESOURCE: &'static str = "industries";
    type Request = CandidateIndustriesRequest;
    type Output = CandidateIndustriesSummary;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        let industries = envelope.children(&["industry"])?;
        Ok(CandidateIndustriesSummary {
            industries,
            ..envelope.attributes()?
        })
    }
}

pub struct GetCandidateIndustryDetail;

impl Operation for GetCandidateIndustryDetail {
    const METHOD: &'static str = "candIndByInd";
    const RESOURCE: &'static str = "candIndus";
    type Request = CandidateIndustryDetailRequest;
    type Output = CandidateIndustryDetail;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.attributes()
    }
}

pub struct GetCandidateTopSectors;

impl Operation for GetCandidateTopSectors {
    const METHOD: &'static str = "candSector";
    const RESOURCE: &'static str = "sectors";
    type Request = CandidateTopSectorsRequest;
    type Output = CandidateTopSectorSummary;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        let sectors = envelope.children(&["sector"])?;
        Ok(CandidateTopSectorSummary {
            sectors,
            ..envelope.attributes()?
        })
    }
}

pub struct GetCommitteeFundraising;

impl Operation for GetCommitteeFundraising {
    const METHOD: &'static str = "congCmteIndus";
    const RESOURCE: &'static str = "committee";
    type Request = CommitteeFundraisingRequest;
    type Output = CommitteeFundraisingDetail;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        let members = envelope.children(&["member"])?;
        Ok(CommitteeFundraisingDetail {
            members,
            ..envelope.attributes()?
        })
    }
}

pub struct SearchOrganizations;

impl Operation for SearchOrganizations {
    const METHOD: &'static str = "getOrgs";
    const RESOURCE: &'static str = "organization";
    type Request = OrganizationSearchRequest;
    type Output = Vec<OrganizationSearchResult>;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.list()
    }
}

pub struct GetOrganizationSummary;

impl Operation for GetOrganizationSummary {
    const METHOD: &'static str = "orgSummary";
    const RESOURCE: &'static str = "organization";
    type Request = OrganizationSummaryRequest;
    type Output = OrganizationSummary;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.attributes()
    }
}

pub struct GetIndependentExpenditures;

impl Operation for GetIndependentExpenditures {
    const METHOD: &'static str = "independentExpend";
    const RESOURCE: &'static str = "indexp";
    type Request = IndependentExpendituresRequest;
    type Output = Vec<IndependentExpenditure>;

    fn decode(envelope: &Envelope) -> Result<Self::Output, ApiError> {
        envelope.list()
    }
}
