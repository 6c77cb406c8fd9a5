//! Client facade for the OpenSecrets API.
//!
//! # Design
//! `OpenSecretsClient` holds only immutable state: the API key, base URL,
//! user agent and a shared [`Transport`]. Each operation runs the same
//! pipeline, driven by an [`Operation`] descriptor:
//!
//! validate -> build URL -> send -> check status -> decode
//!
//! The pipeline is also exposed in halves (`build_request` / `parse_response`)
//! for callers that want to perform the HTTP round-trip themselves.

use std::sync::Arc;

use tracing::debug;

use crate::config::{ClientConfig, DEFAULT_USER_AGENT};
use crate::decode::Envelope;
use crate::error::ApiError;
use crate::http::{Deadline, HttpRequest, HttpResponse, Transport};
use crate::operation::{
    GetCandidateContributors, GetCandidateIndustries, GetCandidateIndustryDetail,
    GetCandidateSummary, GetCandidateTopSectors, GetCommitteeFundraising,
    GetIndependentExpenditures, GetLegislators, GetMemberProfile, GetOrganizationSummary,
    Operation, SearchOrganizations,
};
use crate::request::{
    CandidateContributorsRequest, CandidateIndustriesRequest, CandidateIndustryDetailRequest,
    CandidateSummaryRequest, CandidateTopSectorsRequest, CommitteeFundraisingRequest,
    IndependentExpendituresRequest, LegislatorsRequest, MemberProfileRequest,
    OrganizationSearchRequest, OrganizationSummaryRequest, Query,
};
use crate::transport::UreqTransport;
use crate::types::{
    CandidateContributorSummary, CandidateIndustriesSummary, CandidateIndustryDetail,
    CandidateSummary, CandidateTopSectorSummary, CommitteeFundraisingDetail,
    IndependentExpenditure, Legislator, MemberProfile, OrganizationSearchResult,
    OrganizationSummary,
};
use crate::url::build_url;

/// Synchronous client for the OpenSecrets API.
///
/// Cheap to clone and safe to share between threads; calls are independent.
#[derive(Clone)]
pub struct OpenSecretsClient {
    api_key: String,
    base_url: String,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for OpenSecretsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSecretsClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl OpenSecretsClient {
    /// Client for the production API with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(api_key))
    }

    /// Client using a [`UreqTransport`] with the configured timeout.
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = Arc::new(UreqTransport::new(config.timeout()));
        Self::with_transport(config, transport)
    }

    /// Client using a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let user_agent = if config.user_agent.is_empty() {
            DEFAULT_USER_AGENT.to_string()
        } else {
            config.user_agent
        };
        Self {
            api_key: config.api_key,
            base_url: config.base_url,
            user_agent,
            transport,
        }
    }

    /// Validate `request` and describe the GET that would fetch it.
    pub fn build_request<O: Operation>(&self, request: &O::Request) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        Ok(HttpRequest {
            url: build_url(&self.base_url, &self.api_key, O::METHOD, request),
            headers: vec![("User-Agent".to_string(), self.user_agent.clone())],
        })
    }

    /// Map a raw response onto the operation's output.
    pub fn parse_response<O: Operation>(&self, response: &HttpResponse) -> Result<O::Output, ApiError> {
        check_status(response)?;
        let envelope = Envelope::parse(&response.body, O::RESOURCE)?;
        O::decode(&envelope)
    }

    /// Run the whole pipeline for one operation.
    ///
    /// `deadline`, when set, bounds the network call; an expired deadline
    /// surfaces as [`TransportError::DeadlineExceeded`](crate::error::TransportError::DeadlineExceeded).
    #[tracing::instrument(level = "debug", skip_all, fields(method = O::METHOD))]
    pub fn execute<O: Operation>(
        &self,
        request: &O::Request,
        deadline: Option<Deadline>,
    ) -> Result<O::Output, ApiError> {
        let http_request = self.build_request::<O>(request)?;
        debug!("sending request");
        let response = self.transport.send(&http_request, deadline)?;
        debug!(status = response.status, bytes = response.body.len(), "received response");
        self.parse_response::<O>(&response)
    }

    /// `getLegislators`: current members for a state or a single CRP ID.
    pub fn get_legislators(&self, request: &LegislatorsRequest) -> Result<Vec<Legislator>, ApiError> {
        self.execute::<GetLegislators>(request, None)
    }

    /// `memPFDProfile`: personal financial disclosure summary.
    pub fn get_member_profile(&self, request: &MemberProfileRequest) -> Result<MemberProfile, ApiError> {
        self.execute::<GetMemberProfile>(request, None)
    }

    /// `candSummary`.
    pub fn get_candidate_summary(
        &self,
        request: &CandidateSummaryRequest,
    ) -> Result<CandidateSummary, ApiError> {
        self.execute::<GetCandidateSummary>(request, None)
    }

    /// `candContrib`.
    pub fn get_candidate_contributors(
        &self,
        request: &CandidateContributorsRequest,
    ) -> Result<CandidateContributorSummary, ApiError> {
        self.execute::<GetCandidateContributors>(request, None)
    }

    /// `candIndustry`.
    pub fn get_candidate_industries(
        &self,
        request: &CandidateIndustriesRequest,
    ) -> Result<CandidateIndustriesSummary, ApiError> {
        self.execute::<GetCandidateIndustries>(request, None)
    }

    /// `candIndByInd`.
    pub fn get_candidate_industry_detail(
        &self,
        request: &CandidateIndustryDetailRequest,
    ) -> Result<CandidateIndustryDetail, ApiError> {
        self.execute::<GetCandidateIndustryDetail>(request, None)
    }

    /// `candSector`.
    pub fn get_candidate_top_sectors(
        &self,
        request: &CandidateTopSectorsRequest,
    ) -> Result<CandidateTopSectorSummary, ApiError> {
        self.execute::<GetCandidateTopSectors>(request, None)
    }

    /// `congCmteIndus`.
    pub fn get_committee_fundraising(
        &self,
        request: &CommitteeFundraisingRequest,
    ) -> Result<CommitteeFundraisingDetail, ApiError> {
        self.execute::<GetCommitteeFundraising>(request, None)
    }

    /// `getOrgs`.
    pub fn search_organizations(
        &self,
        request: &OrganizationSearchRequest,
    ) -> Result<Vec<OrganizationSearchResult>, ApiError> {
        self.execute::<SearchOrganizations>(request, None)
    }

    /// `orgSummary`.
    pub fn get_organization_summary(
        &self,
        request: &OrganizationSummaryRequest,
    ) -> Result<OrganizationSummary, ApiError> {
        self.execute::<GetOrganizationSummary>(request, None)
    }

    /// `independentExpend`: the latest independent expenditure filings.
    pub fn get_independent_expenditures(&self) -> Result<Vec<IndependentExpenditure>, ApiError> {
        self.execute::<GetIndependentExpenditures>(&IndependentExpendituresRequest, None)
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status >= 400 {
        return Err(ApiError::Status {
            status: response.status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::TransportError;
    use crate::http::mock::ScriptedTransport;

    const BASE_URL: &str = "http://localhost:3000/api/";

    fn client(transport: Arc<ScriptedTransport>) -> OpenSecretsClient {
        let config = ClientConfig {
            api_key: "test-key".to_string(),
            base_url: BASE_URL.to_string(),
            ..ClientConfig::default()
        };
        OpenSecretsClient::with_transport(config, transport)
    }

    #[test]
    fn build_request_sets_url_and_user_agent() {
        let c = client(Arc::new(ScriptedTransport::new()));
        let req = c
            .build_request::<GetCandidateSummary>(&CandidateSummaryRequest {
                cid: "N00007360".to_string(),
                cycle: Some(2022),
            })
            .unwrap();
        assert_eq!(
            req.url,
            "http://localhost:3000/api/?method=candSummary&output=json&apikey=test-key&cid=N00007360&cycle=2022"
        );
        assert_eq!(req.header("user-agent"), Some(DEFAULT_USER_AGENT));
    }

    #[test]
    fn empty_user_agent_falls_back_to_default() {
        let config = ClientConfig {
            user_agent: String::new(),
            ..ClientConfig::new("k")
        };
        let c = OpenSecretsClient::with_transport(config, Arc::new(ScriptedTransport::new()));
        let req = c.build_request::<GetIndependentExpenditures>(&IndependentExpendituresRequest).unwrap();
        assert_eq!(req.header("User-Agent"), Some(DEFAULT_USER_AGENT));
    }

    #[test]
    fn invalid_request_never_reaches_transport() {
        let transport = Arc::new(ScriptedTransport::new());
        let c = client(transport.clone());

        let err = c
            .get_candidate_summary(&CandidateSummaryRequest {
                cid: String::new(),
                cycle: Some(2022),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "cid" }));

        let err = c
            .get_committee_fundraising(&CommitteeFundraisingRequest {
                committee: "HARM".to_string(),
                industry: String::new(),
                congress_number: None,
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "industry" }));

        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn status_400_is_a_status_error() {
        let transport = Arc::new(ScriptedTransport::new().respond(400, ""));
        let err = client(transport)
            .get_legislators(&LegislatorsRequest { id: "TX".to_string() })
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 400 }));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn status_below_400_is_decoded() {
        let body = r#"{"response":{"legislator":[{"@attributes":{"cid":"N1"}}]}}"#;
        let transport = Arc::new(ScriptedTransport::new().respond(304, body));
        let legislators = client(transport)
            .get_legislators(&LegislatorsRequest { id: "TX".to_string() })
            .unwrap();
        assert_eq!(legislators[0].cid, "N1");
    }

    #[test]
    fn unparsable_body_is_a_decode_error() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "BAD JSON WEEEE"));
        let err = client(transport)
            .get_legislators(&LegislatorsRequest { id: "TX".to_string() })
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode));
        assert_eq!(err.to_string(), "unable to parse OpenSecrets response body");
    }

    #[test]
    fn transport_failure_propagates_unchanged() {
        let transport =
            Arc::new(ScriptedTransport::new().fail(TransportError::Timeout("upstream stalled".into())));
        let err = client(transport)
            .get_organization_summary(&OrganizationSummaryRequest {
                id: "D000000125".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(TransportError::Timeout(_))));
        assert_eq!(err.to_string(), "request timed out");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "upstream stalled");
    }

    #[test]
    fn deadline_is_handed_to_transport() {
        let transport = Arc::new(ScriptedTransport::new());
        let deadline = Deadline::after(Duration::from_secs(30));
        client(transport.clone())
            .execute::<GetIndependentExpenditures>(&IndependentExpendituresRequest, Some(deadline))
            .unwrap();
        assert_eq!(transport.deadlines(), vec![Some(deadline)]);
    }

    #[test]
    fn each_operation_hits_its_method() {
        let transport = Arc::new(ScriptedTransport::new());
        let c = client(transport.clone());
        let cid = "N00007360".to_string();

        c.get_legislators(&LegislatorsRequest { id: "TX".to_string() }).unwrap();
        c.get_member_profile(&MemberProfileRequest { cid: cid.clone(), year: None }).unwrap();
        c.get_candidate_summary(&CandidateSummaryRequest { cid: cid.clone(), cycle: None }).unwrap();
        c.get_candidate_contributors(&CandidateContributorsRequest { cid: cid.clone(), cycle: None })
            .unwrap();
        c.get_candidate_industries(&CandidateIndustriesRequest { cid: cid.clone(), cycle: None })
            .unwrap();
        c.get_candidate_industry_detail(&CandidateIndustryDetailRequest {
            cid: cid.clone(),
            industry: "K02".to_string(),
            cycle: None,
        })
        .unwrap();
        c.get_candidate_top_sectors(&CandidateTopSectorsRequest { cid, cycle: None }).unwrap();
        c.get_committee_fundraising(&CommitteeFundraisingRequest {
            committee: "HARM".to_string(),
            industry: "F10".to_string(),
            congress_number: None,
        })
        .unwrap();
        c.search_organizations(&OrganizationSearchRequest { name: "Goldman".to_string() }).unwrap();
        c.get_organization_summary(&OrganizationSummaryRequest { id: "D000000125".to_string() })
            .unwrap();
        c.get_independent_expenditures().unwrap();

        let methods: Vec<String> = transport
            .requests()
            .iter()
            .map(|r| {
                let query = r.url.split_once('?').unwrap().1;
                query.split('&').next().unwrap().trim_start_matches("method=").to_string()
            })
            .collect();
        assert_eq!(
            methods,
            [
                "getLegislators",
                "memPFDProfile",
                "candSummary",
                "candContrib",
                "candIndustry",
                "candIndByInd",
                "candSector",
                "congCmteIndus",
                "getOrgs",
                "orgSummary",
                "independentExpend",
            ]
        );
    }

    #[test]
    fn empty_envelope_yields_empty_children() {
        let transport = Arc::new(ScriptedTransport::new().respond(200, "{}"));
        let summary = client(transport)
            .get_candidate_contributors(&CandidateContributorsRequest {
                cid: "N00007360".to_string(),
                cycle: None,
            })
            .unwrap();
        assert!(summary.contributors.is_empty());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", client(Arc::new(ScriptedTransport::new())));
        assert!(!rendered.contains("test-key"));
    }
}
