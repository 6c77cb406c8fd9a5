//! Typed, synchronous client for the OpenSecrets REST API.
//!
//! # Overview
//! Every operation validates a request struct, builds a query-string URL,
//! performs one GET through a [`Transport`], and decodes the API's
//! `response -> <resource> -> @attributes` envelope into flat records.
//!
//! # Design
//! - `OpenSecretsClient` holds only immutable state and can be shared.
//! - The eleven endpoints are zero-sized [`operation`] descriptors driving a
//!   single generic pipeline (`OpenSecretsClient::execute`).
//! - The network sits behind the [`Transport`] trait; `UreqTransport` is the
//!   default and tests use `http::mock::ScriptedTransport`.
//! - Decoding is all-or-nothing: missing keys become zero values, but any
//!   malformed value fails the whole call with [`ApiError::Decode`].
//!
//! ```no_run
//! use opensecrets_core::{CandidateSummaryRequest, OpenSecretsClient};
//!
//! let client = OpenSecretsClient::new("my-api-key");
//! let summary = client.get_candidate_summary(&CandidateSummaryRequest {
//!     cid: "N00007360".to_string(),
//!     cycle: Some(2022),
//! })?;
//! println!("{} raised {}", summary.candidate_name, summary.total);
//! # Ok::<(), opensecrets_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod operation;
pub mod request;
pub mod transport;
pub mod types;
pub mod url;

pub use client::OpenSecretsClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{Deadline, HttpRequest, HttpResponse, Transport};
pub use request::{
    CandidateContributorsRequest, CandidateIndustriesRequest, CandidateIndustryDetailRequest,
    CandidateSummaryRequest, CandidateTopSectorsRequest, CommitteeFundraisingRequest,
    IndependentExpendituresRequest, LegislatorsRequest, MemberProfileRequest,
    OrganizationSearchRequest, OrganizationSummaryRequest,
};
pub use transport::UreqTransport;
pub use types::{
    Asset, CandidateContributorSummary, CandidateIndustriesSummary, CandidateIndustryDetail,
    CandidateSummary, CandidateTopSectorSummary, CommitteeFundraisingDetail, CommitteeMember,
    Contributor, IndependentExpenditure, Industry, Legislator, MemberProfile,
    OrganizationSearchResult, OrganizationSummary, Position, Sector, Transaction,
};
