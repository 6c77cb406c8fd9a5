//! Stand-in for the OpenSecrets API, serving canned fixtures.
//!
//! Mirrors the upstream checks a client has to get right: a non-empty
//! `User-Agent`, a matching `apikey`, `output=json`, a known `method`, and
//! that method's required parameters.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tracing::debug;

/// One upstream method and the body it answers with.
pub struct Endpoint {
    pub method: &'static str,
    pub required: &'static [&'static str],
    pub fixture: &'static str,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "getLegislators",
        required: &["id"],
        fixture: include_str!("../../fixtures/legislators.json"),
    },
    Endpoint {
        method: "memPFDProfile",
        required: &["cid"],
        fixture: include_str!("../../fixtures/member_profile.json"),
    },
    Endpoint {
        method: "candSummary",
        required: &["cid"],
        fixture: include_str!("../../fixtures/candidate_summary.json"),
    },
    Endpoint {
        method: "candContrib",
        required: &["cid"],
        fixture: include_str!("../../fixtures/candidate_contributors.json"),
    },
    Endpoint {
        method: "candIndustry",
        required: &["cid"],
        fixture: include_str!("../../fixtures/candidate_industries.json"),
    },
    Endpoint {
        method: "candIndByInd",
        required: &["cid", "ind"],
        fixture: include_str!("../../fixtures/candidate_industry_detail.json"),
    },
    Endpoint {
        method: "candSector",
        required: &["cid"],
        fixture: include_str!("../../fixtures/candidate_top_sectors.json"),
    },
    Endpoint {
        method: "congCmteIndus",
        required: &["cmte", "indus"],
        fixture: include_str!("../../fixtures/committee_fundraising.json"),
    },
    Endpoint {
        method: "getOrgs",
        required: &["org"],
        fixture: include_str!("../../fixtures/organization_search.json"),
    },
    Endpoint {
        method: "orgSummary",
        required: &["id"],
        fixture: include_str!("../../fixtures/organization_summary.json"),
    },
    Endpoint {
        method: "independentExpend",
        required: &[],
        fixture: include_str!("../../fixtures/independent_expenditures.json"),
    },
];

#[derive(Clone, Debug)]
pub struct MockConfig {
    /// Key every request must carry.
    pub api_key: String,
    /// Delay before each response is produced.
    pub latency: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            api_key: "test-key".to_string(),
            latency: Duration::ZERO,
        }
    }
}

pub fn app(config: MockConfig) -> Router {
    Router::new()
        .route("/api/", get(handle))
        .with_state(Arc::new(config))
}

pub async fn run(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn handle(
    State(config): State<Arc<MockConfig>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !config.latency.is_zero() {
        tokio::time::sleep(config.latency).await;
    }

    let method = params.get("method").map(String::as_str).unwrap_or_default();
    debug!(method, "mock request");

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if user_agent.trim().is_empty() {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    if params.get("apikey") != Some(&config.api_key) {
        return (StatusCode::UNAUTHORIZED, "Invalid API key").into_response();
    }
    if params.get("output").map(String::as_str) != Some("json") {
        return (StatusCode::BAD_REQUEST, "Unsupported output format").into_response();
    }

    let Some(endpoint) = ENDPOINTS.iter().find(|e| e.method == method) else {
        return (StatusCode::BAD_REQUEST, "Unknown method").into_response();
    };
    if let Some(missing) = endpoint
        .required
        .iter()
        .find(|p| params.get(**p).map_or(true, |v| v.is_empty()))
    {
        return (StatusCode::BAD_REQUEST, format!("Missing parameter: {missing}")).into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        endpoint.fixture,
    )
        .into_response()
}
