//! Smoke tests against the production API.
//!
//! Ignored by default; they need network access and a real key:
//!
//! ```sh
//! OPENSECRETS_API_KEY=... cargo test -p opensecrets-core --test live -- --ignored
//! ```

use opensecrets_core::{
    CandidateSummaryRequest, ClientConfig, LegislatorsRequest, OpenSecretsClient,
    OrganizationSearchRequest,
};

fn live_client() -> OpenSecretsClient {
    let config = ClientConfig::load().expect("set OPENSECRETS_API_KEY to run live tests");
    OpenSecretsClient::from_config(config)
}

#[test]
#[ignore = "hits the real OpenSecrets API"]
fn legislators_for_a_state() {
    let legislators = live_client()
        .get_legislators(&LegislatorsRequest { id: "NJ".to_string() })
        .unwrap();
    assert!(!legislators.is_empty());
    assert!(legislators.iter().all(|l| l.cid.starts_with('N')));
}

#[test]
#[ignore = "hits the real OpenSecrets API"]
fn candidate_summary_by_cid() {
    let summary = live_client()
        .get_candidate_summary(&CandidateSummaryRequest {
            cid: "N00007360".to_string(),
            cycle: None,
        })
        .unwrap();
    assert_eq!(summary.cid, "N00007360");
}

#[test]
#[ignore = "hits the real OpenSecrets API"]
fn organization_search_by_name() {
    let results = live_client()
        .search_organizations(&OrganizationSearchRequest {
            name: "Goldman".to_string(),
        })
        .unwrap();
    assert!(results.iter().any(|o| o.name.contains("Goldman")));
}
