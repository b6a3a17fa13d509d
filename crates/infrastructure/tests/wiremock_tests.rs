//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Travelsafe adapter against a mock provider
//! - The full resolution pipeline over real HTTP
//! - Rendering of resolved trips

use std::sync::Arc;
use std::time::Duration;

use application::{FailureKind, PipelineStage, TripRequirementsService};
use infrastructure::{PageRenderer, TravelSafeAdapter, TravelSafeAppConfig};
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESTRICTIONS_PATH: &str = "/travelsafe/restrictions";

fn config_for(server: &MockServer) -> TravelSafeAppConfig {
    TravelSafeAppConfig {
        base_url: format!("{}{RESTRICTIONS_PATH}", server.uri()),
        api_key: Some(SecretString::from("integration-key".to_string())),
        max_body_bytes: 16 * 1024,
        ..Default::default()
    }
}

fn service_for(server: &MockServer, timeout: Duration) -> TripRequirementsService {
    let adapter = TravelSafeAdapter::new(&config_for(server)).unwrap();
    TripRequirementsService::with_timeout(Arc::new(adapter), timeout)
}

fn france_payload() -> serde_json::Value {
    serde_json::json!({
        "origin": {"name": "United States", "country_code": "US", "type": "country_code"},
        "destination": {"name": "France", "country_code": "FR", "type": "country_code"},
        "authorization_status": "restricted",
        "summary": "Travel is restricted",
        "details": "Proof of vaccination is required",
        "start_date": "2020-10-01",
        "end_date": null,
        "updated_at": "2020-10-14T09:30:00Z",
        "requirements": [
            {
                "category": {"id": "documents", "name": "Documents"},
                "sub_category": {"id": "health", "name": "Health"},
                "summary": "Complete the passenger locator form",
                "details": "",
                "documents": [
                    {"title": "Passenger locator", "document_url": "https://example.test/plf"},
                    {"title": "Form A"}
                ]
            }
        ]
    })
}

// ============================================================================
// Pipeline Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[tokio::test]
    async fn resolves_trip_through_http() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(RESTRICTIONS_PATH))
            .and(query_param("origin", "US"))
            .and(query_param("destination", "FR"))
            .and(query_param("date", "2020-10-15"))
            .and(header("Api-Version", "1"))
            .and(header("Authorization", "ApiKey integration-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(france_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let view = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap();

        assert_eq!(view.origin_name, "United States");
        assert_eq!(view.destination_name, "France");
        assert_eq!(view.status_label, "Restricted");
        assert_eq!(view.updated_on, "2020-10-14");
        assert_eq!(view.end_date, "");
        assert_eq!(view.requirements.len(), 1);

        let documents = &view.requirements[0].documents;
        assert_eq!(documents[0].url.as_deref(), Some("https://example.test/plf"));
        assert_eq!(documents[1].label, "Form A");
        assert!(documents[1].url.is_none());
    }

    #[tokio::test]
    async fn provider_error_is_reported_once() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Api);
        assert!(failure.message.contains("503"));
        assert!(failure.message.contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn unauthorized_is_an_api_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"bad key"}"#))
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Api);
        assert!(failure.message.contains("401"));
    }

    #[tokio::test]
    async fn empty_input_never_reaches_provider() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_secs(5))
            .resolve("US", "   ")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.stage, PipelineStage::Validating);
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(france_payload())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_millis(100))
            .resolve("US", "FR")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Timeout);
    }

    #[tokio::test]
    async fn oversized_success_body_is_a_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(32 * 1024)))
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Decode);
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"origin\": "))
            .mount(&server)
            .await;

        let failure = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap_err();

        assert_eq!(failure.kind, FailureKind::Decode);
        assert_eq!(failure.stage, PipelineStage::Decoding);
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_failure() {
        let config = TravelSafeAppConfig {
            base_url: "http://127.0.0.1:9/travelsafe/restrictions".to_string(),
            ..Default::default()
        };
        let adapter = TravelSafeAdapter::new(&config).unwrap();
        let service = TripRequirementsService::with_timeout(Arc::new(adapter), Duration::from_secs(5));

        let failure = service.resolve("US", "FR").await.unwrap_err();

        assert!(matches!(
            failure.kind,
            FailureKind::Transport | FailureKind::Timeout
        ));
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod rendering_tests {
    use super::*;

    #[tokio::test]
    async fn resolved_trip_renders_links() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(france_payload()))
            .mount(&server)
            .await;

        let view = service_for(&server, Duration::from_secs(5))
            .resolve("US", "FR")
            .await
            .unwrap();
        let html = PageRenderer::new().unwrap().render_result(&view).unwrap();

        assert!(html.contains("Origin: United States Destination: France"));
        assert!(html.contains("Restricted"));
        assert!(html.contains("Passenger locator</a>"));
        assert!(html.contains("<li>Form A</li>"));
    }
}
