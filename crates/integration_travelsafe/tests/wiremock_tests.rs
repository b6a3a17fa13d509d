//! Integration tests for the travelsafe client (wiremock-based)

use integration_travelsafe::{
    BodyError, HttpTravelSafeClient, OutboundQuery, TravelSafeClient, TravelSafeConfig,
    TravelSafeError,
};
use proptest::prelude::*;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for_mock(server: &MockServer) -> TravelSafeConfig {
    TravelSafeConfig::for_testing(format!("{}/travelsafe/restrictions", server.uri()))
}

fn api_key() -> SecretString {
    SecretString::from("test-key".to_string())
}

const fn sample_restrictions_json() -> &'static str {
    r#"{
        "origin": {"name": "United States", "country_code": "US", "type": "country_code"},
        "destination": {"name": "France", "country_code": "FR", "type": "country_code"},
        "authorization_status": "allowed",
        "summary": "Travel is allowed",
        "requirements": []
    }"#
}

#[tokio::test]
async fn test_fetch_sends_headers_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/travelsafe/restrictions"))
        .and(header("Api-Version", "1"))
        .and(header("Authorization", "ApiKey test-key"))
        .and(query_param("origin", "US"))
        .and(query_param("origin_type", "country_code"))
        .and(query_param("destination", "FR"))
        .and(query_param("destination_type", "country_code"))
        .and(query_param("date", "2020-10-15"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_restrictions_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server);
    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let response = client.fetch(&query, &api_key()).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    let body = response.body.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["destination"]["name"], "France");
}

#[tokio::test]
async fn test_fetch_returns_error_status_unclassified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/travelsafe/restrictions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server);
    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let response = client.fetch(&query, &api_key()).await.unwrap();

    assert_eq!(response.status.as_u16(), 503);
    assert_eq!(response.status_line(), "503 Service Unavailable");
    assert_eq!(&response.body.unwrap()[..], b"Service Unavailable");
}

#[tokio::test]
async fn test_fetch_does_not_retry_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for_mock(&server);
    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let response = client.fetch(&query, &api_key()).await.unwrap();
    assert_eq!(response.status.as_u16(), 500);

    server.verify().await;
}

#[tokio::test]
async fn test_fetch_rejects_oversized_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(2048)))
        .mount(&server)
        .await;

    let config = TravelSafeConfig {
        max_body_bytes: 1024,
        ..config_for_mock(&server)
    };
    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let response = client.fetch(&query, &api_key()).await.unwrap();

    assert_eq!(response.body.unwrap_err(), BodyError::TooLarge { limit: 1024 });
}

#[tokio::test]
async fn test_fetch_accepts_body_at_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("y".repeat(1024)))
        .mount(&server)
        .await;

    let config = TravelSafeConfig {
        max_body_bytes: 1024,
        ..config_for_mock(&server)
    };
    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let response = client.fetch(&query, &api_key()).await.unwrap();
    assert_eq!(response.body.unwrap().len(), 1024);
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    let server = MockServer::start().await;
    let config = config_for_mock(&server);
    drop(server);

    let client = HttpTravelSafeClient::new(&config).unwrap();
    let query = OutboundQuery::build("US", "FR", &config).unwrap();

    let result = client.fetch(&query, &api_key()).await;
    assert!(matches!(result, Err(TravelSafeError::Network(_))));
}

proptest! {
    #[test]
    fn safe_values_appear_unchanged(
        origin in "[A-Za-z0-9]{1,8}",
        destination in "[A-Za-z0-9]{1,8}",
    ) {
        let config = TravelSafeConfig::default();
        let query = OutboundQuery::build(&origin, &destination, &config).unwrap();
        let origin_pair = format!("origin={origin}&");
        let destination_pair = format!("destination={destination}&");
        prop_assert!(query.query_string().contains(&origin_pair));
        prop_assert!(query.query_string().starts_with(&destination_pair));
    }

    #[test]
    fn arbitrary_values_decode_back_once(
        origin in "[A-Za-z0-9%&=+#?/]{1,3}[ -~]{0,10}",
        destination in "[A-Za-z0-9%&=+#?/]{1,3}[ -~]{0,10}",
    ) {
        let config = TravelSafeConfig::default();
        let query = OutboundQuery::build(&origin, &destination, &config).unwrap();
        let pairs: Vec<(String, String)> = query.url().query_pairs().into_owned().collect();
        prop_assert_eq!(&pairs[0], &("destination".to_string(), destination.trim().to_string()));
        prop_assert_eq!(&pairs[2], &("origin".to_string(), origin.trim().to_string()));
        prop_assert_eq!(pairs.len(), 5);
    }
}
