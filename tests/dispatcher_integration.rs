//! Integration tests for the dispatcher over the real reqwest transport.
//!
//! A local `wiremock` server stands in for the Planyo endpoint.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use planyo_sdk::error::{HttpError, SdkError};
use planyo_sdk::prelude::*;

const API_TEST_OK: &str = r#"{"data":"API Test Response","response_code":0,"response_message":"Method api_test executed successfully."}"#;

fn endpoint(server: &MockServer) -> String {
    format!("{}/rest/", server.uri())
}

fn client(endpoint: &str, secret: Option<&str>) -> PlanyoClient {
    let mut builder = PlanyoClient::builder()
        .api_key("ABC")
        .endpoint(endpoint)
        .timeout(Duration::from_secs(5));
    if let Some(s) = secret {
        builder = builder.shared_secret(s);
    }
    builder.build().expect("client should build")
}

fn form_fields(body: &[u8]) -> HashMap<String, String> {
    serde_urlencoded::from_bytes(body).expect("body should be form-encoded")
}

#[tokio::test]
async fn test_api_test_posts_form_and_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("method=api_test"))
        .and(body_string_contains("api_key=ABC"))
        .respond_with(ResponseTemplate::new(200).set_body_string(API_TEST_OK))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&endpoint(&server), None)
        .site()
        .api_test()
        .send()
        .await
        .unwrap();

    assert_eq!(
        resp,
        json!({
            "data": "API Test Response",
            "response_code": 0,
            "response_message": "Method api_test executed successfully."
        })
    );
}

#[tokio::test]
async fn test_provider_error_passes_through() {
    let server = MockServer::start().await;

    let body = r#"{"response_code":1,"response_message":"Invalid method or API key for specified Planyo site"}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let resp = client(&endpoint(&server), None)
        .site()
        .list_translations()
        .send()
        .await
        .unwrap();

    let env = ResponseEnvelope::from_value(&resp).unwrap();
    assert!(!env.is_success());
    assert_eq!(env.response_code, 1);
}

#[tokio::test]
async fn test_json_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string(r#"{"response_code":5,"response_message":"Internal error"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&endpoint(&server), None)
        .invoke("api_test", None, false, 3)
        .await
        .unwrap();

    assert_eq!(resp["response_code"], 5);
}

#[tokio::test]
async fn test_non_json_body_is_malformed_and_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&endpoint(&server), None)
        .invoke("api_test", None, false, 3)
        .await
        .unwrap_err();

    match err {
        SdkError::Http(HttpError::MalformedResponse { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, b"Bad Gateway");
        }
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_keeps_non_utf8_bytes() {
    let server = MockServer::start().await;

    let raw = vec![b'<', 0xff, 0xfe, b'>'];
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(raw.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&endpoint(&server), None)
        .invoke("api_test", None, false, 3)
        .await
        .unwrap_err();

    match err {
        SdkError::Http(HttpError::MalformedResponse { body, .. }) => assert_eq!(body, raw),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hash_fields_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(API_TEST_OK))
        .mount(&server)
        .await;

    client(&endpoint(&server), Some("DEF"))
        .site()
        .api_test()
        .param("method", "x")
        .hash_auth(true)
        .send()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let fields = form_fields(&requests[0].body);
    assert_eq!(fields["method"], "api_test");
    assert_eq!(fields["api_key"], "ABC");
    let ts: i64 = fields["hash_timestamp"].parse().unwrap();
    assert_eq!(
        fields["hash_key"],
        planyo_sdk::auth::compute_hash_key("DEF", ts, "api_test")
    );
}

#[tokio::test]
async fn test_timeouts_retry_with_identical_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(API_TEST_OK)
                .set_delay(Duration::from_millis(500)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = PlanyoClient::builder()
        .api_key("ABC")
        .shared_secret("DEF")
        .endpoint(&endpoint(&server))
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client
        .site()
        .api_test()
        .hash_auth(true)
        .max_retries(2)
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SdkError::Http(HttpError::TransportUnavailable { attempts: 3, .. })
    ));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let first = form_fields(&requests[0].body);
    for req in &requests[1..] {
        assert_eq!(form_fields(&req.body), first);
    }
}

#[tokio::test]
async fn test_refused_connection_exhausts_budget() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{}/rest/", port);

    let err = client(&endpoint, None)
        .invoke("api_test", None, false, 2)
        .await
        .unwrap_err();

    match err {
        SdkError::Http(HttpError::TransportUnavailable { attempts, .. }) => {
            assert_eq!(attempts, 3);
        }
        other => panic!("expected TransportUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hash_auth_without_secret_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(API_TEST_OK))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&endpoint(&server), None)
        .invoke("api_test", None, true, 3)
        .await
        .unwrap_err();

    assert!(matches!(err, SdkError::AuthConfig));
}
