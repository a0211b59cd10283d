//! Request executor retry semantics against a mocked transport.

use std::time::Duration;

use alice_sdk::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AliceClient {
    AliceClient::builder()
        .config(AliceConfig::new(server.uri(), "test-key", "Basic dGVzdA=="))
        .retry(RetryConfig {
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: false,
            ..RetryConfig::default()
        })
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn get_succeeds_after_two_server_failures() {
    let server = MockServer::start().await;

    // First two attempts hit the failing mock, the third falls through.
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let hotels = client.hotels().all().await.expect("third attempt succeeds");

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, 1);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn get_fails_with_request_failed_after_exactly_three_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.hotels().all().await.expect_err("budget exhausted");

    match err {
        SdkError::Http(HttpError::RequestFailed {
            url,
            attempts,
            last_error,
        }) => {
            assert!(url.contains("/staff/v1/hotels"), "url was {url}");
            assert_eq!(attempts, 3);
            assert!(last_error.contains("500"), "last error was {last_error}");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn get_recovers_from_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let hotels = client.hotels().all().await.expect("second attempt succeeds");
    assert!(hotels.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn redirect_loop_surfaces_as_redirect_error_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/staff/v1/hotels", server.uri()).as_str()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.hotels().all().await.expect_err("redirect loop is terminal");

    match err {
        SdkError::Http(HttpError::Redirect { url }) => {
            assert!(url.contains("/staff/v1/hotels"), "url was {url}");
        }
        other => panic!("expected Redirect, got {other:?}"),
    }

    // One logical attempt: the transport's hop budget (10 follows), never
    // three logical attempts' worth.
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.len() <= 11, "saw {} requests", requests.len());
}

#[tokio::test]
async fn connect_failure_retries_then_reports_request_failed() {
    // Grab a port that nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
        listener.local_addr().expect("probe addr").port()
    };

    let client = AliceClient::builder()
        .config(AliceConfig::new(
            format!("http://127.0.0.1:{port}"),
            "test-key",
            "Basic dGVzdA==",
        ))
        .retry(RetryConfig {
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            jitter: false,
            ..RetryConfig::default()
        })
        .build()
        .expect("client should build");

    let err = client.hotels().all().await.expect_err("nothing is listening");

    match err {
        SdkError::Http(HttpError::RequestFailed { url, attempts, .. }) => {
            assert!(url.contains("/staff/v1/hotels"), "url was {url}");
            assert_eq!(attempts, 3);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_retry_after_is_capped_not_honored() {
    let server = MockServer::start().await;

    // u64::MAX seconds; multiplying to millis must neither overflow nor
    // stall the executor past its configured max delay.
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(
            ResponseTemplate::new(429).insert_header("retry-after", "18446744073709551615"),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let hotels = client.hotels().all().await.expect("retry happens promptly");
    assert!(hotels.is_empty());
}

#[tokio::test]
async fn not_found_fails_fast_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such resource"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.hotels().all().await.expect_err("404 is terminal");
    assert!(matches!(err, SdkError::Http(HttpError::NotFound(_))));
}

#[tokio::test]
async fn unauthorized_fails_fast_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/staff/v1/hotels"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.hotels().all().await.expect_err("401 is terminal");
    assert!(matches!(err, SdkError::Http(HttpError::Unauthorized)));
}

#[tokio::test]
async fn write_does_not_retry_definitive_server_answers() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/staff/v1/hotels/1/reservations/2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .reservations()
        .update(1, 2, &json!({"status": "Approved"}))
        .await
        .expect_err("write never re-sends after a server answer");

    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 503, .. })
    ));
}
