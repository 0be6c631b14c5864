//! Client tests against a local stub server.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use roster_fetch::{FetchError, FetchSettings, RecordClient};
use roster_model::RecordId;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MEMBERS: &str = r#"[
    {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
    {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
]"#;

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve one canned response per connection, in order. Returns the endpoint
/// URL and a counter of accepted connections.
async fn serve(responses: Vec<String>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        for response in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            let mut request = vec![0u8; 8192];
            let _ = socket.read(&mut request).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/members.json"), hits)
}

fn settings(endpoint: String) -> FetchSettings {
    FetchSettings {
        endpoint,
        timeout_secs: 5,
        connect_timeout_secs: 5,
        max_attempts: 3,
        retry_backoff_ms: 1,
        system_proxy: false,
    }
}

#[tokio::test]
async fn fetches_and_decodes_members() {
    let (endpoint, hits) = serve(vec![http_response("200 OK", MEMBERS)]).await;
    let client = RecordClient::new(settings(endpoint)).unwrap();

    let records = client.fetch_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, RecordId::new(2));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retries_server_errors() {
    let (endpoint, hits) = serve(vec![
        http_response("503 Service Unavailable", ""),
        http_response("200 OK", MEMBERS),
    ])
    .await;
    let client = RecordClient::new(settings(endpoint)).unwrap();

    let records = client.fetch_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
    let (endpoint, hits) = serve(vec![
        http_response("500 Internal Server Error", ""),
        http_response("502 Bad Gateway", ""),
        http_response("503 Service Unavailable", ""),
        http_response("200 OK", MEMBERS),
    ])
    .await;
    let client = RecordClient::new(settings(endpoint)).unwrap();

    let err = client.fetch_records().await.unwrap_err();
    assert_eq!(err, FetchError::Status { code: 503 });
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let (endpoint, hits) = serve(vec![
        http_response("404 Not Found", ""),
        http_response("200 OK", MEMBERS),
    ])
    .await;
    let client = RecordClient::new(settings(endpoint)).unwrap();

    let err = client.fetch_records().await.unwrap_err();
    assert_eq!(err, FetchError::Status { code: 404 });
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_body_is_not_retried() {
    let (endpoint, hits) = serve(vec![
        http_response("200 OK", "{\"oops\":"),
        http_response("200 OK", MEMBERS),
    ])
    .await;
    let client = RecordClient::new(settings(endpoint)).unwrap();

    let err = client.fetch_records().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let client = RecordClient::new(FetchSettings {
        timeout_secs: 1,
        max_attempts: 1,
        ..settings(format!("http://{addr}/members.json"))
    })
    .unwrap();

    let err = client.fetch_records().await.unwrap_err();
    assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // bind then drop to get a port with nothing listening
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = RecordClient::new(FetchSettings {
        max_attempts: 1,
        ..settings(format!("http://{addr}/members.json"))
    })
    .unwrap();

    let err = client.fetch_records().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert!(err.is_retryable());
}
