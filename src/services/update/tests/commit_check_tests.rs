use super::*;
use crate::services::config::UpdateSource;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const COMMIT_BODY: &str =
    r#"{"sha":"3f2c9a1b7d4e5f60718293a4b5c6d7e8f9012345","commit":{"message":"Fix floor plan parsing\n\nDetails here"}}"#;

/// Serve a single raw HTTP response on a local port; returns the base URL.
async fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

fn source_for(api_base: String) -> UpdateSource {
    UpdateSource {
        api_base,
        owner: "owner".to_string(),
        repo: "repo".to_string(),
        branch: "main".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_fetch_latest_commit_success() {
    let base = serve_once("200 OK", COMMIT_BODY).await;
    let url = source_for(base).commits_url();

    let commit = fetch_latest_commit(&url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(commit.sha, "3f2c9a1b7d4e5f60718293a4b5c6d7e8f9012345");
    assert_eq!(commit.short_sha(), "3f2c9a1");
    assert_eq!(commit.summary(), "Fix floor plan parsing");
}

#[tokio::test]
async fn test_check_for_update_success() {
    let base = serve_once("200 OK", COMMIT_BODY).await;

    let check = check_for_update(&source_for(base)).await;

    assert!(check.is_available());
    assert!(check.error.is_none());
    assert_eq!(
        check.message.as_deref(),
        Some("Fix floor plan parsing\n\nDetails here")
    );
    let commit = check.commit().unwrap();
    assert_eq!(commit.short_sha(), "3f2c9a1");
    assert_eq!(commit.summary(), "Fix floor plan parsing");
}

#[tokio::test]
async fn test_not_found_degrades_to_unavailable() {
    let base = serve_once("404 Not Found", r#"{"message":"Not Found"}"#).await;

    let check = check_for_update(&source_for(base)).await;

    assert!(check.sha.is_none());
    assert!(check.message.is_none());
    assert!(check.commit().is_none());
    let error = check.error.unwrap();
    assert!(error.contains("failed to fetch"), "{error}");
    assert!(error.contains("404"), "{error}");
}

#[tokio::test]
async fn test_malformed_body_degrades_to_unavailable() {
    let base = serve_once("200 OK", r#"{"unexpected": true}"#).await;

    let check = check_for_update(&source_for(base)).await;

    assert!(!check.is_available());
    assert!(check.error.unwrap().contains("failed to fetch"));
}

#[tokio::test]
async fn test_connection_refused_degrades_to_unavailable() {
    // Reserve a port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let check = check_for_update(&source_for(format!("http://{addr}"))).await;

    assert!(check.sha.is_none());
    assert!(check.message.is_none());
    assert!(check.error.is_some());
}

#[tokio::test]
async fn test_timeout_degrades_to_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Accept and hold the connection without ever answering.
    let _server = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let url = format!("http://{addr}/repos/owner/repo/commits/main");
    let result = fetch_latest_commit(&url, Duration::from_millis(200)).await;

    assert!(result.is_err());
}
