use std::net::SocketAddr;
use std::time::Duration;

use marginbell::adapter::inbound::health::{HealthServer, STATUS_TEXT};
use marginbell::error::Error;
use tokio::sync::watch;

fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().expect("loopback addr")
}

#[tokio::test]
async fn root_returns_ok_with_status_text() {
    let server = HealthServer::bind(loopback()).await.unwrap();
    let addr = server.local_addr();
    let (_tx, rx) = watch::channel(false);
    tokio::spawn(server.serve(rx));

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert_eq!(body, STATUS_TEXT);
    assert!(!body.is_empty());
}

#[tokio::test]
async fn root_answers_repeatedly() {
    let server = HealthServer::bind(loopback()).await.unwrap();
    let addr = server.local_addr();
    let (_tx, rx) = watch::channel(false);
    tokio::spawn(server.serve(rx));

    let client = reqwest::Client::new();
    for _ in 0..5 {
        let response = client.get(format!("http://{addr}/")).send().await.unwrap();
        assert!(response.status().is_success());
    }
}

#[tokio::test]
async fn other_routes_are_not_found() {
    let server = HealthServer::bind(loopback()).await.unwrap();
    let addr = server.local_addr();
    let (_tx, rx) = watch::channel(false);
    tokio::spawn(server.serve(rx));

    let response = reqwest::get(format!("http://{addr}/status")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bind_conflict_is_reported() {
    let first = HealthServer::bind(loopback()).await.unwrap();
    let taken = first.local_addr();

    match HealthServer::bind(taken).await {
        Err(Error::Bind { addr, .. }) => assert_eq!(addr, taken),
        Err(other) => panic!("expected bind error, got {other}"),
        Ok(_) => panic!("expected bind to fail on {taken}"),
    }
}

#[tokio::test]
async fn serve_stops_on_shutdown() {
    let server = HealthServer::bind(loopback()).await.unwrap();
    let (tx, rx) = watch::channel(false);
    let handle = tokio::spawn(server.serve(rx));

    tx.send(true).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("server stopped in time")
        .expect("server task joined");
    assert!(result.is_ok());
}
