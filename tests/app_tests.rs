mod support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use marginbell::adapter::inbound::health::{HealthServer, STATUS_TEXT};
use marginbell::adapter::outbound::exchange::ExchangeClient;
use marginbell::runtime::{App, RunMode, StartupSequence};
use tokio::sync::watch;

use support::config_for;
use support::exchange::{ExchangeReply, FakeExchange};
use support::notifier::RecordingNotifier;

async fn build_app(notifier: &RecordingNotifier) -> (App, SocketAddr) {
    build_app_with(notifier, Duration::ZERO).await
}

async fn build_app_with(notifier: &RecordingNotifier, exchange_delay: Duration) -> (App, SocketAddr) {
    let exchange = FakeExchange::start(
        ExchangeReply::json(r#"{"data":[{"asset":"USDT","availableMargin":"99.999"}]}"#)
            .delayed(exchange_delay),
    )
    .await;
    let mut config = config_for(&exchange.url());
    config.http.timeout_ms = 10_000;
    let client = ExchangeClient::from_config(&config).unwrap();
    let sequence =
        StartupSequence::from_config(&config, Arc::new(client), Arc::new(notifier.clone()));
    let server = HealthServer::bind("127.0.0.1:0".parse().unwrap())
        .await
        .unwrap();
    let app = App::new(server, sequence);
    let addr = app.local_addr();
    (app, addr)
}

async fn wait_for_messages(notifier: &RecordingNotifier, count: usize) {
    for _ in 0..100 {
        if notifier.len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("expected {count} messages, saw {}", notifier.len());
}

async fn exercise(mode: RunMode) {
    let notifier = RecordingNotifier::new();
    let (app, addr) = build_app(&notifier).await;
    let (tx, rx) = watch::channel(false);
    let handle = tokio::spawn(app.run(mode, rx));

    wait_for_messages(&notifier, 3).await;
    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, STATUS_TEXT);
    assert!(notifier.texts()[1].contains("$100.00"));

    tx.send(true).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("app stopped in time")
        .expect("app task joined");
    assert!(result.is_ok());
    assert_eq!(notifier.len(), 3);
}

/// The responder answers while the balance query is still outstanding.
async fn responds_before_announcements_finish(mode: RunMode) {
    let notifier = RecordingNotifier::new();
    let (app, addr) = build_app_with(&notifier, Duration::from_secs(3)).await;
    let (tx, rx) = watch::channel(false);
    let handle = tokio::spawn(app.run(mode, rx));

    wait_for_messages(&notifier, 1).await;
    let response = tokio::time::timeout(
        Duration::from_secs(1),
        reqwest::get(format!("http://{addr}/")),
    )
    .await
    .expect("responder answered during the sequence")
    .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), STATUS_TEXT);
    assert!(notifier.len() < 3);

    tx.send(true).unwrap();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("app stopped in time")
        .expect("app task joined");
    assert!(result.is_ok());
}

#[tokio::test]
async fn worker_mode_responds_during_sequence() {
    responds_before_announcements_finish(RunMode::Worker).await;
}

#[tokio::test]
async fn web_mode_responds_during_sequence() {
    responds_before_announcements_finish(RunMode::Web).await;
}

#[tokio::test]
async fn worker_mode_runs_and_stops() {
    exercise(RunMode::Worker).await;
}

#[tokio::test]
async fn web_mode_runs_and_stops() {
    exercise(RunMode::Web).await;
}

#[tokio::test]
async fn app_from_config_in_dry_run() {
    let exchange = FakeExchange::start(ExchangeReply::json(r#"{"data":[]}"#)).await;
    let mut config = config_for(&exchange.url());
    config.server.port = free_port().await;

    let app = App::from_config(&config, true).await.unwrap();
    assert_eq!(app.local_addr().port(), config.server.port);

    let (tx, rx) = watch::channel(false);
    let handle = tokio::spawn(app.run(RunMode::Worker, rx));
    tokio::time::sleep(Duration::from_millis(100)).await;
    tx.send(true).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("app stopped in time")
        .expect("app task joined");
    assert!(result.is_ok());
}

#[tokio::test]
async fn app_from_config_requires_api_key() {
    let mut config = config_for("http://127.0.0.1:1/balance");
    config.exchange.api_key = None;

    assert!(App::from_config(&config, true).await.is_err());
}

async fn free_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap().port()
}
