use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Scripted reply served by [`FakeExchange`].
#[derive(Debug, Clone)]
pub struct ExchangeReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl ExchangeReply {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct FakeState {
    reply: ExchangeReply,
    api_keys: Mutex<Vec<Option<String>>>,
}

/// Local balance endpoint on an ephemeral port.
pub struct FakeExchange {
    pub addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeExchange {
    pub async fn start(reply: ExchangeReply) -> Self {
        let state = Arc::new(FakeState {
            reply,
            api_keys: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/balance", get(balance))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake exchange");
        let addr = listener.local_addr().expect("fake exchange addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/balance", self.addr)
    }

    /// API keys seen on each request, in order.
    pub fn api_keys(&self) -> Vec<Option<String>> {
        self.state.api_keys.lock().expect("lock api keys").clone()
    }
}

async fn balance(State(state): State<Arc<FakeState>>, headers: HeaderMap) -> Response {
    let key = headers
        .get("x-bx-apikey")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    state.api_keys.lock().expect("lock api keys").push(key);

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    let status = StatusCode::from_u16(state.reply.status).expect("valid status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
        .into_response()
}

/// A URL on a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}/balance")
}
