//! Mock search API server for client tests.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// One captured request: the decoded query parameters.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub params: HashMap<String, String>,
}

/// A canned response to serve.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error":"mock failure"}"#.to_string(),
        }
    }
}

#[derive(Default)]
struct Shared {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// In-process search endpoint with queued responses and captured requests.
pub struct MockSearchApi {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockSearchApi {
    pub async fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let router = Router::new()
            .route("/", get(handle))
            .with_state(Arc::clone(&shared));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock api");
        let addr = listener.local_addr().expect("mock api has no local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, shared }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.shared.responses.lock().push_back(response);
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.shared.requests.lock().clone()
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    shared.requests.lock().push(CapturedRequest { params });

    let response = shared
        .responses
        .lock()
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"totalHits":0,"hits":[]}"#));

    (
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
