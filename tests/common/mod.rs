//! In-process mock of the booking backend.
//!
//! Every request is recorded; responses come from a table keyed by method
//! and path (without the `/api` prefix). Unknown routes answer 404 with a
//! failed envelope.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use bus_booking_client::{BookingClient, Config};

pub const API_PREFIX: &str = "/api";
pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

type Responses = HashMap<(Method, String), (StatusCode, Value)>;

#[derive(Clone)]
struct MockState {
    responses: Arc<Responses>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[derive(Default)]
pub struct MockBackend {
    responses: Responses,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.responses.insert((method, path.to_string()), (status, body));
        self
    }

    pub async fn spawn(self) -> RunningMock {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responses: Arc::new(self.responses),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(handle).with_state(state);
        let base_url = serve(app).await;

        RunningMock { base_url, requests }
    }
}

/// Bind an ephemeral port and serve `app` in the background
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}{}", addr, API_PREFIX)
}

pub struct RunningMock {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl RunningMock {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// Client holding a bearer token
    pub fn client(&self) -> BookingClient {
        BookingClient::new(Config::new(&self.base_url).with_token(TEST_TOKEN)).unwrap()
    }

    pub fn anonymous_client(&self) -> BookingClient {
        BookingClient::new(Config::new(&self.base_url)).unwrap()
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();

    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    match state.responses.get(&(method, path)) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "data": null, "message": "No such route" })),
        ),
    }
}
