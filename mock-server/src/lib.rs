//! Stub score API server for tests.
//!
//! Every GET is answered from a registry of canned responses keyed by exact
//! request path. Requests for unregistered paths get a 404 with an error
//! body and are recorded, so a test can assert that the client only hit the
//! paths it was expected to.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// A canned response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stub {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

impl Stub {
    /// Reply with `value` serialized as JSON.
    pub fn json<T: Serialize>(status: u16, value: &T) -> serde_json::Result<Self> {
        Ok(Self::raw(status, serde_json::to_string(value)?))
    }

    /// Reply with `body` sent as-is.
    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self::bytes(status, body.into().into_bytes())
    }

    /// Reply with arbitrary bytes, which need not be valid UTF-8.
    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Reply with a status and no body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// On-disk form of a stub: the body is any JSON value.
#[derive(Deserialize)]
struct StubEntry {
    status: u16,
    #[serde(default)]
    body: Option<serde_json::Value>,
}

#[derive(Default)]
struct Registry {
    replies: HashMap<String, Stub>,
    unmatched: Vec<String>,
}

/// Shared registry of stubs. Clones share the same state.
#[derive(Clone, Default)]
pub struct Stubs {
    registry: Arc<Mutex<Registry>>,
}

impl Stubs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"<path>": {"status": 200, "body": <json>}}` into a registry.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let entries: HashMap<String, StubEntry> = serde_json::from_str(raw)?;
        let stubs = Self::new();
        for (path, entry) in entries {
            let stub = match entry.body {
                Some(body) => Stub::json(entry.status, &body)?,
                None => Stub::empty(entry.status),
            };
            stubs.register(path, stub);
        }
        Ok(stubs)
    }

    /// Answer GET `path` with `stub`, replacing any earlier stub for it.
    pub fn register(&self, path: impl Into<String>, stub: Stub) {
        self.lock().replies.insert(path.into(), stub);
    }

    /// Paths requested without a registered stub, in arrival order.
    pub fn unmatched(&self) -> Vec<String> {
        self.lock().unmatched.clone()
    }

    pub fn has_unmatched(&self) -> bool {
        !self.lock().unmatched.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lookup(&self, path: &str) -> Option<Stub> {
        let mut registry = self.lock();
        let stub = registry.replies.get(path).cloned();
        if stub.is_none() {
            registry.unmatched.push(path.to_string());
        }
        stub
    }
}

pub fn app(stubs: Stubs) -> Router {
    Router::new().fallback(replay).with_state(stubs)
}

pub async fn run(listener: TcpListener, stubs: Stubs) -> Result<(), std::io::Error> {
    axum::serve(listener, app(stubs)).await
}

async fn replay(State(stubs): State<Stubs>, method: Method, uri: Uri) -> Response {
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let path = uri.path();
    let Some(stub) = stubs.lookup(path) else {
        warn!(path, "no stub registered");
        let body = json!({ "error": format!("no stub for {path}") });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    };

    info!(path, status = stub.status, "replaying stub");
    let status = StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match stub.body {
        Some(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => status.into_response(),
    }
}
