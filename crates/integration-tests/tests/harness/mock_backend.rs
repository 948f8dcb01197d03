//! Mock transcription backend for integration tests
//!
//! Serves the URL, file and subtitles routes with a canned reply and
//! records every request it receives

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Multipart, OriginalUri, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a JSON body
    Json(serde_json::Value),
    /// 200 with a raw body and the given content type
    Raw { content_type: &'static str, body: String },
    /// Given status; the body mimics a success payload
    Status(u16),
}

/// One multipart part as received
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// Request body as received
#[derive(Debug, Clone)]
pub enum ReceivedBody {
    Raw(Bytes),
    Multipart(Vec<ReceivedPart>),
}

/// One recorded request
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub body: ReceivedBody,
}

impl ReceivedRequest {
    /// Body parsed as JSON; panics if it is not
    pub fn json(&self) -> serde_json::Value {
        match &self.body {
            ReceivedBody::Raw(bytes) => serde_json::from_slice(bytes).expect("body must be JSON"),
            ReceivedBody::Multipart(_) => panic!("expected a raw body, got multipart"),
        }
    }

    /// Multipart parts; panics if the body was not multipart
    pub fn parts(&self) -> &[ReceivedPart] {
        match &self.body {
            ReceivedBody::Multipart(parts) => parts,
            ReceivedBody::Raw(_) => panic!("expected multipart, got raw body"),
        }
    }
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<ReceivedRequest>>,
}

/// Running mock backend
pub struct MockBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Reply `{"transcript": <text>}` to every route
    pub async fn transcript(text: &str) -> anyhow::Result<Self> {
        Self::start(Reply::Json(serde_json::json!({ "transcript": text }))).await
    }

    /// Reply with the given status to every route
    pub async fn failing(status: u16) -> anyhow::Result<Self> {
        Self::start(Reply::Status(status)).await
    }

    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        Self::start_at(reply, "").await
    }

    /// Mount the routes under a path prefix such as `/api`
    pub async fn start_at(reply: Reply, prefix: &str) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let routes = Router::new()
            .route("/url_transcript", routing::post(handle_raw))
            .route("/subtitles", routing::post(handle_raw))
            .route("/file_transcript", routing::post(handle_multipart))
            .route("/upload", routing::post(handle_multipart))
            .with_state(Arc::clone(&state));

        let app = if prefix.is_empty() {
            routes
        } else {
            Router::new().nest(prefix, routes)
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure the client with
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn handle_raw(
    State(state): State<Arc<MockState>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(ReceivedRequest {
        path: uri.path().to_owned(),
        content_type: content_type(&headers),
        body: ReceivedBody::Raw(body),
    });

    reply(&state.reply)
}

async fn handle_multipart(
    State(state): State<Arc<MockState>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    let mut parts = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().map(str::to_owned);
        let part_type = field.content_type().map(str::to_owned);
        let data = field.bytes().await.unwrap_or_default();

        parts.push(ReceivedPart {
            name,
            file_name,
            content_type: part_type,
            data,
        });
    }

    state.requests.lock().unwrap().push(ReceivedRequest {
        path: uri.path().to_owned(),
        content_type: content_type(&headers),
        body: ReceivedBody::Multipart(parts),
    });

    reply(&state.reply)
}

fn reply(reply: &Reply) -> Response {
    match reply {
        Reply::Json(value) => axum::Json(value.clone()).into_response(),
        Reply::Raw { content_type, body } => ([(header::CONTENT_TYPE, *content_type)], body.clone()).into_response(),
        Reply::Status(status) => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            // Shaped like a success payload to prove the body is ignored
            (status, axum::Json(serde_json::json!({ "transcript": "should not be shown" }))).into_response()
        }
    }
}
