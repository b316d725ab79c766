//! Mock GraphQL content backend for testing
//!
//! Answers POST /graphql. The response is picked by the root field named in
//! the query document (`getTheme` or `getHome`).

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// What the mock answers for one root field
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with `{"data": ...}`
    Data(Value),
    /// 200 with `{"data": null, "errors": [{"message": ...}]}`
    Errors(Vec<String>),
    /// Bare HTTP status with an empty body
    Status(u16),
    /// 200 with an arbitrary body
    Raw(Value),
    /// Sample data, sent only after the delay
    Stall(Duration),
}

struct MockGraphQlState {
    theme: MockReply,
    home: MockReply,
    requests: Vec<Value>,
}

/// Mock GraphQL server
pub struct MockGraphQlServer {
    addr: SocketAddr,
    state: Arc<RwLock<MockGraphQlState>>,
    handle: JoinHandle<()>,
}

impl MockGraphQlServer {
    /// Start a mock backend on a random port with sample content
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockGraphQlState {
            theme: MockReply::Data(sample_theme()),
            home: MockReply::Data(sample_home()),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .route("/graphql", post(handle_graphql))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub fn endpoint(&self) -> url::Url {
        url::Url::parse(&format!("http://{}/graphql", self.addr)).unwrap()
    }

    pub async fn set_theme(&self, reply: MockReply) {
        self.state.write().await.theme = reply;
    }

    pub async fn set_home(&self, reply: MockReply) {
        self.state.write().await.home = reply;
    }

    /// Request bodies received so far
    pub async fn requests(&self) -> Vec<Value> {
        self.state.read().await.requests.clone()
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

async fn handle_graphql(
    State(state): State<Arc<RwLock<MockGraphQlState>>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let query = body["query"].as_str().unwrap_or_default().to_string();

    let reply = {
        let mut state = state.write().await;
        state.requests.push(body);
        if query.contains("getTheme") {
            state.theme.clone()
        } else if query.contains("getHome") {
            state.home.clone()
        } else {
            MockReply::Errors(vec![format!("unknown query: {}", query.trim())])
        }
    };

    match reply {
        MockReply::Data(data) => (StatusCode::OK, Json(json!({ "data": data }))).into_response(),
        MockReply::Errors(messages) => {
            let errors: Vec<Value> = messages
                .into_iter()
                .map(|message| json!({ "message": message }))
                .collect();
            (
                StatusCode::OK,
                Json(json!({ "data": null, "errors": errors })),
            )
                .into_response()
        }
        MockReply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        MockReply::Raw(body) => (StatusCode::OK, Json(body)).into_response(),
        MockReply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(json!({ "data": sample_theme() }))).into_response()
        }
    }
}

pub fn sample_theme() -> Value {
    json!({
        "getTheme": {
            "headerMenu": {
                "label": "Main menu",
                "menuEntries": [
                    { "_id": "m1", "label": "Home", "url": "home" },
                    { "_id": "m2", "label": "Events", "url": "/events" },
                    { "_id": "m3", "label": "About", "url": "/about" }
                ]
            }
        }
    })
}

pub fn sample_home() -> Value {
    json!({
        "getHome": {
            "overlay": "Welcome to St. Peter & St. Andrew",
            "photoPortrait": { "url": "https://cdn.example/portrait.jpg", "title": "Nave" },
            "photoLandscape": { "url": "https://cdn.example/landscape.jpg", "title": "Church" }
        }
    })
}
