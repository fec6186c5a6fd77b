#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use reqwest::Client;
use serde_json::{Value, json};
use tokio::sync::Semaphore;

use golive_dashboard::catalog::{StatusCategory, field_ids};
use golive_dashboard::config::Config;
use golive_dashboard::error::FetchError;
use golive_dashboard::models::{FieldEntry, RawProject};
use golive_dashboard::rocketlane::{ProjectQuery, ProjectSource};

pub const TEST_API_KEY: &str = "test-api-key";

// ── Fixtures ────────────────────────────────────────────────────

/// Raw project as the upstream API returns it.
pub fn project_json(id: &str, name: &str, region: &str, status: &str, scope: &str) -> Value {
    json!({
        "projectId": id,
        "projectName": name,
        "owner": { "firstName": "Ada", "lastName": "Lovelace" },
        "fields": [
            { "fieldId": field_ids::REGION, "fieldValueLabel": region },
            { "fieldId": field_ids::IMPLEMENTATION_MANAGER, "fieldValueLabel": format!("{name} IM") },
            { "fieldId": field_ids::PROJECT_MANAGER, "fieldValueLabel": format!("{name} PM") },
            { "fieldId": field_ids::CURRENT_STATUS, "fieldValueLabel": status },
            { "fieldId": field_ids::SCOPE_OF_WORK, "fieldValueLabel": scope },
        ]
    })
}

pub fn raw_project(id: &str, region: &str, status: &str) -> RawProject {
    RawProject {
        project_id: id.to_string(),
        project_name: format!("Project {id}"),
        owner: None,
        fields: vec![
            FieldEntry {
                field_id: field_ids::REGION,
                field_value_label: region.to_string(),
            },
            FieldEntry {
                field_id: field_ids::CURRENT_STATUS,
                field_value_label: status.to_string(),
            },
        ],
    }
}

// ── Fake Rocketlane service ─────────────────────────────────────

#[derive(Clone)]
pub enum FakeReply {
    Projects(Vec<Value>),
    Status(StatusCode),
    Body(Value),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub api_key: Option<String>,
    pub params: HashMap<String, String>,
}

#[derive(Default)]
pub struct FakeRocketlane {
    /// Keyed by the status filter value ("18", "4").
    replies: Mutex<HashMap<String, FakeReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeRocketlane {
    pub fn reply(&self, status: StatusCategory, reply: FakeReply) {
        self.replies
            .lock()
            .unwrap()
            .insert(status.filter_value().to_string(), reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn fake_projects(
    State(fake): State<Arc<FakeRocketlane>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let filter = params
        .get("project.field.26538.value")
        .cloned()
        .unwrap_or_default();

    fake.requests.lock().unwrap().push(RecordedRequest {
        api_key: headers
            .get("api-key")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        params,
    });

    let reply = fake.replies.lock().unwrap().get(&filter).cloned();
    match reply {
        Some(FakeReply::Projects(projects)) => {
            axum::Json(json!({ "data": { "data": projects } })).into_response()
        }
        Some(FakeReply::Status(code)) => code.into_response(),
        Some(FakeReply::Body(body)) => axum::Json(body).into_response(),
        None => axum::Json(json!({ "data": { "data": [] } })).into_response(),
    }
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub fake: Arc<FakeRocketlane>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_html(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

/// Spawn a fake project service and a dashboard pointed at it.
pub async fn spawn_app() -> TestApp {
    let fake = Arc::new(FakeRocketlane::default());
    let fake_router = Router::new()
        .route("/api/1.0/projects", get(fake_projects))
        .with_state(fake.clone());
    let fake_addr = serve(fake_router).await;

    spawn_app_with_upstream(format!("http://{fake_addr}/api/1.0"), fake).await
}

/// Spawn a dashboard against an arbitrary upstream base URL.
pub async fn spawn_app_with_upstream(base_url: String, fake: Arc<FakeRocketlane>) -> TestApp {
    let config = Config {
        api_key: TEST_API_KEY.to_string(),
        rocketlane_base_url: base_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    };

    let addr = serve(golive_dashboard::build_app(config)).await;

    TestApp {
        addr,
        client: Client::new(),
        fake,
    }
}

/// Base URL on a local port with nothing listening.
pub async fn unbound_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/1.0")
}

// ── In-memory source ────────────────────────────────────────────

/// In-memory project source. Calls can be held at a gate until released,
/// which lets tests control completion order.
pub struct StubSource {
    replies: Mutex<HashMap<StatusCategory, Result<Vec<RawProject>, FetchError>>>,
    queries: Mutex<Vec<ProjectQuery>>,
    calls: AtomicUsize,
    /// Calls numbered below this wait for a gate permit.
    held_calls: AtomicUsize,
    gate: Semaphore,
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            queries: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            held_calls: AtomicUsize::new(0),
            gate: Semaphore::new(0),
        }
    }

    pub fn with(self, status: StatusCategory, reply: Result<Vec<RawProject>, FetchError>) -> Self {
        self.set(status, reply);
        self
    }

    pub fn set(&self, status: StatusCategory, reply: Result<Vec<RawProject>, FetchError>) {
        self.replies.lock().unwrap().insert(status, reply);
    }

    /// Hold the next `n` calls until [`StubSource::release`].
    pub fn hold_next(&self, n: usize) {
        let start = self.calls.load(Ordering::SeqCst);
        self.held_calls.store(start + n, Ordering::SeqCst);
    }

    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<ProjectQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Yield until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ProjectSource for StubSource {
    async fn list_projects(&self, query: &ProjectQuery) -> Result<Vec<RawProject>, FetchError> {
        self.queries.lock().unwrap().push(*query);
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.held_calls.load(Ordering::SeqCst) {
            let permit = self.gate.acquire().await.expect("gate closed");
            permit.forget();
        }

        self.replies
            .lock()
            .unwrap()
            .get(&query.status)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
