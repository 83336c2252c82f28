//! In-process address service speaking the REST contract over real HTTP.
//!
//! Routes mirror the production service: `GET`/`POST /address`,
//! `PUT /address/update` and `DELETE /address/delete`. Records are kept as raw
//! JSON so tests can seed documents the client has to cope with (string zip
//! codes, extra keys). A one-shot override replaces the next reply to
//! simulate outages, garbage bodies and slow answers.

#![allow(dead_code)]

use addrbook::contact::Contact;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::Router;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: Method,
    pub path: &'static str,
    /// Parsed body, `Value::Null` when empty.
    pub body: Value,
}

/// Reply used instead of the normal route behaviour for one request.
#[derive(Debug, Clone)]
pub struct Override {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl Override {
    pub fn status(code: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status code"),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// 200 with a body of the caller's choosing.
    pub fn body(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct Store {
    records: Vec<Value>,
    next_id: u64,
    hits: Vec<Hit>,
    next_override: Option<Override>,
}

#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Store>>);

impl Shared {
    /// Log the request and hand back the override, if one is armed.
    fn hit(&self, method: Method, path: &'static str, body: &[u8]) -> Option<Override> {
        let body = serde_json::from_slice(body).unwrap_or(Value::Null);
        let mut store = self.0.lock();
        store.hits.push(Hit { method, path, body });
        store.next_override.take()
    }
}

pub struct AddressBackend {
    addr: SocketAddr,
    shared: Shared,
    _stop: oneshot::Sender<()>,
}

impl AddressBackend {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let router = Router::new()
            .route("/address", get(list).post(create))
            .route("/address/update", put(update))
            .route("/address/delete", delete(remove))
            .with_state(shared.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind address backend");
        let addr = listener.local_addr().expect("backend address");
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            shared,
            _stop: stop_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn seed(&self, contacts: &[Contact]) {
        let mut store = self.shared.0.lock();
        for contact in contacts {
            store
                .records
                .push(serde_json::to_value(contact).expect("contact serializes"));
        }
    }

    /// Store a document verbatim, bypassing the typed model.
    pub fn seed_raw(&self, record: Value) {
        self.shared.0.lock().records.push(record);
    }

    pub fn records(&self) -> Vec<Value> {
        self.shared.0.lock().records.clone()
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.shared.0.lock().hits.clone()
    }

    /// Answer the next request with `reply` instead of touching the store.
    pub fn override_next(&self, reply: Override) {
        self.shared.0.lock().next_override = Some(reply);
    }
}

async fn overridden(reply: Override) -> Response {
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    (
        reply.status,
        [("content-type", "application/json")],
        reply.body,
    )
        .into_response()
}

fn not_found(id: &Value) -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "error": format!("no address {}", id) })),
    )
        .into_response()
}

async fn list(State(shared): State<Shared>) -> Response {
    if let Some(reply) = shared.hit(Method::GET, "/address", &[]) {
        return overridden(reply).await;
    }
    let records = shared.0.lock().records.clone();
    axum::Json(Value::Array(records)).into_response()
}

async fn create(State(shared): State<Shared>, body: Bytes) -> Response {
    if let Some(reply) = shared.hit(Method::POST, "/address", &body) {
        return overridden(reply).await;
    }
    let Ok(Value::Object(mut record)) = serde_json::from_slice::<Value>(&body) else {
        return (StatusCode::BAD_REQUEST, "expected a JSON object").into_response();
    };

    let mut store = shared.0.lock();
    store.next_id += 1;
    let id = format!("srv-{}", store.next_id);
    record.insert("_id".to_string(), Value::String(id));
    store.records.push(Value::Object(record.clone()));
    (StatusCode::CREATED, axum::Json(Value::Object(record))).into_response()
}

async fn update(State(shared): State<Shared>, body: Bytes) -> Response {
    if let Some(reply) = shared.hit(Method::PUT, "/address/update", &body) {
        return overridden(reply).await;
    }
    let Ok(Value::Object(mut changes)) = serde_json::from_slice::<Value>(&body) else {
        return (StatusCode::BAD_REQUEST, "expected a JSON object").into_response();
    };
    let id = changes.remove("addressId").unwrap_or(Value::Null);

    let mut store = shared.0.lock();
    let Some(record) = store.records.iter_mut().find(|r| r["_id"] == id) else {
        return not_found(&id);
    };
    if let Value::Object(fields) = &mut *record {
        fields.extend(changes);
    }
    axum::Json(record.clone()).into_response()
}

async fn remove(State(shared): State<Shared>, body: Bytes) -> Response {
    if let Some(reply) = shared.hit(Method::DELETE, "/address/delete", &body) {
        return overridden(reply).await;
    }
    let id = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|body| body.get("addressId").cloned())
        .unwrap_or(Value::Null);

    let mut store = shared.0.lock();
    let before = store.records.len();
    store.records.retain(|r| r["_id"] != id);
    if store.records.len() == before {
        return not_found(&id);
    }
    StatusCode::NO_CONTENT.into_response()
}
