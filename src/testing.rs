// Test doubles for the transport, timer and navigation seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::Kiosk;
use crate::services::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Navigator};
use crate::state::AuthState;
use crate::utils::{MemoryTokenStore, Sleeper};

type Reply = Result<HttpResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Answers requests from a script, in order, and records what was sent.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn respond_json(&self, status: u16, body: Value) {
        self.push(Ok(HttpResponse::new(status, body.to_string())));
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, error: ApiError) {
        self.push(Err(error));
    }

    /// Next request waits until the returned sender is used.
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn push(&self, reply: Reply) {
        self.script.borrow_mut().push_back(Scripted::Ready(reply));
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".to_string()))),
            None => Err(ApiError::Network("no scripted reply".to_string())),
        }
    }
}

/// Timers that only fire when the test says so.
#[derive(Default)]
pub struct ManualSleeper {
    pending: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualSleeper {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn fire_all(&self) {
        let timers: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (_, tx) in timers {
            let _ = tx.send(());
        }
    }
}

#[async_trait(?Send)]
impl Sleeper for ManualSleeper {
    async fn sleep(&self, duration: Duration) {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((duration, tx));
        let _ = rx.await;
    }
}

/// Timers that fire immediately.
#[derive(Default)]
pub struct InstantSleeper;

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

/// Client against `http://api.test/v1` with no credential.
pub fn test_client(transport: Rc<MockTransport>) -> ApiClient {
    let auth = Rc::new(AuthState::new(Rc::new(MemoryTokenStore::default())));
    ApiClient::new(transport, auth, Rc::new(RecordingNavigator::default()))
        .with_base_url("http://api.test", "v1")
}

pub fn kiosk_json(id: &str, name: &str) -> Value {
    json!({
        "kioskId": id,
        "kioskNm": name,
        "kioskTp": "STANDARD",
        "status": "active",
        "position": "1F lobby"
    })
}

pub fn kiosk(id: &str, name: &str) -> Kiosk {
    serde_json::from_value(kiosk_json(id, name)).expect("valid kiosk fixture")
}

/// `GET kiosk` body with one row per name.
pub fn list_body(names: &[&str], total: Value) -> Value {
    let rows: Vec<Value> = names
        .iter()
        .map(|name| kiosk_json(&format!("KS-{}", name), name))
        .collect();
    json!({ "listData": rows, "listTotal": total })
}
