//! In-memory transport answering from a per-request script

use async_trait::async_trait;
use multiblast_client::{ApiRequest, Method, Transport, TransportError};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::time::Instant;

type Reply = Result<Vec<u8>, TransportError>;

/// A request the transport received, stamped with tokio's clock so paused-time
/// tests can measure the gaps between polls
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub at: Instant,
}

/// Replies are queued per `(method, path)` and consumed in order. The last
/// reply of a queue repeats forever, so a resource scripted to stay `queued`
/// never finishes. Unscripted requests fail with a 404.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.script
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn push_json(&self, method: Method, path: &str, value: Value) -> &Self {
        self.push(method, path, Ok(value.to_string().into_bytes()))
    }

    pub fn push_text(&self, method: Method, path: &str, text: &str) -> &Self {
        self.push(method, path, Ok(text.as_bytes().to_vec()))
    }

    /// Fail with an HTTP error whose body carries `payload`
    pub fn push_error(&self, method: Method, path: &str, status: u16, payload: Value) -> &Self {
        self.push(
            method,
            path,
            Err(TransportError::Http {
                status,
                body: payload.to_string(),
            }),
        )
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, method: Method, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    /// Instants of every call to `path`, in order
    pub fn call_times(&self, method: Method, path: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .map(|call| call.at)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method,
            path: request.path.clone(),
            body: request.body.clone(),
            at: Instant::now(),
        });

        let mut script = self.script.lock().unwrap();
        match script.get_mut(&(request.method, request.path.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_found),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_found),
            None => not_found(),
        }
    }
}

fn not_found() -> Reply {
    Err(TransportError::Http {
        status: 404,
        body: r#"Not Found {"status":"not-found","message":"unscripted request"}"#.to_string(),
    })
}
