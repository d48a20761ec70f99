//! # Mock Transport for Testing
//!
//! Recording [`Transport`] with scripted replies. Replies are queued per
//! `(method, path)`; a reply can be gated so tests control exactly when a
//! request settles, which is how out-of-order responses are exercised.

use super::http::{ApiResponse, FormPayload, Transport};
use crate::storefront::error::{StorefrontError, StorefrontResult};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub form: Option<FormPayload>,
}

/// Scripted outcome of one request
#[derive(Debug)]
pub enum MockReply {
    Respond(ApiResponse),
    Fail(String),
}

impl MockReply {
    fn into_result(self) -> StorefrontResult<ApiResponse> {
        match self {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(message) => Err(StorefrontError::Transport(message)),
        }
    }
}

struct QueuedReply {
    reply: MockReply,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct MockState {
    replies: HashMap<(Method, String), VecDeque<QueuedReply>>,
    calls: Vec<RecordedCall>,
}

/// Recording transport with scripted replies
///
/// Unscripted requests fail with a transport error.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn enqueue(&self, method: Method, path: &str, reply: MockReply, gate: Option<oneshot::Receiver<()>>) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state
            .replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(QueuedReply { reply, gate });
    }

    /// Queue a reply for the next GET of `path`
    pub fn push_get(&self, path: &str, reply: MockReply) {
        self.enqueue(Method::Get, path, reply, None);
    }

    /// Queue a reply for the next POST of `path`
    pub fn push_post(&self, path: &str, reply: MockReply) {
        self.enqueue(Method::Post, path, reply, None);
    }

    /// Queue a GET reply that is held until the returned sender fires (or is dropped)
    pub fn push_gated_get(&self, path: &str, reply: MockReply) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.enqueue(Method::Get, path, reply, Some(gate));
        release
    }

    /// Queue a POST reply that is held until the returned sender fires (or is dropped)
    pub fn push_gated_post(&self, path: &str, reply: MockReply) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.enqueue(Method::Post, path, reply, Some(gate));
        release
    }

    /// All requests received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).calls.len()
    }

    fn take_reply(&self, call: RecordedCall) -> Option<QueuedReply> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let key = (call.method, call.path.clone());
        state.calls.push(call);
        state.replies.get_mut(&key).and_then(|queue| queue.pop_front())
    }

    async fn settle(queued: Option<QueuedReply>, path: &str) -> StorefrontResult<ApiResponse> {
        match queued {
            Some(QueuedReply { reply, gate }) => {
                if let Some(gate) = gate {
                    // A dropped sender releases the gate as well
                    let _ = gate.await;
                }
                reply.into_result()
            }
            None => Err(StorefrontError::Transport(format!(
                "no scripted reply for {path}"
            ))),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> StorefrontResult<ApiResponse> {
        let queued = self.take_reply(RecordedCall {
            method: Method::Get,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            form: None,
        });
        Self::settle(queued, path).await
    }

    async fn post_form(&self, path: &str, form: FormPayload) -> StorefrontResult<ApiResponse> {
        let queued = self.take_reply(RecordedCall {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            form: Some(form),
        });
        Self::settle(queued, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_should_replay_queued_replies_in_order() {
        let mock = MockTransport::new();
        mock.push_get("/items", MockReply::Respond(ApiResponse::ok("first")));
        mock.push_get("/items", MockReply::Respond(ApiResponse::ok("second")));

        assert_eq!(mock.get("/items", &[]).await.unwrap().body, "first");
        assert_eq!(mock.get("/items", &[]).await.unwrap().body, "second");
        assert!(mock.get("/items", &[]).await.is_err());
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn mock_should_record_forms_and_queries() {
        let mock = MockTransport::new();
        mock.push_post("/items", MockReply::Respond(ApiResponse::ok("{}")));
        mock.push_get("/search", MockReply::Fail("offline".to_string()));

        let form = FormPayload::new().text("name", "Hat");
        mock.post_form("/items", form.clone()).await.unwrap();
        let err = mock.get("/search", &[("keyword", "hat")]).await.unwrap_err();
        assert!(matches!(err, StorefrontError::Transport(_)));

        let calls = mock.calls();
        assert_eq!(calls[0].form, Some(form));
        assert_eq!(calls[1].query, vec![("keyword".to_string(), "hat".to_string())]);
    }

    #[tokio::test]
    async fn gated_reply_should_wait_for_release() {
        let mock = std::sync::Arc::new(MockTransport::new());
        let release = mock.push_gated_get("/items", MockReply::Respond(ApiResponse::ok("late")));

        let mock_clone = mock.clone();
        let handle = tokio::spawn(async move { mock_clone.get("/items", &[]).await });

        tokio::task::yield_now().await;
        assert!(!handle.is_finished());

        release.send(()).unwrap();
        assert_eq!(handle.await.unwrap().unwrap().body, "late");
    }
}
