//! Recording transport for unit tests

use crate::api::http::Transport;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One call seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub api_key: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Fail(String),
}

/// Transport that records every call and answers from a queue
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl MockTransport {
    /// Queue a response body
    pub fn respond(self, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Body(body.to_string()));
        self
    }

    /// Queue a transport failure
    pub fn fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform_http_call(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<String>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            api_key: api_key.to_string(),
            body,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Fail(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("no response queued")),
        }
    }
}
