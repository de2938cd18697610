//! Test doubles shared by the unit tests.

use std::sync::Mutex;

use crate::client::ServerPilot;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers with a canned outcome.
pub struct StubTransport {
    requests: Mutex<Vec<HttpRequest>>,
    outcome: Result<HttpResponse, String>,
}

impl StubTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Ok(HttpResponse::new(status, body)),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcome: Err(detail.to_string()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone().map_err(ApiError::Transport)
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new("cid", "key").unwrap()
}

pub fn client() -> ServerPilot<StubTransport> {
    ServerPilot::with_transport(config(), StubTransport::replying(200, "{}"))
}

pub fn raw_client() -> ServerPilot<StubTransport> {
    ServerPilot::with_transport(config().with_decode(false), StubTransport::replying(200, "{}"))
}
