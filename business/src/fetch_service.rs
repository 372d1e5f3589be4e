use std::fmt::Debug;

use ehttp::{Request, Response, Result};

pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

/// Answers every request synchronously with a canned response and keeps
/// the requests it saw.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
    requests: std::sync::Mutex<Vec<Request>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn with_response(response: Result<Response>) -> Self {
        Self {
            response: Some(response),
            requests: Default::default(),
        }
    }

    /// Builds a JSON response with the given status.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::with_response(Ok(Response {
            url: "http://mock/api".to_owned(),
            ok: (200..300).contains(&status),
            status,
            status_text: String::new(),
            headers: Default::default(),
            bytes: serde_json::to_vec(body).unwrap_or_default(),
        }))
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        if let Some(response) = &self.response {
            on_done(response.clone());
        } else {
            on_done(Err("MockFetcher: no response set".to_owned()));
        }
    }
}
