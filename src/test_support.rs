//! Shared test doubles for the auth API.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::state::session::Session;
use crate::util::storage::MemoryStorage;

pub const BASE_URL: &str = "http://api.test";

#[derive(Default)]
struct StubInner {
    routes: HashMap<(Method, String), (u16, String)>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a fixed route table and recording every request.
/// Unrouted requests fail like a refused connection. Clones share state.
#[derive(Clone, Default)]
pub struct StubTransport {
    inner: Rc<RefCell<StubInner>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.inner
            .borrow_mut()
            .routes
            .insert((method, format!("{BASE_URL}{path}")), (status, body.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request.clone());
        match inner.routes.get(&(request.method, request.url.clone())) {
            Some((status, body)) => Ok(HttpResponse { status: *status, body: body.clone() }),
            None => Err(ApiError::Transport("connection refused".to_owned())),
        }
    }
}

pub fn stub_client(transport: &StubTransport) -> ApiClient<StubTransport> {
    ApiClient::new(BASE_URL, transport.clone())
}

pub fn empty_session() -> Session<MemoryStorage> {
    Session::restore(MemoryStorage::new())
}
