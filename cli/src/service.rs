//! The remote side of the store: executes `Command`s over HTTP.
//!
//! # Design
//! `RemoteTodoService` is the seam between the session and the network.
//! `HttpTodoService` builds and parses with `TodoClient` and executes with a
//! blocking `ureq` agent configured to hand 4xx/5xx back as data, so status
//! interpretation stays in the core. Only a failed round-trip (DNS, connect,
//! I/O) becomes `ApiError::Transport`.

use todo_core::{ApiError, Command, HttpMethod, HttpRequest, HttpResponse, Outcome, TodoClient};
use tracing::debug;
use ureq::typestate::WithBody;

/// Runs one command to completion. Blocking; callers put it off the async
/// executor.
pub trait RemoteTodoService: Send + Sync + 'static {
    fn execute(&self, command: Command) -> Outcome;
}

#[derive(Clone)]
pub struct HttpTodoService {
    client: TodoClient,
    agent: ureq::Agent,
}

impl HttpTodoService {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: TodoClient::new(base_url),
            agent,
        }
    }

    fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %req.method, path = %req.path, "sending");
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = req;
        let result = match method {
            HttpMethod::Get => with_headers(self.agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&path), &headers).call(),
            HttpMethod::Post => send_body(with_headers(self.agent.post(&path), &headers), body),
            HttpMethod::Put => send_body(with_headers(self.agent.put(&path), &headers), body),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, "received");
        Ok(HttpResponse::new(status, body))
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

impl RemoteTodoService for HttpTodoService {
    fn execute(&self, command: Command) -> Outcome {
        command.run(&self.client, |req| self.send(req))
    }
}
