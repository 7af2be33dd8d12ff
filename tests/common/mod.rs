//! Shared mock reputation API for the integration tests.
//!
//! Serves canned replies on `/check` and `/check-email` from an ephemeral
//! local port and records every request it sees, so tests can assert on the
//! exact body and headers the client sent.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

/// A request captured by the mock API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: &'static str,
    pub content_type: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

/// Canned reply for one endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub status: StatusCode,
    pub body: &'static str,
}

impl Reply {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(status: StatusCode, body: &'static str) -> Self {
        Self { status, body }
    }
}

#[derive(Clone)]
struct Endpoint {
    path: &'static str,
    reply: Reply,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Endpoint {
    fn respond(self, headers: HeaderMap, body: Bytes) -> (StatusCode, &'static str) {
        let recorded = RecordedRequest {
            path: self.path,
            content_type: header_string(&headers, "content-type"),
            authorization: header_string(&headers, "authorization"),
            body: String::from_utf8_lossy(&body).into_owned(),
        };
        self.requests.lock().unwrap().push(recorded);

        (self.reply.status, self.reply.body)
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

/// Mock API bound to an ephemeral local port.
pub struct MockApi {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    /// Serve distinct replies on the domain and email endpoints.
    pub async fn serve(domain_reply: Reply, email_reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));

        let check = Endpoint {
            path: "/check",
            reply: domain_reply,
            requests: requests.clone(),
        };
        let check_email = Endpoint {
            path: "/check-email",
            reply: email_reply,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route(
                "/check",
                post(move |headers: HeaderMap, body: Bytes| async move {
                    check.respond(headers, body)
                }),
            )
            .route(
                "/check-email",
                post(move |headers: HeaderMap, body: Bytes| async move {
                    check_email.respond(headers, body)
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock API listener");
        let addr = listener.local_addr().expect("mock API has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock API server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Serve the same reply on both endpoints.
    pub async fn with_reply(status: StatusCode, body: &'static str) -> Self {
        Self::serve(Reply::with_status(status, body), Reply::with_status(status, body)).await
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}
