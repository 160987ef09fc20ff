//! In-process HTTP driver
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use mentorship::{MemoryRepository, Repository};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceExt;
use webserver::WebServer;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repository(MemoryRepository::new())
    }

    pub fn with_repository<R: Repository + 'static>(repository: R) -> Self {
        let address: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = WebServer::new(address, Arc::new(repository));
        Self {
            router: server.build_router(),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).to_string(),
            ))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Create a mentor and return its id
    pub async fn create_mentor(&self, body: Value) -> String {
        let (status, json) = self.post("/mentors/create", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["mentor"]["mentorId"].as_str().unwrap().to_string()
    }

    /// Create a student and return its id
    pub async fn create_student(&self, body: Value) -> String {
        let (status, json) = self.post("/students/create", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["student"]["studentId"].as_str().unwrap().to_string()
    }
}
