//! Main webserver implementation
//!
//! Wires the HTTP routes to the mentorship engine and serves them until
//! Ctrl+C.

use axum::Router;
use axum::routing::{get, post};
use mentorship::Repository;
use shared::{Component, logging};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::{mentors, students, system};

pub struct WebServer<R: Repository> {
    bind_address: SocketAddr,
    state: AppState<R>,
}

impl<R: Repository + 'static> WebServer<R> {
    pub fn new(bind_address: SocketAddr, repository: Arc<R>) -> Self {
        Self {
            bind_address,
            state: AppState::new(repository),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/mentors", get(mentors::list::<R>))
            .route("/mentors/create", post(mentors::create::<R>))
            .route("/mentors/:mentor_id", get(mentors::show::<R>))
            .route(
                "/mentors/:mentor_id/students",
                get(mentors::roster::<R>).post(mentors::assign_students::<R>),
            )
            .route("/students", get(students::list::<R>))
            .route("/students/create", post(students::create::<R>))
            .route("/students/:student_id", get(students::show::<R>))
            .route("/students/:student_id/mentor", post(students::assign_mentor::<R>))
            .route(
                "/students/:student_id/previous-mentor",
                get(students::previous_mentor::<R>),
            )
            .route("/health", get(system::health::<R>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartupFailed {
                address: self.bind_address.to_string(),
                reason: e.to_string(),
            })?;

        logging::log_startup(
            Component::WebServer,
            &format!("HTTP API on http://{}", self.bind_address),
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        logging::log_success(Component::WebServer, "WebServer stopped gracefully");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal"),
        Err(err) => logging::log_error(Component::WebServer, "Signal handling", &err),
    }
}
