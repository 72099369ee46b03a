//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Attach the guard middleware per route group
//! - Wire up shared middleware (request ID, tracing, timeout, body limit)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::handler::Handler;
use axum::middleware;
use axum::routing::{get, patch, post, put};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::schema::{QuotaConfig, ServiceConfig};
use crate::http::guards;
use crate::http::handlers;
use crate::store::TodoStore;

/// Application state injected into guards and handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
    pub quota: QuotaConfig,
}

/// HTTP server for the to-do service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            store: Arc::new(TodoStore::new()),
            quota: config.quota,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router: route groups behind their guards, then the
    /// shared middleware stack.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let users = Router::new()
            .route("/users", post(handlers::users::create_user))
            .merge(
                Router::new()
                    .route("/users/{id}", get(handlers::users::get_user))
                    .route("/users/{id}/pro", patch(handlers::users::upgrade_to_pro))
                    .route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        guards::resolve_user_by_id,
                    )),
            );

        let todos = Router::new()
            .route(
                "/todos",
                get(handlers::todos::list_todos).post(handlers::todos::create_todo.layer(
                    middleware::from_fn_with_state(state.clone(), guards::check_creation_quota),
                )),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                guards::require_user_account,
            ));

        let todo_items = Router::new()
            .route(
                "/todos/{id}",
                put(handlers::todos::update_todo).delete(handlers::todos::delete_todo),
            )
            .route("/todos/{id}/done", patch(handlers::todos::complete_todo))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                guards::require_owned_todo,
            ));

        Router::new()
            .merge(users)
            .merge(todos)
            .merge(todo_items)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
