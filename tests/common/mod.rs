//! Shared utilities for integration testing.

use tokio::net::TcpListener;

use todo_service::config::ServiceConfig;
use todo_service::http::HttpServer;
use todo_service::lifecycle::Shutdown;

/// A service instance running on an OS-assigned local port.
pub struct TestService {
    pub base_url: String,
    shutdown: Shutdown,
}

impl TestService {
    /// Stop the server.
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Spawn a service with the given configuration on a free local port.
pub async fn spawn_service(mut config: ServiceConfig) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        base_url: format!("http://{}", addr),
        shutdown,
    }
}

/// Build a client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
