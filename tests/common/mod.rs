//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use form_backend::config::AppConfig;
use form_backend::http::HttpServer;
use form_backend::lifecycle::Shutdown;
use form_backend::submissions::SubmissionStore;

/// A running server instance bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    /// The store injected into the server, for direct inspection.
    pub store: Arc<SubmissionStore>,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Boot the real server on 127.0.0.1:0 with default configuration.
///
/// The listener is bound before the server task is spawned, so clients can
/// connect immediately without polling for readiness.
pub async fn start_server() -> TestServer {
    let config = AppConfig::default();
    let store = Arc::new(SubmissionStore::new());
    let server = HttpServer::with_store(config, store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer {
        addr,
        store,
        shutdown,
    }
}
