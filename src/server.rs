use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::protocol::{ApiError, Command, Request};
use crate::store::ItemStore;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<ItemStore>,
}

impl Server {
    /// Create and bind HTTP server to specified address, with a seeded store
    pub async fn bind(addr: &str) -> std::io::Result<Self> {
        Self::bind_with_store(addr, Arc::new(ItemStore::seeded())).await
    }

    /// Create and bind HTTP server serving the given store
    pub async fn bind_with_store(addr: &str, store: Arc<ItemStore>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store,
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn store(&self) -> Arc<ItemStore> {
        Arc::clone(&self.store)
    }

    /// Serve until the process is interrupted, then drain in-flight requests
    pub async fn run(self) -> std::io::Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        info!("Server started, listening on {}", self.local_addr);
        let app = router(self.store);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

/// Build the router; every path goes through command dispatch
pub fn router(store: Arc<ItemStore>) -> Router {
    Router::new().fallback(handle_request).with_state(store)
}

/// Turn an HTTP request into a command and execute it
async fn handle_request(
    State(store): State<Arc<ItemStore>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let mut req = Request::new(method, uri.path()).with_body(body);
    req.query = uri.query().map(str::to_string);

    let reply = Command::execute(&req, &store);

    match &reply.error {
        Some(err @ ApiError::Internal(cause)) => {
            error!("{} {} -> {}: {}: {}", req.method, uri, reply.status, err, cause);
        }
        Some(err) => warn!("{} {} -> {}: {}", req.method, uri, reply.status, err),
        None => info!("{} {} -> {}", req.method, uri, reply.status),
    }

    reply.into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
        assert_eq!(server.store().len().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_run_until_shutdown() {
        let server = Server::bind("127.0.0.1:0").await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(async {
            let _ = rx.await;
        }));
        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
