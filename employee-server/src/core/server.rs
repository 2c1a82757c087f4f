//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::Duration;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::build_router;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with an initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let bind_addr = self.config.bind_addr();
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid listen address {bind_addr}: {e}")))?;

        let app = build_router(self.state.clone());

        tracing::info!("Employee Server listening on http://{}", addr);
        tracing::info!("  Database : {}", self.config.database_path);
        tracing::info!("  CORS     : {}", self.config.cors_origin);

        let handle = axum_server::Handle::new();

        // Handle shutdown signal
        let handle_clone = handle.clone();
        let timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            handle_clone.graceful_shutdown(Some(timeout));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|source| ServerError::Serve {
                addr: bind_addr,
                source,
            })?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
