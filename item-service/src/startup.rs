use crate::config::ItemConfig;
use crate::services::{init_metrics, InMemoryItemStore, ItemStore};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Bind the configured port with a freshly seeded store.
    pub async fn build(config: ItemConfig) -> Result<Self, AppError> {
        Self::build_with_store(config, Arc::new(InMemoryItemStore::seeded())).await
    }

    pub async fn build_with_store(
        config: ItemConfig,
        store: Arc<dyn ItemStore>,
    ) -> Result<Self, AppError> {
        init_metrics();

        let state = AppState::new(config.clone(), store);
        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = %config.service_name,
            port = port,
            seeded_items = state.store.len().await,
            "Listening"
        );

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.state.store
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
