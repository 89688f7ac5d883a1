use crate::config::PeopleConfig;
use crate::services::{MongoDb, MongoPeopleRepository, PeopleRepository};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;

type Server = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

pub struct Application {
    port: u16,
    server: Server,
    db: MongoDb,
}

impl Application {
    pub async fn build(config: PeopleConfig) -> Result<Self, AppError> {
        Self::build_with_shutdown(config, std::future::pending()).await
    }

    /// Builds the application; the server drains in-flight requests and
    /// stops once `shutdown` resolves.
    pub async fn build_with_shutdown<F>(config: PeopleConfig, shutdown: F) -> Result<Self, AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let db = MongoDb::connect(
            &config.mongodb.connection_string,
            &config.mongodb.database_name,
        )
        .await?;

        let people: Arc<dyn PeopleRepository> = Arc::new(MongoPeopleRepository::new(db.clone()));
        let state = AppState::new(config.clone(), people);
        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .into_future();

        Ok(Self {
            port,
            server: Box::pin(server),
            db,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
