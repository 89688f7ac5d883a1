#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use people_service::config::{MongoDbSettings, PeopleConfig};
use async_trait::async_trait;
use people_service::models::Person;
use people_service::services::{
    InMemoryPeopleRepository, MongoDb, PeopleRepository, RepositoryError,
};
use people_service::startup::Application;
use people_service::{build_router, AppState};
use service_core::config::{Config as CoreConfig, Environment};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_config(database_name: &str) -> PeopleConfig {
    PeopleConfig {
        common: CoreConfig { port: 0 },
        environment: Environment::Dev,
        log_level: "error".to_string(),
        mongodb: MongoDbSettings {
            connection_string: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: database_name.to_string(),
        },
    }
}

/// Router over an in-memory repository; no MongoDB needed.
pub struct TestRouter {
    pub router: Router,
    pub repo: InMemoryPeopleRepository,
}

impl TestRouter {
    pub fn new() -> Self {
        Self::with_environment(Environment::Dev)
    }

    pub fn with_environment(environment: Environment) -> Self {
        let repo = InMemoryPeopleRepository::new();
        Self::build(environment, Arc::new(repo.clone()), repo)
    }

    /// Router whose store refuses every connection.
    pub fn unreachable_store() -> Self {
        Self::build(
            Environment::Dev,
            Arc::new(UnreachablePeopleRepository),
            InMemoryPeopleRepository::new(),
        )
    }

    fn build(
        environment: Environment,
        people: Arc<dyn PeopleRepository>,
        repo: InMemoryPeopleRepository,
    ) -> Self {
        let mut config = test_config("unused");
        config.environment = environment;
        let state = AppState::new(config, people);
        Self {
            router: build_router(state),
            repo,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(json_request("POST", uri, body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(json_request("PUT", uri, body.to_string())).await
    }
}

/// Fails every call the way the driver does when MongoDB is down.
pub struct UnreachablePeopleRepository;

fn connection_refused() -> RepositoryError {
    RepositoryError::Store(mongodb::error::Error::from(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    )))
}

#[async_trait]
impl PeopleRepository for UnreachablePeopleRepository {
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        Err(connection_refused())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<Person>, RepositoryError> {
        Err(connection_refused())
    }

    async fn create(&self, _person: Person) -> Result<Person, RepositoryError> {
        Err(connection_refused())
    }

    async fn replace(&self, _person: Person) -> Result<bool, RepositoryError> {
        Err(connection_refused())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, RepositoryError> {
        Err(connection_refused())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Err(connection_refused())
    }
}

pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}

/// Real application bound to a random port with a throwaway database.
pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("people_test_{}", Uuid::new_v4());
        let app = Application::build(test_config(&db_name))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let db = app.db().clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
