use crate::models::PersonDocument;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

pub const PEOPLE_COLLECTION: &str = "people";

/// Process-wide MongoDB handle. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub fn people(&self) -> Collection<PersonDocument> {
        self.db.collection(PEOPLE_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
