use crate::models::person::parse_person_id;
use crate::models::{Person, PersonDocument};
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Invalid person id: {0}")]
    InvalidId(String),

    #[error("Person id is required")]
    MissingId,

    #[error("Store unavailable: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidId(_) | RepositoryError::MissingId => {
                AppError::BadRequest(anyhow::Error::new(err))
            }
            RepositoryError::Store(e) => AppError::from(e),
        }
    }
}

/// Persistence operations for people. Handlers only ever see this trait.
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    /// Every stored person, in store order.
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError>;

    /// `Ok(None)` when no person has `id`.
    async fn get_by_id(&self, id: &str) -> Result<Option<Person>, RepositoryError>;

    /// Inserts `person` under a freshly generated id and returns the stored record.
    async fn create(&self, person: Person) -> Result<Person, RepositoryError>;

    /// Overwrites the record keyed by `person.id`. Returns whether a record matched.
    async fn replace(&self, person: Person) -> Result<bool, RepositoryError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError>;

    async fn health_check(&self) -> Result<(), RepositoryError>;
}

#[derive(Clone)]
pub struct MongoPeopleRepository {
    db: MongoDb,
}

impl MongoPeopleRepository {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }
}

fn log_store_error(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> RepositoryError {
    move |e| {
        tracing::error!(operation, error = %e, "MongoDB operation on people failed");
        RepositoryError::Store(e)
    }
}

#[async_trait]
impl PeopleRepository for MongoPeopleRepository {
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let cursor = self
            .db
            .people()
            .find(doc! {}, None)
            .await
            .map_err(log_store_error("find"))?;

        let docs: Vec<PersonDocument> = cursor
            .try_collect()
            .await
            .map_err(log_store_error("find"))?;

        tracing::debug!(count = docs.len(), "Listed people");
        Ok(docs.into_iter().map(Person::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Person>, RepositoryError> {
        let oid = parse_person_id(id)?;
        let found = self
            .db
            .people()
            .find_one(doc! { "_id": oid }, None)
            .await
            .map_err(log_store_error("find_one"))?;

        tracing::debug!(person_id = %id, found = found.is_some(), "Looked up person");
        Ok(found.map(Person::from))
    }

    async fn create(&self, person: Person) -> Result<Person, RepositoryError> {
        let record = PersonDocument::with_id(ObjectId::new(), person);
        self.db
            .people()
            .insert_one(&record, None)
            .await
            .map_err(log_store_error("insert_one"))?;

        tracing::info!(person_id = %record.id, "Created person");
        Ok(Person::from(record))
    }

    async fn replace(&self, person: Person) -> Result<bool, RepositoryError> {
        let record = PersonDocument::try_from(person)?;
        let result = self
            .db
            .people()
            .replace_one(doc! { "_id": record.id }, &record, None)
            .await
            .map_err(log_store_error("replace_one"))?;

        tracing::info!(
            person_id = %record.id,
            matched = result.matched_count,
            "Replaced person"
        );
        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_person_id(id)?;
        let result = self
            .db
            .people()
            .delete_one(doc! { "_id": oid }, None)
            .await
            .map_err(log_store_error("delete_one"))?;

        tracing::info!(person_id = %id, deleted = result.deleted_count, "Deleted person");
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.db.ping().await.map_err(log_store_error("ping"))
    }
}
