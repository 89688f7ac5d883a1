use crate::models::person::parse_person_id;
use crate::models::{Person, PersonDocument};
use crate::services::{PeopleRepository, RepositoryError};
use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

/// In-process stand-in for the MongoDB repository. Same id rules, same
/// not-found behavior, no persistence.
#[derive(Clone, Default)]
pub struct InMemoryPeopleRepository {
    people: Arc<DashMap<ObjectId, PersonDocument>>,
}

impl InMemoryPeopleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[async_trait]
impl PeopleRepository for InMemoryPeopleRepository {
    async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self
            .people
            .iter()
            .map(|entry| Person::from(entry.value().clone()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Person>, RepositoryError> {
        let oid = parse_person_id(id)?;
        Ok(self
            .people
            .get(&oid)
            .map(|entry| Person::from(entry.value().clone())))
    }

    async fn create(&self, person: Person) -> Result<Person, RepositoryError> {
        let record = PersonDocument::with_id(ObjectId::new(), person);
        self.people.insert(record.id, record.clone());
        Ok(Person::from(record))
    }

    async fn replace(&self, person: Person) -> Result<bool, RepositoryError> {
        let record = PersonDocument::try_from(person)?;
        match self.people.get_mut(&record.id) {
            Some(mut existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_person_id(id)?;
        Ok(self.people.remove(&oid).is_some())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
