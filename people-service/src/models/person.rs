use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::services::RepositoryError;

/// A person as it travels over HTTP. `id` is the hex form of the store's
/// ObjectId and is absent until the record has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "65f1c0a2b3d4e5f6a7b8c9d0")]
    pub id: Option<String>,
    #[schema(example = "Ada")]
    pub name: String,
    #[serde(deserialize_with = "age_in_store_range")]
    #[schema(example = 30)]
    pub age: u32,
    #[serde(rename = "phonenumbers", default, deserialize_with = "null_as_empty")]
    pub phone_numbers: Vec<String>,
}

/// A person as stored in the `people` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(serialize_with = "mongodb::bson::serde_helpers::serialize_u32_as_i32")]
    pub age: u32,
    #[serde(rename = "phonenumbers", default, deserialize_with = "null_as_empty")]
    pub phone_numbers: Vec<String>,
}

/// The collection holds `age` as Int32.
fn age_in_store_range<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let age = u32::deserialize(deserializer)?;
    if i32::try_from(age).is_err() {
        return Err(serde::de::Error::custom(format!(
            "age {} exceeds {}",
            age,
            i32::MAX
        )));
    }
    Ok(age)
}

// Older writers store an omitted phone list as null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses a wire id into an ObjectId.
pub fn parse_person_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

impl PersonDocument {
    /// Builds the stored form of `person` under `id`, discarding whatever id
    /// the person carried.
    pub fn with_id(id: ObjectId, person: Person) -> Self {
        Self {
            id,
            name: person.name,
            age: person.age,
            phone_numbers: person.phone_numbers,
        }
    }
}

impl TryFrom<Person> for PersonDocument {
    type Error = RepositoryError;

    fn try_from(person: Person) -> Result<Self, Self::Error> {
        let id = match person.id.as_deref() {
            Some(id) => parse_person_id(id)?,
            None => return Err(RepositoryError::MissingId),
        };
        Ok(Self::with_id(id, person))
    }
}

impl From<PersonDocument> for Person {
    fn from(doc: PersonDocument) -> Self {
        Self {
            id: Some(doc.id.to_hex()),
            name: doc.name,
            age: doc.age,
            phone_numbers: doc.phone_numbers,
        }
    }
}
