pub mod database;
pub mod memory;
pub mod repository;

pub use database::MongoDb;
pub use memory::InMemoryPeopleRepository;
pub use repository::{MongoPeopleRepository, PeopleRepository, RepositoryError};
