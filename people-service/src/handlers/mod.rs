pub mod health;
pub mod people;

pub use health::health_check;
pub use people::{create_person, delete_person, get_person, list_people, update_person};
