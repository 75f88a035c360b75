mod error;
mod operations;
mod types;

pub use error::PersonError;
pub use operations::validate_person;
pub use types::{NewPerson, Person};
