mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{person_error_to_status_code, repository_error_to_status_code};
pub use traits::PersonRepository;
pub use types::PersonSelector;
