pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{DEFAULT_MAX_CONNECTIONS, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::recipient_repository::RecipientRepository;
