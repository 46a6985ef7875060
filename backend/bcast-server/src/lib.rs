pub mod app_state;
pub mod error;
pub mod health;
pub mod keep_alive;
pub mod keyboards;
pub mod logger;
pub mod replies;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod update_router;
pub mod webhook;

pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
