pub mod error;
pub mod operator_allow_list;
pub mod webhook_secret;

pub use error::{AuthError, Result};
pub use operator_allow_list::OperatorAllowList;
pub use webhook_secret::{WEBHOOK_SECRET_HEADER, WebhookSecret};

#[cfg(test)]
mod tests;
