use crate::ShutdownCoordinator;

use bcast_auth::WebhookSecret;
use bcast_db::RecipientRepository;
use bcast_engine::SessionManager;
use bcast_telegram::TelegramClient;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub recipients: RecipientRepository,
    pub client: TelegramClient,
    pub webhook_secret: WebhookSecret,
    /// Path the Bot API posts updates to
    pub webhook_path: String,
    /// Web app opened from the keyboard shown to regular users
    pub web_app_url: Option<String>,
    pub shutdown: ShutdownCoordinator,
}
