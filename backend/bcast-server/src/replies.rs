//! Texts the bot sends in response to updates.

pub const ADMIN_PANEL: &str = "Admin panel:";
pub const GREETING: &str = "Welcome!\nUse the button below to get started.";
pub const BROADCAST_PROMPT: &str = "Send the message you want to broadcast to all users:";
pub const ALREADY_ACTIVE: &str =
    "A broadcast is already in progress. Cancel it or wait for it to finish.";
pub const NOT_ALLOWED: &str = "You are not allowed to send broadcasts.";
pub const BROADCAST_ABANDONED: &str = "Broadcast cancelled.";
pub const BROADCAST_STOPPING: &str = "Stopping the broadcast...";
pub const NOTHING_TO_CANCEL: &str = "There is no broadcast to cancel.";
pub const BROADCAST_FAILED: &str = "The broadcast could not be started. Please try again.";
pub const UNKNOWN_COMMAND_OPERATOR: &str = "Unknown command! Press /start for the admin panel.";
pub const UNKNOWN_COMMAND_WITH_MENU: &str =
    "Unknown command! Pick a button from the menu or press /start.";
pub const UNKNOWN_COMMAND: &str = "Unknown command! Please press /start.";

pub const SEND_BROADCAST_BUTTON: &str = "Send broadcast";
pub const CANCEL_BUTTON: &str = "Cancel";
pub const WEB_APP_BUTTON: &str = "Open the shop";
