use crate::replies;

use bcast_engine::CancelAffordance;
use bcast_telegram::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup, ReplyMarkup,
};

/// Callback data of the admin panel button that starts a broadcast.
pub const START_BROADCAST_ACTION: &str = "broadcast";

pub fn admin_panel() -> ReplyMarkup {
    InlineKeyboardMarkup::single_column([InlineKeyboardButton::callback(
        replies::SEND_BROADCAST_BUTTON,
        START_BROADCAST_ACTION,
    )])
    .into()
}

pub fn cancel_button(affordance: &CancelAffordance) -> ReplyMarkup {
    InlineKeyboardMarkup::single_column([InlineKeyboardButton::callback(
        replies::CANCEL_BUTTON,
        affordance.action,
    )])
    .into()
}

/// Reply keyboard opening the web app for one user.
pub fn web_app(base_url: &str, user_id: i64) -> ReplyMarkup {
    ReplyKeyboardMarkup {
        keyboard: vec![vec![KeyboardButton::web_app(
            replies::WEB_APP_BUTTON,
            format!("{base_url}?telegram_id={user_id}"),
        )]],
        resize_keyboard: true,
    }
    .into()
}
