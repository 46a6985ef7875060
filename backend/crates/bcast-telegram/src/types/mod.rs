//! Subset of the Bot API wire format the bot reads and writes.

pub(crate) mod api_response;
pub mod callback_query;
pub mod chat;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod update;
pub mod user;

pub use callback_query::CallbackQuery;
pub use chat::Chat;
pub use keyboard::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup, ReplyMarkup,
    WebAppInfo,
};
pub use media::{FileRef, PhotoSize};
pub use message::Message;
pub use update::Update;
pub use user::User;
