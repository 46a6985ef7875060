pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod notifier;
pub(crate) mod transport;
pub mod types;

pub use client::TelegramClient;
pub use error::{FORBIDDEN_ERROR_CODE, Result as TelegramResult, TelegramError};
pub use types::{
    CallbackQuery, Chat, FileRef, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    Message, PhotoSize, ReplyKeyboardMarkup, ReplyMarkup, Update, User, WebAppInfo,
};
