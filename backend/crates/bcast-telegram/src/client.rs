use crate::error::{Result as TelegramResult, TelegramError};
use crate::types::api_response::ApiResponse;
use crate::{Message, ReplyMarkup};

use bcast_config::TelegramConfig;
use bcast_core::Payload;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the Telegram Bot API.
///
/// The bot token is part of every request path and is never logged.
#[derive(Clone)]
pub struct TelegramClient {
    base_url: String,
    client: ReqwestClient,
}

impl TelegramClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_base_url` - Bot API root (e.g., "https://api.telegram.org")
    /// * `bot_token` - Token issued by BotFather
    /// * `timeout` - Per-request timeout
    pub fn new(api_base_url: &str, bot_token: &str, timeout: Duration) -> TelegramResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: format!("{}/bot{}", api_base_url.trim_end_matches('/'), bot_token),
            client,
        })
    }

    #[track_caller]
    pub fn from_config(config: &TelegramConfig) -> TelegramResult<Self> {
        let token = config
            .bot_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| TelegramError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            })?;

        Self::new(
            &config.api_base_url,
            token,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Call a Bot API method and unwrap the response envelope
    async fn call<B, T>(&self, method: &str, body: &B) -> TelegramResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: ApiResponse<T> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(TelegramError::from_json(e)),
            // Proxies and gateways answer with non-JSON bodies
            Err(_) => {
                return Err(TelegramError::api_error(
                    i64::from(status.as_u16()),
                    status.canonical_reason().unwrap_or("Unknown error").to_string(),
                    None,
                ));
            }
        };

        match envelope {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                error_code,
                description,
                parameters,
                ..
            } => {
                let code = error_code.unwrap_or_else(|| i64::from(status.as_u16()));
                debug!("Bot API {method} failed with {code}");
                Err(TelegramError::api_error(
                    code,
                    description.unwrap_or_else(|| String::from("Unknown error")),
                    parameters.and_then(|p| p.retry_after),
                ))
            }
        }
    }

    // =========================================================================
    // Messages
    // =========================================================================

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&ReplyMarkup>,
    ) -> TelegramResult<Message> {
        #[derive(Serialize)]
        struct SendMessage<'a> {
            chat_id: i64,
            text: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            reply_markup: Option<&'a ReplyMarkup>,
        }

        self.call(
            "sendMessage",
            &SendMessage {
                chat_id,
                text,
                reply_markup,
            },
        )
        .await
    }

    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
    ) -> TelegramResult<()> {
        #[derive(Serialize)]
        struct EditMessageText<'a> {
            chat_id: i64,
            message_id: i64,
            text: &'a str,
        }

        // Result is the edited Message, or `true` for inline messages
        let _: serde_json::Value = self
            .call(
                "editMessageText",
                &EditMessageText {
                    chat_id,
                    message_id,
                    text,
                },
            )
            .await?;
        Ok(())
    }

    // =========================================================================
    // Media (re-sent by file id)
    // =========================================================================

    pub async fn send_photo(
        &self,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> TelegramResult<Message> {
        self.send_media("sendPhoto", "photo", chat_id, file_id, caption).await
    }

    pub async fn send_video(
        &self,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> TelegramResult<Message> {
        self.send_media("sendVideo", "video", chat_id, file_id, caption).await
    }

    pub async fn send_video_note(&self, chat_id: i64, file_id: &str) -> TelegramResult<Message> {
        self.send_media("sendVideoNote", "video_note", chat_id, file_id, None).await
    }

    pub async fn send_audio(
        &self,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> TelegramResult<Message> {
        self.send_media("sendAudio", "audio", chat_id, file_id, caption).await
    }

    pub async fn send_document(
        &self,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> TelegramResult<Message> {
        self.send_media("sendDocument", "document", chat_id, file_id, caption).await
    }

    async fn send_media(
        &self,
        method: &str,
        field: &str,
        chat_id: i64,
        file_id: &str,
        caption: Option<&str>,
    ) -> TelegramResult<Message> {
        let mut body = serde_json::Map::new();
        body.insert("chat_id".into(), chat_id.into());
        body.insert(field.into(), file_id.into());
        if let Some(caption) = caption {
            body.insert("caption".into(), caption.into());
        }

        self.call(method, &body).await
    }

    /// Send any supported payload to one chat.
    /// Unsupported payloads are refused with an error instead of a request.
    pub async fn send_payload(&self, chat_id: i64, payload: &Payload) -> TelegramResult<Message> {
        match payload {
            Payload::Text { text } => self.send_message(chat_id, text, None).await,
            Payload::Photo { file_id, caption } => {
                self.send_photo(chat_id, file_id, caption.as_deref()).await
            }
            Payload::Video { file_id, caption } => {
                self.send_video(chat_id, file_id, caption.as_deref()).await
            }
            Payload::VideoNote { file_id } => self.send_video_note(chat_id, file_id).await,
            Payload::Audio { file_id, caption } => {
                self.send_audio(chat_id, file_id, caption.as_deref()).await
            }
            Payload::Document { file_id, caption } => {
                self.send_document(chat_id, file_id, caption.as_deref()).await
            }
            Payload::Unsupported { kind } => Err(TelegramError::api_error(
                400,
                format!("{} ({kind})", bcast_core::UNSUPPORTED_PAYLOAD_REASON),
                None,
            )),
        }
    }

    // =========================================================================
    // Callbacks and webhook
    // =========================================================================

    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
    ) -> TelegramResult<bool> {
        #[derive(Serialize)]
        struct AnswerCallbackQuery<'a> {
            callback_query_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            text: Option<&'a str>,
        }

        self.call(
            "answerCallbackQuery",
            &AnswerCallbackQuery {
                callback_query_id,
                text,
            },
        )
        .await
    }

    pub async fn set_webhook(&self, url: &str, secret_token: Option<&str>) -> TelegramResult<bool> {
        #[derive(Serialize)]
        struct SetWebhook<'a> {
            url: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            secret_token: Option<&'a str>,
            allowed_updates: [&'static str; 2],
        }

        self.call(
            "setWebhook",
            &SetWebhook {
                url,
                secret_token,
                allowed_updates: ["message", "callback_query"],
            },
        )
        .await
    }
}
