use crate::TelegramClient;

use bcast_core::{CoreError, NoticeId, Notifier, OperatorId, Result as CoreResult};

use async_trait::async_trait;

/// Operators talk to the bot in private chats, so the operator id is the chat id.
#[async_trait]
impl Notifier for TelegramClient {
    async fn notify(&self, operator: OperatorId, text: &str) -> CoreResult<NoticeId> {
        let message = self
            .send_message(operator.get(), text, None)
            .await
            .map_err(|e| CoreError::notification_failed(e.diagnostic()))?;

        Ok(NoticeId(message.message_id))
    }

    async fn edit(&self, operator: OperatorId, notice: NoticeId, text: &str) -> CoreResult<()> {
        self.edit_message_text(operator.get(), notice.0, text)
            .await
            .map_err(|e| CoreError::notification_failed(e.diagnostic()))
    }
}
