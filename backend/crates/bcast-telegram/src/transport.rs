use crate::TelegramClient;

use bcast_core::{DeliveryResult, Payload, RecipientId, Transport};

use async_trait::async_trait;
use log::debug;

#[async_trait]
impl Transport for TelegramClient {
    async fn deliver(&self, recipient: RecipientId, payload: &Payload) -> DeliveryResult {
        match self.send_payload(recipient.get(), payload).await {
            Ok(_) => DeliveryResult::Accepted,
            Err(e) if e.is_recipient_blocked() => {
                debug!("Recipient {recipient} refused delivery: {}", e.diagnostic());
                DeliveryResult::RecipientBlocked
            }
            Err(e) => DeliveryResult::Error(e.diagnostic()),
        }
    }
}
