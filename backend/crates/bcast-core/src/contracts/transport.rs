use crate::{DeliveryResult, Payload, RecipientId};

use async_trait::async_trait;

/// Channel through which a payload reaches a single recipient.
///
/// Implementations report failures through [`DeliveryResult`] instead of
/// returning errors, so every attempt has a classifiable result.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, recipient: RecipientId, payload: &Payload) -> DeliveryResult;
}
