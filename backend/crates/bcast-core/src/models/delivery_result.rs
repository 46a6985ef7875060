/// What the transport reported for a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    Accepted,
    /// The recipient blocked the bot or otherwise revoked the channel.
    RecipientBlocked,
    Error(String),
}
