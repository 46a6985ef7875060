use bcast_core::{DeliveryResult, Payload, RecipientId, Transport};

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Transport that records every call and answers from a script.
///
/// Unscripted recipients are accepted. With a gate, each delivery waits for a
/// semaphore permit so tests can hold a dispatch mid-flight.
#[derive(Default)]
pub struct FakeTransport {
    script: HashMap<RecipientId, DeliveryResult>,
    calls: Mutex<Vec<RecipientId>>,
    attempted_at: Mutex<Vec<Instant>>,
    gate: Option<std::sync::Arc<Semaphore>>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(mut self, recipient: i64, result: DeliveryResult) -> Self {
        self.script.insert(RecipientId(recipient), result);
        self
    }

    pub fn gated(mut self, gate: std::sync::Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Trip `token` once this many deliveries have completed
    pub fn cancelling_after(mut self, deliveries: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((deliveries, token));
        self
    }

    pub fn calls(&self) -> Vec<RecipientId> {
        self.calls.lock().unwrap().clone()
    }

    /// Time each delivery reached the transport, in call order
    pub fn attempt_times(&self) -> Vec<Instant> {
        self.attempted_at.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn deliver(&self, recipient: RecipientId, _payload: &Payload) -> DeliveryResult {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        self.attempted_at.lock().unwrap().push(Instant::now());

        let made = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(recipient);
            calls.len()
        };

        if let Some((after, token)) = &self.cancel_after
            && made >= *after
        {
            token.cancel();
        }

        self.script
            .get(&recipient)
            .cloned()
            .unwrap_or(DeliveryResult::Accepted)
    }
}
