//! Periodic self-ping that keeps free-tier hosts from idling the service.

use crate::ShutdownCoordinator;

use std::time::Duration;

use log::{debug, info};
use reqwest::Client as ReqwestClient;
use tokio::task::JoinHandle;

const PING_TIMEOUT: Duration = Duration::from_secs(10);

/// GET `url` every `interval` until shutdown. The first ping goes out immediately.
pub fn spawn(url: String, interval: Duration, shutdown: &ShutdownCoordinator) -> JoinHandle<()> {
    let mut guard = shutdown.subscribe_guard();

    tokio::spawn(async move {
        let client = match ReqwestClient::builder().timeout(PING_TIMEOUT).build() {
            Ok(client) => client,
            Err(e) => {
                debug!("Keep-alive disabled, HTTP client unavailable: {e}");
                return;
            }
        };

        info!("Keep-alive pinging {url} every {}s", interval.as_secs());
        let mut ticker = tokio::time::interval(interval);

        loop {
            tokio::select! {
                _ = guard.wait() => break,
                _ = ticker.tick() => {
                    ping(&client, &url).await;
                }
            }
        }

        debug!("Keep-alive stopped");
    })
}

/// One ping. Failures are expected while the host wakes up and only logged at debug.
pub async fn ping(client: &ReqwestClient, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            debug!("Keep-alive ping to {url} returned {}", response.status());
            false
        }
        Err(e) => {
            debug!("Keep-alive ping to {url} failed: {e}");
            false
        }
    }
}
