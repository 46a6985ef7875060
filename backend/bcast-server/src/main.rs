use bcast_auth::{OperatorAllowList, WebhookSecret};
use bcast_config::Config;
use bcast_core::{Notifier, RecipientDirectory, Transport};
use bcast_db::{DEFAULT_MAX_CONNECTIONS, RecipientRepository, open_pool, run_migrations};
use bcast_engine::{DispatchConfig, DispatchMetrics, Dispatcher, SessionManager};
use bcast_server::{AppState, ShutdownCoordinator, build_router, keep_alive, logger};
use bcast_telegram::TelegramClient;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

const DISPATCH_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside local development
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting bcast-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening recipient database: {}", database_path.display());
    let pool = open_pool(&database_path, DEFAULT_MAX_CONNECTIONS).await?;
    run_migrations(&pool).await?;
    let recipients = RecipientRepository::new(pool);

    let client = TelegramClient::from_config(&config.telegram)?;

    let metrics = DispatchMetrics::new();
    let transport: Arc<dyn Transport> = Arc::new(client.clone());
    let notifier: Arc<dyn Notifier> = Arc::new(client.clone());
    let directory: Arc<dyn RecipientDirectory> = Arc::new(recipients.clone());
    let dispatcher = Arc::new(Dispatcher::new(
        transport,
        Arc::clone(&notifier),
        DispatchConfig::from(&config.broadcast),
        metrics.clone(),
    ));

    let allow_list = OperatorAllowList::new(config.broadcast.operators.iter().copied());
    info!("{} operator(s) may broadcast", allow_list.len());

    let sessions = SessionManager::new(allow_list, directory, dispatcher, notifier, metrics);
    let webhook_secret = WebhookSecret::new(config.telegram.webhook_secret.as_deref());
    if !webhook_secret.is_enabled() {
        warn!("Webhook secret not configured - any caller can post updates");
    }

    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState {
        sessions: sessions.clone(),
        recipients,
        client: client.clone(),
        webhook_secret,
        webhook_path: config.telegram.webhook_path.clone(),
        web_app_url: config.telegram.web_app_url.clone(),
        shutdown: shutdown.clone(),
    };

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Listener must be bound before the webhook is registered
    match config.webhook_url() {
        Some(url) => {
            match client
                .set_webhook(&url, config.telegram.webhook_secret.as_deref())
                .await
            {
                Ok(_) => info!("Webhook registered: {url}"),
                Err(e) => error!("Failed to register webhook {url}: {e}"),
            }
        }
        None => warn!("No public URL configured, webhook not registered"),
    }

    let keep_alive_task = config.keep_alive_url().map(|url| {
        keep_alive::spawn(
            url,
            Duration::from_secs(config.keep_alive.interval_secs),
            &shutdown,
        )
    });

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {e}");
            }
        }
    });

    info!("Server ready to accept updates");
    let mut server_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { server_guard.wait().await })
        .await?;

    let signalled = sessions.cancel_all();
    if signalled > 0 {
        info!("Cancelled {signalled} running dispatch(es)");
        drain_dispatches(&sessions, DISPATCH_DRAIN_TIMEOUT).await;
    }

    if let Some(task) = keep_alive_task {
        let _ = task.await;
    }

    info!("Graceful shutdown complete");
    Ok(())
}

/// Give cancelled dispatches a moment to post their final notice.
async fn drain_dispatches(sessions: &SessionManager, timeout: Duration) {
    let deadline = tokio::time::Instant::now() + timeout;
    while sessions.active_dispatches() > 0 {
        if tokio::time::Instant::now() >= deadline {
            warn!(
                "{} dispatch(es) still running at shutdown",
                sessions.active_dispatches()
            );
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
