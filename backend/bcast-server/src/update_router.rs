use crate::error::Result as ServerErrorResult;
use crate::{AppState, keyboards, replies};

use bcast_core::{OperatorId, RecipientDirectory};
use bcast_engine::{CANCEL_BROADCAST_ACTION, CancelOutcome, EngineError, SessionState};
use bcast_telegram::{CallbackQuery, Message, ReplyMarkup, Update};

use log::{debug, info, warn};

/// Route one inbound update to the session engine and reply to the sender.
pub async fn route_update(state: &AppState, update: Update) -> ServerErrorResult<()> {
    if let Some(callback) = update.callback_query {
        return handle_callback(state, callback).await;
    }

    match update.message {
        Some(message) => handle_message(state, message).await,
        None => {
            debug!("Ignoring update {} with no message or callback", update.update_id);
            Ok(())
        }
    }
}

async fn handle_message(state: &AppState, message: Message) -> ServerErrorResult<()> {
    let chat_id = message.chat.id;
    let sender = message.sender_id();
    let operator = OperatorId(sender);
    let is_operator = state.sessions.is_operator(operator);

    if matches!(message.command(), Some("start" | "help")) {
        if let Some(ref user) = message.from
            && let Err(e) = state.recipients.upsert_recipient(&user.profile()).await
        {
            warn!("Failed to record recipient {}: {e}", user.id);
        }

        return if is_operator {
            reply(state, chat_id, replies::ADMIN_PANEL, Some(keyboards::admin_panel())).await
        } else {
            reply(state, chat_id, replies::GREETING, None).await
        };
    }

    if is_operator && state.sessions.state(operator) == SessionState::AwaitingPayload {
        let payload = message.payload();
        return match state.sessions.submit_payload(operator, payload).await {
            Ok(handle) => {
                info!(
                    "Dispatch {} started for operator {operator}",
                    handle.dispatch_id
                );
                Ok(())
            }
            // The operator was already told the recipient list is unavailable
            Err(EngineError::DirectoryUnavailable { .. }) => Ok(()),
            Err(e) => {
                warn!("Broadcast submit rejected for operator {operator}: {e}");
                reply(state, chat_id, replies::BROADCAST_FAILED, None).await
            }
        };
    }

    if is_operator {
        reply(state, chat_id, replies::UNKNOWN_COMMAND_OPERATOR, None).await
    } else if let Some(ref web_app_url) = state.web_app_url {
        reply(
            state,
            chat_id,
            replies::UNKNOWN_COMMAND_WITH_MENU,
            Some(keyboards::web_app(web_app_url, sender)),
        )
        .await
    } else {
        reply(state, chat_id, replies::UNKNOWN_COMMAND, None).await
    }
}

async fn handle_callback(state: &AppState, callback: CallbackQuery) -> ServerErrorResult<()> {
    let operator = OperatorId(callback.from.id);
    let chat_id = callback
        .message
        .as_ref()
        .map_or(callback.from.id, |message| message.chat.id);

    let result = match callback.data.as_deref() {
        Some(keyboards::START_BROADCAST_ACTION) => {
            start_broadcast(state, operator, chat_id).await
        }
        Some(CANCEL_BROADCAST_ACTION) => cancel_broadcast(state, operator, chat_id).await,
        other => {
            debug!("Ignoring callback {other:?} from {operator}");
            Ok(())
        }
    };

    // Always acknowledge so the client stops its loading indicator
    if let Err(e) = state.client.answer_callback_query(&callback.id, None).await {
        warn!("Failed to answer callback {}: {e}", callback.id);
    }

    result
}

async fn start_broadcast(
    state: &AppState,
    operator: OperatorId,
    chat_id: i64,
) -> ServerErrorResult<()> {
    match state.sessions.start_broadcast(operator) {
        Ok(affordance) => {
            let prompted = reply(
                state,
                chat_id,
                replies::BROADCAST_PROMPT,
                Some(keyboards::cancel_button(&affordance)),
            )
            .await;

            // An operator who never saw the prompt must not have the next message broadcast
            if prompted.is_err()
                && let Err(e) = state.sessions.cancel(operator)
            {
                warn!("Failed to roll back broadcast session for {operator}: {e}");
            }

            prompted
        }
        Err(e) => reply(state, chat_id, rejection_text(&e), None).await,
    }
}

async fn cancel_broadcast(
    state: &AppState,
    operator: OperatorId,
    chat_id: i64,
) -> ServerErrorResult<()> {
    let text = match state.sessions.cancel(operator) {
        Ok(CancelOutcome::Abandoned) => replies::BROADCAST_ABANDONED,
        Ok(CancelOutcome::Signalled) => replies::BROADCAST_STOPPING,
        Err(e) => rejection_text(&e),
    };

    reply(state, chat_id, text, None).await
}

fn rejection_text(err: &EngineError) -> &'static str {
    match err {
        EngineError::Unauthorized { .. } => replies::NOT_ALLOWED,
        EngineError::AlreadyActive { .. } => replies::ALREADY_ACTIVE,
        EngineError::NothingToCancel { .. } => replies::NOTHING_TO_CANCEL,
        _ => replies::BROADCAST_FAILED,
    }
}

async fn reply(
    state: &AppState,
    chat_id: i64,
    text: &str,
    markup: Option<ReplyMarkup>,
) -> ServerErrorResult<()> {
    state
        .client
        .send_message(chat_id, text, markup.as_ref())
        .await?;
    Ok(())
}
