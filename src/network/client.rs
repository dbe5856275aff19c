use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::api::{ApiClient, Reply};
use super::error::ApiError;

/// Background task bridging UI commands to the HTTP backend.
pub struct ChatWorker {
    api: ApiClient,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ChatWorker {
    pub fn new(
        api: ApiClient,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            api,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender. Each command gets its own
    /// task, so send, end and reset requests may overlap.
    pub async fn run(mut self) {
        log::info!("API worker started against {}", self.api.base_url());

        while let Some(command) = self.command_receiver.recv().await {
            let api = self.api.clone();
            let event_sender = self.event_sender.clone();
            tokio::spawn(async move {
                if let Some(event) = handle_command(&api, command).await {
                    if let Err(err) = event_sender.send(event).await {
                        log::warn!("Failed to notify UI: {err}");
                    }
                }
            });
        }

        log::info!("API worker stopped");
    }
}

async fn handle_command(api: &ApiClient, command: ApiCommand) -> Option<ApiEvent> {
    match command {
        ApiCommand::SendMessage(text) => {
            let result = api.send_message(&text).await;
            Some(send_outcome(text, result))
        }
        ApiCommand::EndConversation => match api.end_conversation().await {
            Ok(summary) => Some(ApiEvent::ConversationEnded(summary)),
            Err(err) => {
                log_failure("Error ending conversation", &err);
                None
            }
        },
        ApiCommand::Reset => {
            if let Err(err) = api.reset().await {
                log_failure("Error resetting", &err);
            }
            None
        }
    }
}

/// Maps the result of a send to the event the UI renders.
pub fn send_outcome(text: String, result: Result<Reply, ApiError>) -> ApiEvent {
    match result {
        Ok(Reply { reply, sentiment }) => ApiEvent::ReplyReceived {
            text,
            reply,
            sentiment,
        },
        Err(err) => {
            log_failure("Error sending message", &err);
            ApiEvent::SendFailed {
                text,
                notice: err.user_notice().to_string(),
            }
        }
    }
}

fn log_failure(context: &str, err: &ApiError) {
    match err.body() {
        Some(body) => log::error!("{context}: {err}; response body: {body}"),
        None => log::error!("{context}: {err}"),
    }
}
