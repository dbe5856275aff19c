use super::types::{ConversationSentiment, Sentiment};

/// Results the API worker reports back to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    /// The backend acknowledged `text` and answered with `reply`.
    ReplyReceived {
        text: String,
        reply: String,
        sentiment: Sentiment,
    },
    /// A send failed; `notice` is the bubble shown in place of a reply.
    SendFailed { text: String, notice: String },
    /// The backend returned the end-of-conversation summary.
    ConversationEnded(ConversationSentiment),
}
