/// Requests the UI hands to the API worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// Post an already trimmed, non-empty user message.
    SendMessage(String),
    /// Ask the backend for the aggregate conversation sentiment.
    EndConversation,
    /// Clear the backend's conversation state. The UI clears itself.
    Reset,
}
