use crate::common::{ConversationSentiment, Message, ScoredMessage, Sentiment};

/// Placeholder shown in the sentiment list while it is empty.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No messages yet. Start chatting!";

/// Local UI state for one chat session.
pub struct AppState {
    /// Bubble transcript, oldest first.
    pub messages: Vec<Message>,
    /// Acknowledged user messages, newest first.
    pub scored_messages: Vec<ScoredMessage>,
    /// `Some` while the summary panel is visible.
    pub summary: Option<ConversationSentiment>,
    pub input_text: String,
    /// Sends still waiting for the backend; the Send button is disabled while non-zero.
    pub pending_sends: usize,
    /// Cleared once the input field has taken focus on startup.
    pub focus_input: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            scored_messages: Vec::new(),
            summary: None,
            input_text: String::new(),
            pending_sends: 0,
            focus_input: true,
        }
    }

    pub fn send_enabled(&self) -> bool {
        self.pending_sends == 0
    }

    /// Takes the trimmed input for sending. Renders the user bubble, clears
    /// the input and marks a send in flight. Blank input is left untouched.
    pub fn begin_send(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() {
            return None;
        }

        let text = text.to_string();
        self.messages.push(Message::user(text.clone()));
        self.input_text.clear();
        self.pending_sends += 1;
        Some(text)
    }

    pub fn apply_reply(&mut self, text: String, reply: String, sentiment: Sentiment) {
        self.messages.push(Message::bot(reply));
        self.scored_messages.insert(0, ScoredMessage { text, sentiment });
        self.finish_send();
    }

    /// The message stays in the transcript but gets no sentiment entry.
    pub fn apply_send_failure(&mut self, notice: String) {
        self.messages.push(Message::bot(notice));
        self.finish_send();
    }

    fn finish_send(&mut self) {
        self.pending_sends = self.pending_sends.saturating_sub(1);
    }

    pub fn show_summary(&mut self, summary: ConversationSentiment) {
        self.summary = Some(summary);
    }

    /// Clears every view. Sends still in flight keep the button state they own.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.scored_messages.clear();
        self.summary = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
