pub mod commands;
pub mod events;
pub mod types;

pub use commands::ApiCommand;
pub use events::ApiEvent;
pub use types::{ConversationSentiment, Message, Role, ScoredMessage, Sentiment, SentimentCategory};
