use std::borrow::Cow;

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Number of characters shown for a message in the sentiment list.
pub const PREVIEW_CHARS: usize = 60;

/// Label used when the server gives no usable sentiment.
pub const NEUTRAL_LABEL: &str = "Neutral";

/// Who a transcript bubble belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text)
    }
}

/// Sentiment the backend attached to one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            label: NEUTRAL_LABEL.to_string(),
            score: None,
        }
    }

    /// Reads a `user_sentiment` value leniently: anything without a
    /// non-empty string `label` becomes [`Sentiment::neutral`]. The label
    /// and score are read independently, so a bad score never hides a label.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(label) = value.and_then(|value| label_of(value.get("label"))) else {
            return Sentiment::neutral();
        };
        Self {
            label,
            score: value.and_then(|value| value.get("score")).and_then(Value::as_f64),
        }
    }

    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_label(&self.label)
    }
}

/// Visual bucket a label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Unknown and missing labels are neutral, never an error.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Positive" => Self::Positive,
            "Negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Aggregate sentiment for the whole conversation, computed server side.
/// Wrongly typed or null fields degrade to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSentiment {
    #[serde(default = "neutral_label", deserialize_with = "lenient_label")]
    pub label: String,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub score_avg: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub trend: Option<String>,
}

fn neutral_label() -> String {
    NEUTRAL_LABEL.to_string()
}

fn label_of(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
}

fn lenient_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(label_of(value.as_ref()).unwrap_or_else(neutral_label))
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_f64))
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(Value::as_str)
        .map(str::to_string))
}

impl ConversationSentiment {
    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_label(&self.label)
    }

    pub fn score_text(&self) -> String {
        format!("Average score: {:.3}", self.score_avg.unwrap_or(0.0))
    }
}

/// An acknowledged user message together with its sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMessage {
    pub text: String,
    pub sentiment: Sentiment,
}

impl ScoredMessage {
    pub fn preview(&self) -> Cow<'_, str> {
        preview(&self.text)
    }
}

/// First [`PREVIEW_CHARS`] characters of `text`, with `...` appended when cut.
pub fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn category_falls_back_to_neutral() {
        assert_eq!(
            SentimentCategory::from_label("Positive"),
            SentimentCategory::Positive
        );
        assert_eq!(
            SentimentCategory::from_label("Negative"),
            SentimentCategory::Negative
        );
        assert_eq!(
            SentimentCategory::from_label("Neutral"),
            SentimentCategory::Neutral
        );
        assert_eq!(
            SentimentCategory::from_label("positive"),
            SentimentCategory::Neutral
        );
        assert_eq!(SentimentCategory::from_label(""), SentimentCategory::Neutral);
    }

    #[test]
    fn sentiment_keeps_server_label() {
        let value = json!({ "label": "Positive", "score": 0.8 });
        let sentiment = Sentiment::from_value(Some(&value));
        assert_eq!(sentiment.label, "Positive");
        assert_eq!(sentiment.score, Some(0.8));
    }

    #[test]
    fn sentiment_defaults_to_neutral_when_unusable() {
        let cases = [
            None,
            Some(json!(null)),
            Some(json!("Positive")),
            Some(json!({ "score": 0.4 })),
            Some(json!({ "label": "" })),
            Some(json!({ "label": 3 })),
        ];
        for value in &cases {
            assert_eq!(Sentiment::from_value(value.as_ref()), Sentiment::neutral());
        }
    }

    #[test]
    fn bad_score_keeps_label() {
        for score in [json!("0.8"), json!({ "value": 0.8 }), json!(null)] {
            let value = json!({ "label": "Positive", "score": score });
            let sentiment = Sentiment::from_value(Some(&value));
            assert_eq!(sentiment.label, "Positive");
            assert_eq!(sentiment.score, None);
        }
    }

    #[test]
    fn unknown_label_is_rendered_verbatim_but_neutral() {
        let value = json!({ "label": "Mixed" });
        let sentiment = Sentiment::from_value(Some(&value));
        assert_eq!(sentiment.label, "Mixed");
        assert_eq!(sentiment.category(), SentimentCategory::Neutral);
    }

    #[test]
    fn preview_truncates_after_sixty_chars() {
        let short = "a".repeat(60);
        assert_eq!(preview(&short), short.as_str());

        let long = "b".repeat(61);
        assert_eq!(preview(&long), format!("{}...", "b".repeat(60)));

        assert_eq!(preview(""), "");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(61);
        let cut = preview(&text);
        assert_eq!(cut.chars().count(), 63);
        assert!(cut.ends_with("é..."));
    }

    #[test]
    fn score_text_uses_three_decimals() {
        let summary = ConversationSentiment {
            label: "Positive".into(),
            score_avg: Some(0.8),
            trend: None,
        };
        assert_eq!(summary.score_text(), "Average score: 0.800");

        let summary = ConversationSentiment {
            score_avg: None,
            ..summary
        };
        assert_eq!(summary.score_text(), "Average score: 0.000");
    }

    #[test]
    fn conversation_sentiment_tolerates_missing_fields() {
        let parsed: ConversationSentiment =
            serde_json::from_value(json!({ "score_avg": -0.25 })).unwrap();
        assert_eq!(parsed.label, "Neutral");
        assert_eq!(parsed.score_text(), "Average score: -0.250");
    }

    #[test]
    fn conversation_sentiment_tolerates_wrong_types() {
        let parsed: ConversationSentiment =
            serde_json::from_value(json!({ "label": null, "score_avg": 0.5 })).unwrap();
        assert_eq!(parsed.label, "Neutral");
        assert_eq!(parsed.score_avg, Some(0.5));

        let parsed: ConversationSentiment = serde_json::from_value(json!({
            "label": 7,
            "score_avg": "high",
            "trend": ["Stable"]
        }))
        .unwrap();
        assert_eq!(parsed.label, "Neutral");
        assert_eq!(parsed.score_text(), "Average score: 0.000");
        assert_eq!(parsed.trend, None);

        let parsed: ConversationSentiment =
            serde_json::from_value(json!({ "label": "Negative", "score_avg": null })).unwrap();
        assert_eq!(parsed.category(), SentimentCategory::Negative);
        assert_eq!(parsed.score_avg, None);
    }
}
