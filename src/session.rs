//! Client-session transcript model.
//!
//! The server-side pipeline is stateless; the transcript belongs to the
//! widget/view layer and is never persisted.

use crate::models::{ChatReply, PropertyListing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One turn in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub from_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<PropertyListing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            from_user: true,
            timestamp: Utc::now(),
            recommendations: None,
            category: None,
        }
    }

    pub fn from_assistant(reply: &ChatReply) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: reply.response.clone(),
            from_user: false,
            timestamp: Utc::now(),
            recommendations: if reply.recommendations.is_empty() {
                None
            } else {
                Some(reply.recommendations.clone())
            },
            category: Some(reply.category.clone()),
        }
    }
}

/// Append-only, ordered message log for one client session.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent;

    #[test]
    fn transcript_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::from_user("hello"));
        let reply = intent::respond("hello");
        transcript.push(ChatMessage::from_assistant(&reply));

        assert_eq!(transcript.len(), 2);
        assert!(transcript.messages()[0].from_user);
        assert!(!transcript.messages()[1].from_user);
        assert_eq!(transcript.messages()[1].category.as_deref(), Some("greeting"));
    }

    #[test]
    fn assistant_message_carries_recommendations() {
        let reply = intent::respond("purple elephant");
        let message = ChatMessage::from_assistant(&reply);
        assert_eq!(message.recommendations.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn empty_recommendations_collapse_to_none() {
        let reply = intent::respond("hello");
        let message = ChatMessage::from_assistant(&reply);
        assert!(message.recommendations.is_none());
    }
}
