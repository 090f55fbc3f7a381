use chrono::{DateTime, Utc};

use crate::domain::{ConversationHistory, SessionId, Turn};

/// Session-scoped context: the current document's text and the conversation about it.
///
/// Only one document is live per session. Loading another replaces the text
/// without touching the conversation.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: SessionId,
    document_name: Option<String>,
    extracted_text: String,
    history: ConversationHistory,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            document_name: None,
            extracted_text: String::new(),
            history: ConversationHistory::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn reset_document(&mut self) {
        self.document_name = None;
        self.extracted_text.clear();
        self.touch();
    }

    pub fn set_document(&mut self, name: impl Into<String>, text: String) {
        self.document_name = Some(name.into());
        self.extracted_text = text;
        self.touch();
    }

    pub fn record_turn(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.history.append(user, assistant);
        self.touch();
    }

    pub fn undo(&mut self) -> Option<Turn> {
        let removed = self.history.undo();
        self.touch();
        removed
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
