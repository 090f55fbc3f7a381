use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::ConversationService;
use crate::presentation::config::Settings;

use super::SessionStore;

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub conversation_service: Arc<ConversationService<L>>,
    pub sessions: SessionStore,
    pub settings: Settings,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            conversation_service: Arc::clone(&self.conversation_service),
            sessions: self.sessions.clone(),
            settings: self.settings.clone(),
        }
    }
}
