mod chat_orchestrator;
mod chat_session;
mod conversation_service;
mod retry_policy;
mod token_counter;

pub use chat_orchestrator::{
    ChatOrchestrator, ChatOutcome, CompletionSettings, DEFAULT_CHAT_MODEL, DEFAULT_MAX_TOKENS,
    DEFAULT_TEMPERATURE, RATE_LIMIT_EXHAUSTED_MESSAGE, SYSTEM_PROMPT_PREFIX,
    UNEXPECTED_ERROR_MESSAGE,
};
pub use chat_session::ChatSession;
pub use conversation_service::{
    ConversationService, DEFAULT_PAGE_RANGE_THRESHOLD, DocumentInspection,
};
pub use retry_policy::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_WAIT, RetryPolicy, parse_retry_after,
};
pub use token_counter::{count_message_tokens, count_tokens};
