use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{CompletionRequest, LlmClient, LlmClientError, Sleeper};
use crate::domain::{ChatMessage, ConversationHistory};

use super::retry_policy::RetryPolicy;
use super::token_counter::count_message_tokens;

pub const SYSTEM_PROMPT_PREFIX: &str = "The following text is extracted from the uploaded file:\n";
pub const RATE_LIMIT_EXHAUSTED_MESSAGE: &str = "Rate limit exceeded. Please try again later.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

pub const DEFAULT_CHAT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_MAX_TOKENS: usize = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.4;

/// How a chat turn ended. Callers decide whether to show or propagate failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Reply(String),
    RateLimited { retry_after: Duration },
    Failed(String),
}

impl ChatOutcome {
    /// Text placed in the conversation for this outcome.
    pub fn display_text(&self) -> &str {
        match self {
            ChatOutcome::Reply(text) => text,
            ChatOutcome::RateLimited { .. } => RATE_LIMIT_EXHAUSTED_MESSAGE,
            ChatOutcome::Failed(_) => UNEXPECTED_ERROR_MESSAGE,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, ChatOutcome::Reply(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

pub struct ChatOrchestrator<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    sleeper: Arc<dyn Sleeper>,
    retry_policy: RetryPolicy,
    completion: CompletionSettings,
}

impl<L> ChatOrchestrator<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(
        llm_client: Arc<L>,
        sleeper: Arc<dyn Sleeper>,
        retry_policy: RetryPolicy,
        completion: CompletionSettings,
    ) -> Self {
        Self {
            llm_client,
            sleeper,
            retry_policy,
            completion,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// System prompt from the extracted text, then prior turns in order, then the new input.
    pub fn build_messages(
        extracted_text: &str,
        history: &ConversationHistory,
        user_input: &str,
    ) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(ChatMessage::system(format!(
            "{SYSTEM_PROMPT_PREFIX}{extracted_text}"
        )));
        messages.extend(history.to_messages());
        messages.push(ChatMessage::user(user_input));
        messages
    }

    #[tracing::instrument(
        skip(self, user_input, history, extracted_text),
        fields(history_turns = history.len(), model = %self.completion.model)
    )]
    pub async fn respond(
        &self,
        user_input: &str,
        history: &ConversationHistory,
        extracted_text: &str,
    ) -> ChatOutcome {
        let request = CompletionRequest {
            model: self.completion.model.clone(),
            messages: Self::build_messages(extracted_text, history, user_input),
            max_tokens: self.completion.max_tokens,
            temperature: self.completion.temperature,
        };

        tracing::debug!(
            message_count = request.messages.len(),
            prompt_tokens = count_message_tokens(&request.messages),
            "Sending chat completion"
        );

        let mut attempt = 0;
        loop {
            attempt += 1;

            match self.llm_client.complete(&request).await {
                Ok(reply) => {
                    tracing::info!(attempt, reply_chars = reply.len(), "Chat completion succeeded");
                    return ChatOutcome::Reply(reply);
                }
                Err(LlmClientError::RateLimited(message)) => {
                    let wait = self.retry_policy.delay_for(&message);
                    tracing::warn!(
                        attempt,
                        error = %message,
                        wait_secs = wait.as_secs_f64(),
                        "Rate limit error"
                    );

                    if attempt >= self.retry_policy.max_attempts {
                        tracing::error!(attempt, "Rate limit retries exhausted");
                        return ChatOutcome::RateLimited { retry_after: wait };
                    }

                    self.sleeper.sleep(wait).await;
                }
                Err(e) => {
                    tracing::error!(error = %e, attempt, "Chat completion failed");
                    return ChatOutcome::Failed(e.to_string());
                }
            }
        }
    }
}
