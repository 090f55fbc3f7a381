use std::sync::LazyLock;

use tiktoken_rs::CoreBPE;

use crate::domain::ChatMessage;

static TOKENIZER: LazyLock<Option<CoreBPE>> = LazyLock::new(|| tiktoken_rs::cl100k_base().ok());

/// Falls back to a four-characters-per-token estimate if the BPE tables fail to load.
pub fn count_tokens(text: &str) -> usize {
    match TOKENIZER.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => text.chars().count().div_ceil(4),
    }
}

pub fn count_message_tokens(messages: &[ChatMessage]) -> usize {
    messages.iter().map(|m| count_tokens(&m.content)).sum()
}
