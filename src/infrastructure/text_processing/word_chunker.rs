use crate::application::ports::TextSplitter;

pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 2000;

/// Greedy word-aligned splitter. Each word counts its characters plus one separator.
pub struct WordChunker {
    max_length: usize,
}

impl WordChunker {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for WordChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LENGTH)
    }
}

impl TextSplitter for WordChunker {
    fn split(&self, text: &str) -> Vec<String> {
        split_text(text, self.max_length)
    }
}

/// Words are never split; a word longer than `max_length` gets a chunk of its own.
pub fn split_text(text: &str, max_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_length = word.chars().count() + 1;

        if current_length + word_length > max_length && !current.is_empty() {
            chunks.push(current.join(" "));
            current.clear();
            current_length = 0;
        }

        current.push(word);
        current_length += word_length;
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
