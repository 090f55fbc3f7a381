mod openai_client;

pub use openai_client::{GROQ_BASE_URL, OpenAiClient, create_llm_client, extract_error_message};
