mod chat;
mod error;
mod health;
mod sessions;
mod upload;

pub use chat::{ChatRequest, ChatResponse, ChatStatus, chat_handler};
pub use error::{ErrorResponse, error_response};
pub use health::health_handler;
pub use sessions::{
    CreateSessionResponse, HistoryResponse, SessionResponse, clear_handler,
    create_session_handler, delete_session_handler, get_session_handler, undo_handler,
};
pub use upload::{NO_FILE_MESSAGE, UploadResponse, inspect_handler, upload_handler};
