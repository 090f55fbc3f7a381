mod conversation;
mod document;
mod message;
mod message_role;
mod page_range;
mod session_id;

pub use conversation::{ConversationHistory, Turn};
pub use document::{ContentType, Extraction, UNSUPPORTED_FILE_TYPE_MESSAGE, UploadedFile};
pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use page_range::{PageRange, PageRangeError};
pub use session_id::SessionId;
