use serde::Deserialize;

/// An inbound chat message as delivered by the host runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Identity of the account that sent the message.
    pub sender_email: String,
    /// The message text.
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn new(sender_email: impl Into<String>, content: impl Into<String>) -> Message {
        Message {
            sender_email: sender_email.into(),
            content: content.into(),
        }
    }
}
