use agentdesk_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no active wizard session")]
    NoSession,
    #[error("invalid wizard action: {0}")]
    InvalidAction(#[from] serde_json::Error),
    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

agentdesk_common::impl_context!(Error);
