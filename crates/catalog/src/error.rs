use agentdesk_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog {path} has {errors} error(s)")]
    Invalid { path: String, errors: usize },
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
