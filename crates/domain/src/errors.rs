use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated message: {0}")]
    TruncatedMessage(String),

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Failed to send query to upstream {server}: {reason}")]
    UpstreamSendFailure { server: String, reason: String },

    #[error("Failed to receive reply from upstream {server}: {reason}")]
    UpstreamReceiveFailure { server: String, reason: String },

    #[error("Upstream returned {answers} answers for question '{question}', expected exactly 1")]
    UpstreamAnswerMismatch { question: String, answers: usize },

    #[error("Timeout waiting for upstream {server}")]
    UpstreamTimeout { server: String },

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),
}

impl DomainError {
    /// True for failures talking to the upstream resolver, as opposed to
    /// problems with the client's datagram.
    pub fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            DomainError::UpstreamSendFailure { .. }
                | DomainError::UpstreamReceiveFailure { .. }
                | DomainError::UpstreamAnswerMismatch { .. }
                | DomainError::UpstreamTimeout { .. }
        )
    }
}
