use super::ForwardQueryUseCase;
use ferrous_relay_domain::{DomainError, Message, MessageBuilder, ResponseMode, ResponsePolicy};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Produces exactly one reply for one parsed query.
pub struct HandleDnsQueryUseCase {
    mode: ResponseMode,
    policy: ResponsePolicy,
    forwarder: Arc<ForwardQueryUseCase>,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        mode: ResponseMode,
        policy: ResponsePolicy,
        forwarder: Arc<ForwardQueryUseCase>,
    ) -> Self {
        Self {
            mode,
            policy,
            forwarder,
        }
    }

    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    pub async fn execute(&self, query: &Message) -> Result<Message, DomainError> {
        let start = Instant::now();

        let response = match self.mode {
            ResponseMode::Standalone => MessageBuilder::standalone_response(query, &self.policy),
            ResponseMode::Forward(upstream) => self.forwarder.execute(query, upstream).await?,
        };

        debug!(
            id = response.header.id,
            mode = self.mode.as_str(),
            questions = response.questions.len(),
            answers = response.answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Response built"
        );

        Ok(response)
    }
}
