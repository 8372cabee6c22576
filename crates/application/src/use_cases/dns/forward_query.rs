use crate::ports::UpstreamTransport;
use ferrous_relay_domain::wire::{serialize_message, MessageParser};
use ferrous_relay_domain::{DomainError, Message, MessageBuilder, Question, ResourceRecord, ResponsePolicy};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers a query by asking the upstream resolver one question at a time.
///
/// The resolver is only trusted with single-question queries, so a query with
/// N questions costs N sequential round trips. Each reply must carry exactly
/// one answer; anything else aborts the whole message.
pub struct ForwardQueryUseCase {
    transport: Arc<dyn UpstreamTransport>,
    policy: ResponsePolicy,
}

impl ForwardQueryUseCase {
    pub fn new(transport: Arc<dyn UpstreamTransport>, policy: ResponsePolicy) -> Self {
        Self { transport, policy }
    }

    pub async fn execute(&self, query: &Message, upstream: SocketAddr) -> Result<Message, DomainError> {
        if !self.policy.answers(&query.header) {
            debug!(
                id = query.header.id,
                opcode = query.header.opcode,
                "Unsupported opcode, not forwarding"
            );
            return Ok(MessageBuilder::forward_response(query, Vec::new()));
        }

        let mut answers = Vec::with_capacity(query.questions.len());
        for question in &query.questions {
            let answer = self.resolve_question(query, question, upstream).await?;
            answers.push(answer);
        }

        Ok(MessageBuilder::forward_response(query, answers))
    }

    async fn resolve_question(
        &self,
        query: &Message,
        question: &Question,
        upstream: SocketAddr,
    ) -> Result<ResourceRecord, DomainError> {
        let forwarded = MessageBuilder::forward_query(&query.header, question);
        let request_bytes = serialize_message(&forwarded);

        debug!(
            upstream = %upstream,
            question = %question,
            protocol = self.transport.protocol_name(),
            "Forwarding question"
        );

        let reply_bytes = self.transport.exchange(upstream, &request_bytes).await?;
        let reply = MessageParser::parse(&reply_bytes)?;

        if reply.header.id != query.header.id {
            warn!(
                expected = query.header.id,
                received = reply.header.id,
                upstream = %upstream,
                "Upstream reply has a different transaction id"
            );
        }

        let answer_count = reply.answers.len();
        let mut answers = reply.answers.into_iter();
        match (answers.next(), answers.next()) {
            (Some(answer), None) => {
                debug!(question = %question, answer = %answer, "Upstream answer");
                Ok(answer)
            }
            _ => Err(DomainError::UpstreamAnswerMismatch {
                question: question.to_string(),
                answers: answer_count,
            }),
        }
    }
}
