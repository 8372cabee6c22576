use crate::dns_message::header::{RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR};
use crate::dns_message::{Header, Message, Question, ResourceRecord};
use std::net::Ipv4Addr;

/// Knobs for synthesized replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// RDATA of every synthesized A answer.
    pub placeholder_address: Ipv4Addr,
    pub answer_ttl: u32,
    /// When false, a query with a non-zero OPCODE gets RCODE=4 and no answers.
    /// When true, it still gets one answer per question, as for OPCODE 0.
    pub answer_unsupported_opcodes: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            placeholder_address: Ipv4Addr::new(8, 8, 8, 8),
            answer_ttl: 60,
            answer_unsupported_opcodes: false,
        }
    }
}

impl ResponsePolicy {
    pub fn answers(&self, query: &Header) -> bool {
        query.is_standard_query() || self.answer_unsupported_opcodes
    }
}

/// Builds reply messages and the single-question queries sent upstream.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Reply header for `query`: same ID, OPCODE and RD, QR set, every other
    /// flag clear. RCODE is 0 for a standard query and 4 otherwise. Counts are
    /// zero until sections are attached with [`Message::new`].
    pub fn reply_header(query: &Header) -> Header {
        Header {
            id: query.id,
            response: true,
            opcode: query.opcode,
            recursion_desired: query.recursion_desired,
            rcode: if query.is_standard_query() {
                RCODE_NO_ERROR
            } else {
                RCODE_NOT_IMPLEMENTED
            },
            ..Header::default()
        }
    }

    /// Answers every question locally with an A record for the placeholder
    /// address, in question order.
    pub fn standalone_response(query: &Message, policy: &ResponsePolicy) -> Message {
        let answers = if policy.answers(&query.header) {
            query
                .questions
                .iter()
                .map(|q| {
                    ResourceRecord::a(q.name.clone(), policy.placeholder_address, policy.answer_ttl)
                })
                .collect()
        } else {
            Vec::new()
        };

        Message::new(
            Self::reply_header(&query.header),
            query.questions.clone(),
            answers,
        )
    }

    /// Reply carrying the query's questions and answers collected elsewhere.
    pub fn forward_response(query: &Message, answers: Vec<ResourceRecord>) -> Message {
        Message::new(
            Self::reply_header(&query.header),
            query.questions.clone(),
            answers,
        )
    }

    /// Minimal query for one question: the client query's ID, OPCODE and RD, QR
    /// clear, QDCOUNT=1 and no other records.
    pub fn forward_query(query: &Header, question: &Question) -> Message {
        let header = Header {
            id: query.id,
            opcode: query.opcode,
            recursion_desired: query.recursion_desired,
            ..Header::default()
        };
        Message::new(header, vec![question.clone()], Vec::new())
    }
}
