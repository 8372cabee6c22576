#![allow(dead_code)]
pub mod dns_server_mock;

pub use dns_server_mock::{MockDnsServer, MOCK_ANSWER_ADDR};

use ferrous_relay_domain::wire::serialize_message;
use ferrous_relay_domain::{Header, Message, Question};

/// Wire bytes for a recursive A/IN query with one question per domain.
pub fn query_bytes(id: u16, opcode: u8, domains: &[&str]) -> Vec<u8> {
    let header = Header {
        id,
        opcode,
        recursion_desired: true,
        ..Header::default()
    };
    let questions = domains
        .iter()
        .map(|d| Question::new(d.parse().unwrap(), 1, 1))
        .collect();
    serialize_message(&Message::new(header, questions, vec![]))
}
