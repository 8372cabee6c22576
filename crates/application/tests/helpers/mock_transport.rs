#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_relay_application::ports::UpstreamTransport;
use ferrous_relay_domain::wire::{serialize_message, MessageParser};
use ferrous_relay_domain::{DomainError, Header, Message, ResourceRecord};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

/// Stub upstream keyed by question name. Replies echo the question and carry
/// whatever answers were registered for that name.
pub struct MockUpstreamTransport {
    answers: Arc<Mutex<HashMap<String, Vec<ResourceRecord>>>>,
    errors: Arc<Mutex<HashMap<String, DomainError>>>,
    requests: Arc<Mutex<Vec<(SocketAddr, Vec<u8>)>>>,
}

impl MockUpstreamTransport {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_answers(&self, domain: &str, answers: Vec<ResourceRecord>) {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), answers);
    }

    pub fn set_a(&self, domain: &str, ip: Ipv4Addr) {
        let record = ResourceRecord::a(domain.parse().unwrap(), ip, 300);
        self.set_answers(domain, vec![record]);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.errors
            .lock()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn requests(&self) -> Vec<(SocketAddr, Vec<u8>)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn forwarded_queries(&self) -> Vec<Message> {
        self.requests()
            .iter()
            .map(|(_, bytes)| MessageParser::parse(bytes).unwrap())
            .collect()
    }
}

impl Default for MockUpstreamTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamTransport for MockUpstreamTransport {
    async fn exchange(&self, upstream: SocketAddr, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.requests
            .lock()
            .unwrap()
            .push((upstream, query.to_vec()));

        let request = MessageParser::parse(query)?;
        let domain = request.questions[0].name.to_string();

        if let Some(err) = self.errors.lock().unwrap().get(&domain).cloned() {
            return Err(err);
        }

        let answers = self
            .answers
            .lock()
            .unwrap()
            .get(&domain)
            .cloned()
            .unwrap_or_default();

        let header = Header {
            id: request.header.id,
            response: true,
            recursion_desired: request.header.recursion_desired,
            recursion_available: true,
            ..Header::default()
        };
        Ok(serialize_message(&Message::new(header, request.questions, answers)))
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
