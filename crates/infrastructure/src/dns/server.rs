use ferrous_relay_application::use_cases::HandleDnsQueryUseCase;
use ferrous_relay_domain::wire::{serialize_message, MessageParser};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns one inbound datagram into at most one outbound datagram.
///
/// Malformed queries and failed resolutions are logged and dropped; nothing
/// here panics on untrusted input.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_raw_udp(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match MessageParser::parse(datagram) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, size = datagram.len(), error = %e, "Dropping malformed query");
                return None;
            }
        };

        debug!(client = %client, header = %query.header, "DNS query received");
        for question in &query.questions {
            debug!(client = %client, question = %question, "Question");
        }

        let response = match self.use_case.execute(&query).await {
            Ok(response) => response,
            Err(e) if e.is_upstream_error() => {
                warn!(client = %client, id = query.header.id, error = %e, "Upstream resolution failed");
                return None;
            }
            Err(e) => {
                error!(client = %client, id = query.header.id, error = %e, "Query resolution failed");
                return None;
            }
        };

        for answer in &response.answers {
            debug!(client = %client, answer = %answer, "Answer");
        }

        Some(serialize_message(&response))
    }
}
