use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

use crate::message_builder::ResponsePolicy;
use crate::response_mode::ResponseMode;
use crate::DomainError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolver as `IP:PORT`. When set, every question is forwarded.
    #[serde(default)]
    pub upstream: Option<String>,

    /// Per upstream round trip, in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_placeholder_address")]
    pub placeholder_address: Ipv4Addr,

    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    #[serde(default)]
    pub answer_unsupported_opcodes: bool,
}

impl DnsConfig {
    pub fn response_mode(&self) -> Result<ResponseMode, DomainError> {
        ResponseMode::from_upstream(self.upstream.as_deref())
    }

    pub fn response_policy(&self) -> ResponsePolicy {
        ResponsePolicy {
            placeholder_address: self.placeholder_address,
            answer_ttl: self.answer_ttl,
            answer_unsupported_opcodes: self.answer_unsupported_opcodes,
        }
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream: None,
            query_timeout: default_query_timeout(),
            placeholder_address: default_placeholder_address(),
            answer_ttl: default_answer_ttl(),
            answer_unsupported_opcodes: false,
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_placeholder_address() -> Ipv4Addr {
    Ipv4Addr::new(8, 8, 8, 8)
}

fn default_answer_ttl() -> u32 {
    60
}
