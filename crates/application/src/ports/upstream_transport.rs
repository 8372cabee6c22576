use async_trait::async_trait;
use ferrous_relay_domain::DomainError;
use std::net::SocketAddr;

/// One request/response exchange with an upstream resolver.
///
/// Implementations send `query` as a single datagram and return exactly one
/// reply datagram. Failures map to `UpstreamSendFailure`,
/// `UpstreamReceiveFailure` or `UpstreamTimeout`.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn exchange(&self, upstream: SocketAddr, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
