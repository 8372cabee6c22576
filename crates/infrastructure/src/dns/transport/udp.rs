//! UDP transport for upstream queries (RFC 1035 §4.2.1)
//!
//! One query, one reply, no framing. Each exchange binds its own ephemeral
//! socket so replies from an earlier exchange can never be mistaken for the
//! current one.

use async_trait::async_trait;
use ferrous_relay_application::ports::UpstreamTransport;
use ferrous_relay_domain::wire::MAX_DATAGRAM_SIZE;
use ferrous_relay_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub struct UdpTransport {
    timeout: Duration,
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn bind_addr(upstream: SocketAddr) -> SocketAddr {
        if upstream.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        }
    }
}

#[async_trait]
impl UpstreamTransport for UdpTransport {
    async fn exchange(&self, upstream: SocketAddr, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind(Self::bind_addr(upstream))
            .await
            .map_err(|e| DomainError::UpstreamSendFailure {
                server: upstream.to_string(),
                reason: format!("failed to bind UDP socket: {}", e),
            })?;

        let bytes_sent = socket.send_to(query, upstream).await.map_err(|e| {
            DomainError::UpstreamSendFailure {
                server: upstream.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(server = %upstream, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_DATAGRAM_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::UpstreamTimeout {
                    server: upstream.to_string(),
                })?
                .map_err(|e| DomainError::UpstreamReceiveFailure {
                    server: upstream.to_string(),
                    reason: e.to_string(),
                })?;

        if from_addr != upstream {
            warn!(
                expected = %upstream,
                received_from = %from_addr,
                "UDP reply from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(server = %upstream, bytes_received = bytes_received, "UDP reply received");

        Ok(recv_buf)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
