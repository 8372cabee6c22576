use ferrous_relay_domain::wire::MAX_DATAGRAM_SIZE;
use ferrous_relay_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Serves datagrams one at a time. Only a bind failure ends the loop.
///
/// A query is fully answered, including any upstream round trips, before the
/// next datagram is read.
pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = UdpSocket::bind(socket_addr).await?;

    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let (len, client) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "Failed to receive datagram");
                continue;
            }
        };

        debug!(client = %client, size = len, "Datagram received");

        let Some(response) = handler.handle_raw_udp(&recv_buf[..len], client).await else {
            continue;
        };

        if let Err(e) = socket.send_to(&response, client).await {
            warn!(client = %client, error = %e, "Failed to send response");
        }
    }
}
