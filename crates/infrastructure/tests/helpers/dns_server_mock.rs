#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub const MOCK_ANSWER_ADDR: [u8; 4] = [93, 184, 216, 34];

/// Loopback upstream that answers every query with `answer_count` A records
/// pointing back at the first question name. A silent server never replies.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answer_count: u16) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::spawn(Some(answer_count)).await
    }

    pub async fn start_silent() -> Result<(Self, SocketAddr), std::io::Error> {
        Self::spawn(None).await
    }

    async fn spawn(answer_count: Option<u16>) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let (Ok((len, peer)), Some(count)) = (result, answer_count) {
                            let response = Self::build_mock_response(&buf[..len], count);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_mock_response(query: &[u8], answer_count: u16) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        response.push(0x80 | (query[2] & 0x79));
        response.push(0x80);

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(&answer_count.to_be_bytes());

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for _ in 0..answer_count {
            response.extend_from_slice(&[
                0xc0, 0x0c,
                0x00, 0x01,
                0x00, 0x01,
                0x00, 0x00, 0x00, 0x3c,
                0x00, 0x04,
            ]);
            response.extend_from_slice(&MOCK_ANSWER_ADDR);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
