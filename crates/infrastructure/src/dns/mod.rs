pub mod server;
pub mod transport;

pub use server::DnsServerHandler;
pub use transport::udp::UdpTransport;
