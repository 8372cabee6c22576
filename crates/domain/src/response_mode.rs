use crate::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// How replies are produced: synthesized locally, or forwarded question by
/// question to an upstream resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    Standalone,
    Forward(SocketAddr),
}

impl ResponseMode {
    pub fn from_upstream(upstream: Option<&str>) -> Result<Self, DomainError> {
        match upstream {
            None => Ok(ResponseMode::Standalone),
            Some(addr) => Ok(ResponseMode::Forward(parse_upstream_addr(addr)?)),
        }
    }

    pub fn upstream(&self) -> Option<SocketAddr> {
        match self {
            ResponseMode::Standalone => None,
            ResponseMode::Forward(addr) => Some(*addr),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseMode::Standalone => "standalone",
            ResponseMode::Forward(_) => "forward",
        }
    }
}

/// Parses `ip:port`. IPv6 literals must be bracketed (`[::1]:53`).
pub fn parse_upstream_addr(s: &str) -> Result<SocketAddr, DomainError> {
    let trimmed = s.trim();
    if !trimmed.contains(':') {
        return Err(DomainError::InvalidUpstreamAddress(format!(
            "'{}' has no port, expected IP:PORT",
            s
        )));
    }
    let addr = SocketAddr::from_str(trimmed)
        .map_err(|e| DomainError::InvalidUpstreamAddress(format!("'{}': {}", s, e)))?;
    if addr.port() == 0 {
        return Err(DomainError::InvalidUpstreamAddress(format!(
            "'{}': port must not be 0",
            s
        )));
    }
    Ok(addr)
}

impl fmt::Display for ResponseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseMode::Standalone => f.write_str("standalone"),
            ResponseMode::Forward(addr) => write!(f, "forward to {}", addr),
        }
    }
}
