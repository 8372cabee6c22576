use super::record_type::{fmt_class, fmt_type};
use super::{Name, RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// An answer record. RDATA is opaque; its length on the wire is always
/// `rdata.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// An `IN A` record pointing `name` at `address`.
    pub fn a(name: Name, address: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name,
            rtype: RecordType::A.to_u16(),
            rclass: RecordClass::IN.to_u16(),
            ttl,
            rdata: address.octets().to_vec(),
        }
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }

    /// The IPv4 address carried by an A record, if this is one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != RecordType::A.to_u16() {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.name, self.ttl)?;
        fmt_class(self.rclass, f)?;
        f.write_str(" ")?;
        fmt_type(self.rtype, f)?;
        match self.ipv4() {
            Some(addr) => write!(f, " {}", addr),
            None => {
                f.write_str(" ")?;
                if self.rdata.is_empty() {
                    return f.write_str("-");
                }
                for byte in &self.rdata {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}
