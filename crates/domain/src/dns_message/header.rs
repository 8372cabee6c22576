use std::fmt;

pub const OPCODE_QUERY: u8 = 0;

pub const RCODE_NO_ERROR: u8 = 0;
pub const RCODE_NOT_IMPLEMENTED: u8 = 4;

/// The fixed 12-byte DNS header with its flag pair decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    /// QR: `false` for a query, `true` for a response.
    pub response: bool,
    /// 4 bits.
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// Z, 3 bits.
    pub reserved: u8,
    /// 4 bits.
    pub rcode: u8,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub fn is_standard_query(&self) -> bool {
        self.opcode == OPCODE_QUERY
    }

    /// Packs the two flag bytes (bytes 2 and 3 of the header).
    pub fn flags(&self) -> [u8; 2] {
        let high = (self.response as u8) << 7
            | (self.opcode & 0x0F) << 3
            | (self.authoritative as u8) << 2
            | (self.truncated as u8) << 1
            | self.recursion_desired as u8;
        let low = (self.recursion_available as u8) << 7
            | (self.reserved & 0x07) << 4
            | (self.rcode & 0x0F);
        [high, low]
    }

    /// Inverse of [`Header::flags`]; counts are left untouched.
    pub fn set_flags(&mut self, flags: [u8; 2]) {
        let [high, low] = flags;
        self.response = high & 0x80 != 0;
        self.opcode = (high >> 3) & 0x0F;
        self.authoritative = high & 0x04 != 0;
        self.truncated = high & 0x02 != 0;
        self.recursion_desired = high & 0x01 != 0;
        self.recursion_available = low & 0x80 != 0;
        self.reserved = (low >> 4) & 0x07;
        self.rcode = low & 0x0F;
    }
}

pub fn opcode_name(opcode: u8) -> &'static str {
    match opcode {
        0 => "QUERY",
        1 => "IQUERY",
        2 => "STATUS",
        _ => "RESERVED",
    }
}

pub fn rcode_name(rcode: u8) -> &'static str {
    match rcode {
        0 => "NOERROR",
        1 => "FORMERR",
        2 => "SERVFAIL",
        3 => "NXDOMAIN",
        4 => "NOTIMP",
        5 => "REFUSED",
        _ => "RESERVED",
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id=0x{:04x} {} opcode={} rcode={}",
            self.id,
            if self.response { "response" } else { "query" },
            opcode_name(self.opcode),
            rcode_name(self.rcode),
        )?;
        for (set, flag) in [
            (self.authoritative, "aa"),
            (self.truncated, "tc"),
            (self.recursion_desired, "rd"),
            (self.recursion_available, "ra"),
        ] {
            if set {
                write!(f, " {}", flag)?;
            }
        }
        write!(
            f,
            " qd={} an={} ns={} ar={}",
            self.qd_count, self.an_count, self.ns_count, self.ar_count
        )
    }
}
