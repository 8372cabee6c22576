#![allow(dead_code)]

/// Builds raw query datagrams byte by byte.
pub struct QueryBuilder {
    id: u16,
    flags: [u8; 2],
    questions: Vec<(String, u16, u16)>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: [0x01, 0x00],
            questions: Vec::new(),
        }
    }

    pub fn opcode(mut self, opcode: u8) -> Self {
        self.flags[0] = (self.flags[0] & !0x78) | (opcode & 0x0F) << 3;
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        if rd {
            self.flags[0] |= 0x01;
        } else {
            self.flags[0] &= !0x01;
        }
        self
    }

    pub fn question(mut self, domain: &str, qtype: u16) -> Self {
        self.questions.push((domain.to_string(), qtype, 1));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags);
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        for (domain, qtype, qclass) in &self.questions {
            buf.extend_from_slice(&encode_domain(domain));
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }
        buf
    }
}

pub fn encode_domain(domain: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00);
    buf
}
