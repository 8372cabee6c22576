use super::bytes::{read_slice, read_u16, read_u32};
use super::name::decode_name;
use super::HEADER_SIZE;
use crate::dns_message::{Header, Message, Name, Question, ResourceRecord};
use crate::DomainError;

/// Cursor-driven reader over one received datagram.
///
/// The cursor only moves forward. Compression pointers are resolved by the
/// name decoder without moving it. Authority and additional records are left
/// unread; their counts are kept in the header.
pub struct MessageParser<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> MessageParser<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Parses a whole message from `bytes`.
    pub fn parse(bytes: &'a [u8]) -> Result<Message, DomainError> {
        Self::new(bytes).parse_message()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn parse_message(&mut self) -> Result<Message, DomainError> {
        let header = self.read_header()?;

        let mut questions = Vec::with_capacity(header.qd_count as usize);
        for _ in 0..header.qd_count {
            questions.push(self.read_question()?);
        }

        let mut answers = Vec::with_capacity(header.an_count as usize);
        for _ in 0..header.an_count {
            answers.push(self.read_record()?);
        }

        Ok(Message {
            header,
            questions,
            answers,
        })
    }

    pub fn read_header(&mut self) -> Result<Header, DomainError> {
        if self.bytes.len() < HEADER_SIZE {
            return Err(DomainError::TruncatedMessage(format!(
                "datagram of {} bytes is shorter than the {}-byte header",
                self.bytes.len(),
                HEADER_SIZE
            )));
        }

        let mut header = Header {
            id: read_u16(self.bytes, 0)?,
            qd_count: read_u16(self.bytes, 4)?,
            an_count: read_u16(self.bytes, 6)?,
            ns_count: read_u16(self.bytes, 8)?,
            ar_count: read_u16(self.bytes, 10)?,
            ..Header::default()
        };
        header.set_flags([self.bytes[2], self.bytes[3]]);

        self.cursor = HEADER_SIZE;
        Ok(header)
    }

    pub fn read_question(&mut self) -> Result<Question, DomainError> {
        let name = self.read_name()?;
        let qtype = self.read_u16()?;
        let qclass = self.read_u16()?;
        Ok(Question::new(name, qtype, qclass))
    }

    pub fn read_record(&mut self) -> Result<ResourceRecord, DomainError> {
        let name = self.read_name()?;
        let rtype = self.read_u16()?;
        let rclass = self.read_u16()?;
        let ttl = self.read_u32()?;
        let rdlength = self.read_u16()? as usize;
        let rdata = read_slice(self.bytes, self.cursor, rdlength)?.to_vec();
        self.cursor += rdlength;

        Ok(ResourceRecord {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        })
    }

    fn read_name(&mut self) -> Result<Name, DomainError> {
        let (name, consumed) = decode_name(self.bytes, self.cursor)?;
        self.cursor += consumed;
        Ok(name)
    }

    fn read_u16(&mut self) -> Result<u16, DomainError> {
        let value = read_u16(self.bytes, self.cursor)?;
        self.cursor += 2;
        Ok(value)
    }

    fn read_u32(&mut self) -> Result<u32, DomainError> {
        let value = read_u32(self.bytes, self.cursor)?;
        self.cursor += 4;
        Ok(value)
    }
}
