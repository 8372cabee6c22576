use super::bytes::{put_u16, put_u32};
use super::name::write_name;
use super::HEADER_SIZE;
use crate::dns_message::{Header, Message, Question, ResourceRecord};

/// Serializes `message` to wire form. Header fields are written as stored,
/// so callers are expected to keep QDCOUNT/ANCOUNT in step with the sections
/// (see [`Message::new`]).
pub fn serialize_message(message: &Message) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(message));

    write_header(&message.header, &mut out);
    for question in &message.questions {
        write_question(question, &mut out);
    }
    for record in &message.answers {
        write_record(record, &mut out);
    }

    out
}

pub fn write_header(header: &Header, out: &mut Vec<u8>) {
    put_u16(out, header.id);
    out.extend_from_slice(&header.flags());
    put_u16(out, header.qd_count);
    put_u16(out, header.an_count);
    put_u16(out, header.ns_count);
    put_u16(out, header.ar_count);
}

pub fn write_question(question: &Question, out: &mut Vec<u8>) {
    write_name(&question.name, out);
    put_u16(out, question.qtype);
    put_u16(out, question.qclass);
}

pub fn write_record(record: &ResourceRecord, out: &mut Vec<u8>) {
    write_name(&record.name, out);
    put_u16(out, record.rtype);
    put_u16(out, record.rclass);
    put_u32(out, record.ttl);
    put_u16(out, record.rdlength());
    out.extend_from_slice(&record.rdata);
}

fn encoded_len(message: &Message) -> usize {
    let questions: usize = message
        .questions
        .iter()
        .map(|q| q.name.encoded_len() + 4)
        .sum();
    let answers: usize = message
        .answers
        .iter()
        .map(|r| r.name.encoded_len() + 10 + r.rdata.len())
        .sum();
    HEADER_SIZE + questions + answers
}
