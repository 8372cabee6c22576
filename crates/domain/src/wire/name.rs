use crate::dns_message::name::MAX_LABEL_LEN;
use crate::{DomainError, Name};

/// Maximum number of compression pointers followed while decoding one name.
pub const MAX_POINTER_DEPTH: usize = 10;

const POINTER_MASK: u8 = 0xC0;

/// Decodes the name starting at `offset`.
///
/// Returns the name and the number of bytes it occupies at `offset`. When the
/// name ends in a compression pointer, only the bytes up to and including the
/// pointer count, however long the referenced suffix is. Every pointer must
/// target an offset strictly before the pointer itself.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(Name, usize), DomainError> {
    let mut name = Name::root();
    let mut pos = offset;
    let mut consumed: Option<usize> = None;
    let mut jumps = 0;

    loop {
        let len_byte = *buf.get(pos).ok_or_else(|| {
            DomainError::MalformedName(format!("name at offset {} runs past end of buffer", offset))
        })?;

        if len_byte == 0 {
            let consumed = consumed.unwrap_or_else(|| pos + 1 - offset);
            return Ok((name, consumed));
        }

        if len_byte & POINTER_MASK == POINTER_MASK {
            let low = *buf.get(pos + 1).ok_or_else(|| {
                DomainError::MalformedName(format!("compression pointer at {} is cut short", pos))
            })?;
            let target = ((len_byte & !POINTER_MASK) as usize) << 8 | low as usize;
            if target >= pos {
                return Err(DomainError::MalformedName(format!(
                    "compression pointer at {} targets {} which is not earlier in the message",
                    pos, target
                )));
            }
            jumps += 1;
            if jumps > MAX_POINTER_DEPTH {
                return Err(DomainError::MalformedName(format!(
                    "more than {} compression pointers in name at offset {}",
                    MAX_POINTER_DEPTH, offset
                )));
            }
            consumed.get_or_insert_with(|| pos + 2 - offset);
            pos = target;
            continue;
        }

        let len = len_byte as usize;
        if len > MAX_LABEL_LEN {
            return Err(DomainError::MalformedName(format!(
                "unsupported label type 0x{:02x} at offset {}",
                len_byte, pos
            )));
        }
        let start = pos + 1;
        let label = buf.get(start..start + len).ok_or_else(|| {
            DomainError::MalformedName(format!(
                "label of {} bytes at offset {} overruns buffer of {}",
                len,
                pos,
                buf.len()
            ))
        })?;
        name.push_label(label.to_vec())?;
        pos = start + len;
    }
}

/// Appends the uncompressed wire form of `name`, root byte included.
pub fn write_name(name: &Name, out: &mut Vec<u8>) {
    out.reserve(name.encoded_len());
    for label in name.labels() {
        out.push(label.len() as u8);
        out.extend_from_slice(label);
    }
    out.push(0);
}

pub fn encode_name(name: &Name) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.encoded_len());
    write_name(name, &mut out);
    out
}
