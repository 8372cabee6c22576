use crate::DomainError;

pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8, DomainError> {
    buf.get(offset)
        .copied()
        .ok_or_else(|| truncated(offset, 1, buf.len()))
}

pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DomainError> {
    let bytes = read_slice(buf, offset, 2)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32, DomainError> {
    let bytes = read_slice(buf, offset, 4)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub fn read_slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DomainError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| truncated(offset, len, buf.len()))
}

pub fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn truncated(offset: usize, len: usize, available: usize) -> DomainError {
    DomainError::TruncatedMessage(format!(
        "need {} bytes at offset {}, buffer holds {}",
        len, offset, available
    ))
}
