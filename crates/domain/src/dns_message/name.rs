use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Longest permitted label, in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest permitted name in wire form, length octets and root byte included.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name held as an uncompressed sequence of labels. The root label
/// is implicit and not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name {
    labels: Vec<Vec<u8>>,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a name from raw labels, enforcing the label and total length limits.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut name = Self::root();
        for label in labels {
            name.push_label(label.into())?;
        }
        Ok(name)
    }

    pub(crate) fn push_label(&mut self, label: Vec<u8>) -> Result<(), DomainError> {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(DomainError::MalformedName(format!(
                "label length {} outside 1..={}",
                label.len(),
                MAX_LABEL_LEN
            )));
        }
        let encoded_len = self.encoded_len() + label.len() + 1;
        if encoded_len > MAX_NAME_LEN {
            return Err(DomainError::MalformedName(format!(
                "name length {} exceeds {} bytes",
                encoded_len, MAX_NAME_LEN
            )));
        }
        self.labels.push(label);
        Ok(())
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Size of the uncompressed wire encoding, including the root byte.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }
}

impl FromStr for Name {
    type Err = DomainError;

    /// Parses dotted presentation form. A single trailing dot is accepted and
    /// `"."` or `""` yield the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('.').unwrap_or(s);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Self::from_labels(trimmed.split('.').map(|label| label.as_bytes().to_vec()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(&String::from_utf8_lossy(label))?;
        }
        Ok(())
    }
}
