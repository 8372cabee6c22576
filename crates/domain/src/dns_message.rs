pub mod header;
pub mod name;
pub mod question;
pub mod record;
pub mod record_type;

pub use header::Header;
pub use name::Name;
pub use question::Question;
pub use record::ResourceRecord;
pub use record_type::{RecordClass, RecordType};

/// A DNS message limited to the sections this server reads and writes:
/// header, questions and answers. Authority and additional records are
/// never materialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl Message {
    /// Builds a message whose QDCOUNT and ANCOUNT match the sections supplied.
    pub fn new(mut header: Header, questions: Vec<Question>, answers: Vec<ResourceRecord>) -> Self {
        header.qd_count = questions.len() as u16;
        header.an_count = answers.len() as u16;
        Self {
            header,
            questions,
            answers,
        }
    }

    /// True when the header counts agree with the sections actually held.
    pub fn counts_consistent(&self) -> bool {
        self.header.qd_count as usize == self.questions.len()
            && self.header.an_count as usize == self.answers.len()
    }
}
