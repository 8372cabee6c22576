//! Ferrous Relay Domain Layer
pub mod config;
pub mod dns_message;
pub mod errors;
pub mod message_builder;
pub mod response_mode;
pub mod wire;

pub use config::{CliOverrides, Config};
pub use dns_message::{Header, Message, Name, Question, RecordClass, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use message_builder::{MessageBuilder, ResponsePolicy};
pub use response_mode::ResponseMode;
