pub mod dns;

pub use dns::{ForwardQueryUseCase, HandleDnsQueryUseCase};
