//! Ferrous Relay Infrastructure Layer
pub mod dns;
