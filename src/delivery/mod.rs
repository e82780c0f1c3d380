//! Hand-off contract with the receiving app
//!
//! The cross-process call itself lives outside this crate; what is modeled
//! here is its payload shape and the typed mapping of its failure codes.

pub mod codes;
pub mod payload;

pub use codes::DeliveryError;
pub use payload::payload_from_pack;
