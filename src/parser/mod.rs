//! Parsing module for pack manifests

pub mod pack;

pub use pack::{parse_pack, parse_pack_from_file, parse_pack_from_str};
