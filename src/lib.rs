#![deny(unsafe_code)]
//! Catalog of SPDZ protocols and the tuple types served for them.

pub mod protocol;
pub mod selector;
pub mod tuple_type;
pub mod wire;

use thiserror::Error;

pub use protocol::{supported_spdz_protocols, ProtocolFamily, SpdzDomain, SpdzProtocol};
pub use selector::{resolve_tuple_type, supported_tuple_types, SelectableProtocol};
pub use tuple_type::{all_tuple_types, Preprocessing, TupleType};
pub use wire::{Share, Tuple, TupleList, WireError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown protocol shorthand '{0}'")]
    UnknownProtocol(String),
    #[error("Protocol '{0}' does not select tuple types")]
    UnsupportedProtocol(String),
    #[error("Tuple type {name} is not served under protocol '{protocol}'")]
    UnknownTupleType { name: String, protocol: String },
}
