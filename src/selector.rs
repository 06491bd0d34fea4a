//! Mapping from a protocol to the tuple types that may be requested under it.
//!
//! Only the four field protocols are selectable. Binary triples are requested
//! through the arithmetic protocol they accompany, never directly.

use crate::{
    protocol::{ProtocolFamily, SpdzProtocol, SPDZ_GF2N, SPDZ_GF2N_D, SPDZ_GFP, SPDZ_GFP_D},
    tuple_type::TupleType,
    CatalogError,
};

/// The protocols accepted by [`supported_tuple_types`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectableProtocol {
    SpdzGfp,
    SpdzGf2n,
    SpdzGfpD,
    SpdzGf2nD,
}

impl SelectableProtocol {
    pub fn protocol(self) -> SpdzProtocol {
        match self {
            SelectableProtocol::SpdzGfp => SPDZ_GFP,
            SelectableProtocol::SpdzGf2n => SPDZ_GF2N,
            SelectableProtocol::SpdzGfpD => SPDZ_GFP_D,
            SelectableProtocol::SpdzGf2nD => SPDZ_GF2N_D,
        }
    }

    pub fn family(self) -> ProtocolFamily {
        match self {
            SelectableProtocol::SpdzGfp | SelectableProtocol::SpdzGf2n => ProtocolFamily::Default,
            SelectableProtocol::SpdzGfpD | SelectableProtocol::SpdzGf2nD => {
                ProtocolFamily::SemiHonest
            }
        }
    }

    pub fn tuple_types(self) -> Vec<TupleType> {
        self.family().tuple_types()
    }
}

impl TryFrom<&SpdzProtocol> for SelectableProtocol {
    type Error = CatalogError;

    fn try_from(protocol: &SpdzProtocol) -> Result<Self, Self::Error> {
        match *protocol {
            SPDZ_GFP => Ok(SelectableProtocol::SpdzGfp),
            SPDZ_GF2N => Ok(SelectableProtocol::SpdzGf2n),
            SPDZ_GFP_D => Ok(SelectableProtocol::SpdzGfpD),
            SPDZ_GF2N_D => Ok(SelectableProtocol::SpdzGf2nD),
            _ => Err(CatalogError::UnsupportedProtocol(protocol.shorthand.to_owned())),
        }
    }
}

impl From<SelectableProtocol> for SpdzProtocol {
    fn from(value: SelectableProtocol) -> Self {
        value.protocol()
    }
}

/// Tuple types that may be requested under `protocol`, in catalog order.
///
/// Anything but the four selectable protocols gives an empty list.
///
/// * `protocol`: protocol to select for, compared on every field
pub fn supported_tuple_types(protocol: &SpdzProtocol) -> Vec<TupleType> {
    match SelectableProtocol::try_from(protocol) {
        Ok(selectable) => selectable.tuple_types(),
        Err(_) => {
            tracing::debug!(
                shorthand = protocol.shorthand,
                "protocol does not select any tuple types"
            );
            Vec::new()
        }
    }
}

/// Resolve a tuple type name, as received in a request, under `protocol`.
///
/// * `protocol`: protocol the request is made under
/// * `name`: canonical tuple type name, e.g. `EDABIT_GFP_40`
pub fn resolve_tuple_type(protocol: &SpdzProtocol, name: &str) -> Result<TupleType, CatalogError> {
    let selectable = SelectableProtocol::try_from(protocol)?;
    let found = selectable
        .tuple_types()
        .into_iter()
        .find(|t| t.name == name)
        .ok_or_else(|| CatalogError::UnknownTupleType {
            name: name.to_owned(),
            protocol: protocol.shorthand.to_owned(),
        })?;
    tracing::debug!(%found, protocol = %found.protocol, "resolved tuple type");
    Ok(found)
}
