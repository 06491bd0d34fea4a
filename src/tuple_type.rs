//! Tuple types: categories of preprocessed randomness.
//!
//! A tuple type is identified on the wire by its canonical name, e.g.
//! `MULTIPLICATION_TRIPLE_GFP` or `EDABIT_GFP_40`. The same names are used by
//! both protocol families, so a name alone does not pin down the protocol.
//!
//! The catalog is a single row table rendered once per family.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::protocol::{
    ProtocolFamily, SpdzDomain, SpdzProtocol, SPDZ_GF2N, SPDZ_GF2N_D, SPDZ_GFP, SPDZ_GFP_BT,
    SPDZ_GFP_D, SPDZ_GFP_D_BT,
};

use ProtocolFamily::{Default as Active, SemiHonest as Semi};

/// Preprocessing category, named as the generator toolchain names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preprocessing {
    Triples,
    Bits,
    Inputs,
    Squares,
    Inverses,
    DaBits,
    EdaBits,
}

impl Preprocessing {
    pub const fn name(self) -> &'static str {
        match self {
            Preprocessing::Triples => "Triples",
            Preprocessing::Bits => "Bits",
            Preprocessing::Inputs => "Inputs",
            Preprocessing::Squares => "Squares",
            Preprocessing::Inverses => "Inverses",
            Preprocessing::DaBits => "daBits",
            Preprocessing::EdaBits => "edaBits",
        }
    }
}

impl fmt::Display for Preprocessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which protocol of a family produces a given row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arithmetic {
    Gfp,
    Gf2n,
    Binary,
}

impl ProtocolFamily {
    const fn protocol_for(self, arithmetic: Arithmetic) -> SpdzProtocol {
        match (self, arithmetic) {
            (ProtocolFamily::Default, Arithmetic::Gfp) => SPDZ_GFP,
            (ProtocolFamily::Default, Arithmetic::Gf2n) => SPDZ_GF2N,
            (ProtocolFamily::Default, Arithmetic::Binary) => SPDZ_GFP_BT,
            (ProtocolFamily::SemiHonest, Arithmetic::Gfp) => SPDZ_GFP_D,
            (ProtocolFamily::SemiHonest, Arithmetic::Gf2n) => SPDZ_GF2N_D,
            (ProtocolFamily::SemiHonest, Arithmetic::Binary) => SPDZ_GFP_D_BT,
        }
    }

    /// Tuple types this family serves, in catalog order.
    pub fn tuple_types(self) -> Vec<TupleType> {
        LAYOUT.iter().map(|row| row.under(self)).collect()
    }
}

/// A category of preprocessed randomness produced under one protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleType {
    /// Canonical name, the external identifier.
    pub name: &'static str,
    pub preprocessing: Preprocessing,
    pub protocol: SpdzProtocol,
    /// Zero unless the type is parameterized by bit width.
    pub bit_length: u32,
}

impl TupleType {
    pub fn domain(&self) -> SpdzDomain {
        self.protocol.domain
    }

    pub fn preprocessing_name(&self) -> &'static str {
        self.preprocessing.name()
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for TupleType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// One catalog row, independent of the protocol family.
#[derive(Debug, Clone, Copy)]
struct Row {
    name: &'static str,
    preprocessing: Preprocessing,
    arithmetic: Arithmetic,
    bit_length: u32,
}

impl Row {
    const fn new(name: &'static str, preprocessing: Preprocessing, arithmetic: Arithmetic) -> Self {
        Row {
            name,
            preprocessing,
            arithmetic,
            bit_length: 0,
        }
    }

    const fn edabit(name: &'static str, bit_length: u32) -> Self {
        Row {
            name,
            preprocessing: Preprocessing::EdaBits,
            arithmetic: Arithmetic::Gfp,
            bit_length,
        }
    }

    const fn under(self, family: ProtocolFamily) -> TupleType {
        TupleType {
            name: self.name,
            preprocessing: self.preprocessing,
            protocol: family.protocol_for(self.arithmetic),
            bit_length: self.bit_length,
        }
    }
}

// Secure and insecure edaBits end up under the same names, so they are not
// told apart here either.
//
// 40 is the default statistical security parameter, 41 is that plus one,
// 64 is the default limb size and 32 is the smaller alternative to it.
const EDABIT_32: Row = Row::edabit("EDABIT_GFP_32", 32);
const EDABIT_40: Row = Row::edabit("EDABIT_GFP_40", 40);
const EDABIT_41: Row = Row::edabit("EDABIT_GFP_41", 41);
const EDABIT_64: Row = Row::edabit("EDABIT_GFP_64", 64);
const BINARY_TRIPLE: Row = Row::new("BINARY_TRIPLE_GFP", Preprocessing::Triples, Arithmetic::Binary);
const DABIT_P: Row = Row::new("DABIT_GFP", Preprocessing::DaBits, Arithmetic::Gfp);
const DABIT_2: Row = Row::new("DABIT_GF2N", Preprocessing::DaBits, Arithmetic::Gf2n);
const BIT_P: Row = Row::new("BIT_GFP", Preprocessing::Bits, Arithmetic::Gfp);
const BIT_2: Row = Row::new("BIT_GF2N", Preprocessing::Bits, Arithmetic::Gf2n);
const INPUT_MASK_P: Row = Row::new("INPUT_MASK_GFP", Preprocessing::Inputs, Arithmetic::Gfp);
const INPUT_MASK_2: Row = Row::new("INPUT_MASK_GF2N", Preprocessing::Inputs, Arithmetic::Gf2n);
const INVERSE_P: Row = Row::new("INVERSE_TUPLE_GFP", Preprocessing::Inverses, Arithmetic::Gfp);
const INVERSE_2: Row = Row::new("INVERSE_TUPLE_GF2N", Preprocessing::Inverses, Arithmetic::Gf2n);
const SQUARE_P: Row = Row::new("SQUARE_TUPLE_GFP", Preprocessing::Squares, Arithmetic::Gfp);
const SQUARE_2: Row = Row::new("SQUARE_TUPLE_GF2N", Preprocessing::Squares, Arithmetic::Gf2n);
const TRIPLE_P: Row = Row::new("MULTIPLICATION_TRIPLE_GFP", Preprocessing::Triples, Arithmetic::Gfp);
const TRIPLE_2: Row = Row::new("MULTIPLICATION_TRIPLE_GF2N", Preprocessing::Triples, Arithmetic::Gf2n);

/// Catalog order, shared by both families.
const LAYOUT: [Row; 17] = [
    EDABIT_32,
    EDABIT_40,
    EDABIT_41,
    EDABIT_64,
    BINARY_TRIPLE,
    DABIT_P,
    DABIT_2,
    BIT_P,
    BIT_2,
    INPUT_MASK_P,
    INPUT_MASK_2,
    INVERSE_P,
    INVERSE_2,
    SQUARE_P,
    SQUARE_2,
    TRIPLE_P,
    TRIPLE_2,
];

pub const EDABIT_GFP_32: TupleType = EDABIT_32.under(Active);
pub const EDABIT_GFP_40: TupleType = EDABIT_40.under(Active);
pub const EDABIT_GFP_41: TupleType = EDABIT_41.under(Active);
pub const EDABIT_GFP_64: TupleType = EDABIT_64.under(Active);
pub const BINARY_TRIPLE_GFP: TupleType = BINARY_TRIPLE.under(Active);
pub const DABIT_GFP: TupleType = DABIT_P.under(Active);
pub const DABIT_GF2N: TupleType = DABIT_2.under(Active);
pub const BIT_GFP: TupleType = BIT_P.under(Active);
pub const BIT_GF2N: TupleType = BIT_2.under(Active);
pub const INPUT_MASK_GFP: TupleType = INPUT_MASK_P.under(Active);
pub const INPUT_MASK_GF2N: TupleType = INPUT_MASK_2.under(Active);
pub const INVERSE_TUPLE_GFP: TupleType = INVERSE_P.under(Active);
pub const INVERSE_TUPLE_GF2N: TupleType = INVERSE_2.under(Active);
pub const SQUARE_TUPLE_GFP: TupleType = SQUARE_P.under(Active);
pub const SQUARE_TUPLE_GF2N: TupleType = SQUARE_2.under(Active);
pub const MULTIPLICATION_TRIPLE_GFP: TupleType = TRIPLE_P.under(Active);
pub const MULTIPLICATION_TRIPLE_GF2N: TupleType = TRIPLE_2.under(Active);

pub const EDABIT_GFP_32_D: TupleType = EDABIT_32.under(Semi);
pub const EDABIT_GFP_40_D: TupleType = EDABIT_40.under(Semi);
pub const EDABIT_GFP_41_D: TupleType = EDABIT_41.under(Semi);
pub const EDABIT_GFP_64_D: TupleType = EDABIT_64.under(Semi);
pub const BINARY_TRIPLE_GFP_D: TupleType = BINARY_TRIPLE.under(Semi);
pub const DABIT_GFP_D: TupleType = DABIT_P.under(Semi);
pub const DABIT_GF2N_D: TupleType = DABIT_2.under(Semi);
pub const BIT_GFP_D: TupleType = BIT_P.under(Semi);
pub const BIT_GF2N_D: TupleType = BIT_2.under(Semi);
pub const INPUT_MASK_GFP_D: TupleType = INPUT_MASK_P.under(Semi);
pub const INPUT_MASK_GF2N_D: TupleType = INPUT_MASK_2.under(Semi);
pub const INVERSE_TUPLE_GFP_D: TupleType = INVERSE_P.under(Semi);
pub const INVERSE_TUPLE_GF2N_D: TupleType = INVERSE_2.under(Semi);
pub const SQUARE_TUPLE_GFP_D: TupleType = SQUARE_P.under(Semi);
pub const SQUARE_TUPLE_GF2N_D: TupleType = SQUARE_2.under(Semi);
pub const MULTIPLICATION_TRIPLE_GFP_D: TupleType = TRIPLE_P.under(Semi);
pub const MULTIPLICATION_TRIPLE_GF2N_D: TupleType = TRIPLE_2.under(Semi);

/// The whole catalog: the default family followed by the semi-honest one.
pub fn all_tuple_types() -> Vec<TupleType> {
    [Active, Semi]
        .into_iter()
        .flat_map(ProtocolFamily::tuple_types)
        .collect()
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;
    use crate::protocol::{GF2N, GFP};

    #[test]
    fn catalog_size() {
        assert_eq!(all_tuple_types().len(), 34);
        assert!(all_tuple_types().into_iter().all_unique());
    }

    #[test]
    fn name_matches_domain() {
        for tuple_type in all_tuple_types() {
            let suffix = match tuple_type.domain() {
                d if d == GFP => "GFP",
                d if d == GF2N => "GF2N",
                d => panic!("unexpected domain {d}"),
            };
            let domain_part = tuple_type.name.split('_').rev().find(|s| s.starts_with("GF"));
            assert_eq!(domain_part, Some(suffix), "{tuple_type}");
        }
    }

    #[test]
    fn bit_length_only_for_edabits() {
        for tuple_type in all_tuple_types() {
            if tuple_type.preprocessing == Preprocessing::EdaBits {
                assert!(tuple_type.bit_length > 0);
                assert!(tuple_type.name.ends_with(&format!("_{}", tuple_type.bit_length)));
            } else {
                assert_eq!(tuple_type.bit_length, 0);
            }
        }
    }

    #[test]
    fn preprocessing_names() {
        assert_eq!(EDABIT_GFP_41.preprocessing_name(), "edaBits");
        assert_eq!(DABIT_GF2N_D.preprocessing_name(), "daBits");
        assert_eq!(BINARY_TRIPLE_GFP.preprocessing_name(), "Triples");
        assert_eq!(Preprocessing::Inverses.to_string(), "Inverses");
    }

    #[test]
    fn binary_triples_use_binary_protocols() {
        assert_eq!(BINARY_TRIPLE_GFP.protocol, SPDZ_GFP_BT);
        assert_eq!(BINARY_TRIPLE_GFP_D.protocol, SPDZ_GFP_D_BT);
        assert_eq!(BINARY_TRIPLE_GFP.name, BINARY_TRIPLE_GFP_D.name);
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&[EDABIT_GFP_40, SQUARE_TUPLE_GF2N_D]).unwrap();
        assert_eq!(json, r#"["EDABIT_GFP_40","SQUARE_TUPLE_GF2N"]"#);
    }
}
