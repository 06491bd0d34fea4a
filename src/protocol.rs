//! SPDZ domains and protocol variants.
//!
//! Protocols come in two families, the actively secure default one and the
//! semi-honest one (prefixed `D` in the toolchain). Each family has a protocol
//! per field domain plus one for binary triples. The toolchain names these
//! irregularly, so every variant is spelled out by hand.

use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::CatalogError;

/// Algebraic domain a protocol computes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpdzDomain {
    pub shorthand: &'static str,
}

/// Integers modulo a prime.
pub const GFP: SpdzDomain = SpdzDomain { shorthand: "GFP" };
/// The Galois field GF(2^n).
pub const GF2N: SpdzDomain = SpdzDomain { shorthand: "GF2n" };

impl fmt::Display for SpdzDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shorthand)
    }
}

/// Trust model of a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolFamily {
    /// Actively secure, shares carry MACs.
    Default,
    /// Semi-honest, shares carry no MACs.
    SemiHonest,
}

/// A SPDZ protocol variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpdzProtocol {
    pub descriptor: &'static str,
    pub shorthand: &'static str,
    pub domain: SpdzDomain,
}

pub const SPDZ_GFP: SpdzProtocol = SpdzProtocol {
    descriptor: "SPDZ gfp",
    shorthand: "p",
    domain: GFP,
};
pub const SPDZ_GF2N: SpdzProtocol = SpdzProtocol {
    descriptor: "SPDZ gf2n_",
    shorthand: "2",
    domain: GF2N,
};

pub const SPDZ_GFP_D: SpdzProtocol = SpdzProtocol {
    descriptor: "gfp",
    shorthand: "Dp",
    domain: GFP,
};
pub const SPDZ_GF2N_D: SpdzProtocol = SpdzProtocol {
    descriptor: "gf2n_",
    shorthand: "D2",
    domain: GF2N,
};

// Binary triples for the families above. GFP is debatable as their domain.

/// Tinier binary triples, used alongside [`SPDZ_GFP`].
pub const SPDZ_GFP_BT: SpdzProtocol = SpdzProtocol {
    descriptor: "evaluation secret",
    shorthand: "TT",
    domain: GFP,
};
/// SemiBin binary triples, used alongside [`SPDZ_GFP_D`].
pub const SPDZ_GFP_D_BT: SpdzProtocol = SpdzProtocol {
    descriptor: "binary secret",
    shorthand: "DB",
    domain: GFP,
};

const SUPPORTED: [SpdzProtocol; 6] = [
    SPDZ_GFP,
    SPDZ_GF2N,
    SPDZ_GFP_D,
    SPDZ_GF2N_D,
    SPDZ_GFP_BT,
    SPDZ_GFP_D_BT,
];

/// Every protocol known to the catalog, in a fixed order.
pub fn supported_spdz_protocols() -> &'static [SpdzProtocol] {
    &SUPPORTED
}

impl SpdzProtocol {
    /// Find a catalog protocol by its shorthand.
    ///
    /// * `shorthand`: machine code, e.g. `"Dp"`
    pub fn from_shorthand(shorthand: &str) -> Option<Self> {
        SUPPORTED.iter().find(|p| p.shorthand == shorthand).copied()
    }

    /// Family of a catalog protocol, `None` for values outside the catalog.
    pub fn family(&self) -> Option<ProtocolFamily> {
        match *self {
            SPDZ_GFP | SPDZ_GF2N | SPDZ_GFP_BT => Some(ProtocolFamily::Default),
            SPDZ_GFP_D | SPDZ_GF2N_D | SPDZ_GFP_D_BT => Some(ProtocolFamily::SemiHonest),
            _ => None,
        }
    }

    /// Whether this protocol only produces binary triples.
    pub fn is_binary(&self) -> bool {
        *self == SPDZ_GFP_BT || *self == SPDZ_GFP_D_BT
    }
}

impl fmt::Display for SpdzProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor)
    }
}

impl FromStr for SpdzProtocol {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_shorthand(s).ok_or_else(|| CatalogError::UnknownProtocol(s.to_owned()))
    }
}

// Protocols travel (and sit in config files) as their shorthand.
impl Serialize for SpdzProtocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.shorthand)
    }
}

impl<'de> Deserialize<'de> for SpdzProtocol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shorthand = String::deserialize(deserializer)?;
        shorthand.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn six_protocols_in_order() {
        let shorthands = supported_spdz_protocols()
            .iter()
            .map(|p| p.shorthand)
            .collect_vec();
        assert_eq!(shorthands, ["p", "2", "Dp", "D2", "TT", "DB"]);
    }

    #[test]
    fn shorthands_are_unique() {
        assert!(supported_spdz_protocols()
            .iter()
            .map(|p| p.shorthand)
            .all_unique());
    }

    #[test]
    fn binary_protocols_live_in_gfp() {
        assert_eq!(SPDZ_GFP_BT.domain, GFP);
        assert_eq!(SPDZ_GFP_D_BT.domain, GFP);
        assert!(SPDZ_GFP_BT.is_binary());
        assert!(!SPDZ_GFP.is_binary());
    }

    #[test]
    fn families() {
        assert_eq!(SPDZ_GF2N.family(), Some(ProtocolFamily::Default));
        assert_eq!(SPDZ_GFP_BT.family(), Some(ProtocolFamily::Default));
        assert_eq!(SPDZ_GF2N_D.family(), Some(ProtocolFamily::SemiHonest));
        assert_eq!(SPDZ_GFP_D_BT.family(), Some(ProtocolFamily::SemiHonest));

        let stranger = SpdzProtocol {
            descriptor: "SPDZ gfp",
            shorthand: "p",
            domain: GF2N,
        };
        assert_eq!(stranger.family(), None);
    }

    #[test]
    fn parse_shorthand() {
        let p: SpdzProtocol = "D2".parse().unwrap();
        assert_eq!(p, SPDZ_GF2N_D);
        assert!(matches!(
            "Q".parse::<SpdzProtocol>(),
            Err(CatalogError::UnknownProtocol(s)) if s == "Q"
        ));
    }

    #[test]
    fn serde_as_shorthand() {
        #[derive(serde::Deserialize)]
        struct Settings {
            protocol: SpdzProtocol,
        }

        let settings: Settings = serde_json::from_str(r#"{"protocol": "Dp"}"#).unwrap();
        assert_eq!(settings.protocol, SPDZ_GFP_D);
        assert_eq!(serde_json::to_string(&SPDZ_GFP_BT).unwrap(), r#""TT""#);
        assert!(serde_json::from_str::<Settings>(r#"{"protocol": "x"}"#).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(SPDZ_GF2N.to_string(), "SPDZ gf2n_");
        assert_eq!(GF2N.to_string(), "GF2n");
    }
}
