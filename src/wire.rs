//! Tuple payloads as exchanged with the tuple-serving transport.
//!
//! Scalars stay string-encoded; this layer never interprets them.
//! The JSON shape is
//!
//! ```json
//! {"tuples": [{"shares": [{"value": "...", "mac": "..."}]}]}
//! ```

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One party's share of one secret value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    pub value: String,
    // Empty for schemes without authenticated shares.
    #[serde(default)]
    pub mac: String,
}

impl Share {
    pub fn new(value: impl Into<String>, mac: impl Into<String>) -> Self {
        Share {
            value: value.into(),
            mac: mac.into(),
        }
    }

    /// A share without a MAC.
    pub fn unauthenticated(value: impl Into<String>) -> Self {
        Share {
            value: value.into(),
            mac: String::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.mac.is_empty()
    }
}

/// Shares making up one instance of preprocessed randomness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, Serialize, Deserialize)]
pub struct Tuple {
    pub shares: Vec<Share>,
}

impl From<Vec<Share>> for Tuple {
    fn from(shares: Vec<Share>) -> Self {
        Tuple { shares }
    }
}

impl FromIterator<Share> for Tuple {
    fn from_iter<I: IntoIterator<Item = Share>>(iter: I) -> Self {
        Tuple {
            shares: iter.into_iter().collect(),
        }
    }
}

/// Tuples of a single tuple type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, Serialize, Deserialize)]
pub struct TupleList {
    pub tuples: Vec<Tuple>,
}

#[derive(Error, Debug)]
pub enum WireError {
    #[error("Malformed tuple payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl TupleList {
    /// Number of shares in every tuple.
    ///
    /// `None` if the list is empty or the tuples differ in width.
    pub fn shares_per_tuple(&self) -> Option<usize> {
        let (first, rest) = self.tuples.split_first()?;
        let width = first.len();
        rest.iter().all(|t| t.len() == width).then_some(width)
    }

    #[tracing::instrument(skip_all)]
    pub fn to_json(&self) -> Result<String, WireError> {
        let json = serde_json::to_string(self)?;
        tracing::debug!(tuples = self.tuples.len(), bytes = json.len(), "encoded");
        Ok(json)
    }

    #[tracing::instrument(skip_all)]
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        let list: TupleList = serde_json::from_str(json)?;
        tracing::debug!(tuples = list.tuples.len(), "decoded");
        Ok(list)
    }
}

impl From<Vec<Tuple>> for TupleList {
    fn from(tuples: Vec<Tuple>) -> Self {
        TupleList { tuples }
    }
}

impl FromIterator<Tuple> for TupleList {
    fn from_iter<I: IntoIterator<Item = Tuple>>(iter: I) -> Self {
        TupleList {
            tuples: iter.into_iter().collect(),
        }
    }
}
