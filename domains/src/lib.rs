//! Provide the `Domain` chain identifier and its tag encoding.
//!
//! A domain is the 32-bit value that identifies one chain within the
//! protocol's cross-chain address space. These are universally defined among
//! all deployed contracts: every message names its origin and destination by
//! domain, and a deployment config names the chain it targets by domain.
//!
//! Domains are conventionally derived from a short ASCII tag (the chain's
//! ticker or common name) read as a big-endian integer, so the numeric value
//! stays human-auditable in block explorers and config files. The encoding is
//! a fixed mapping, not a hash; keeping tags distinct across a deployment
//! universe is the operator's responsibility.

#![deny(warnings)]
#![deny(unused_results)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod well_known;

/// Raised when a tag cannot be encoded as a domain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTagError {
    /// The tag was empty.
    #[error("domain tag is empty")]
    Empty,

    /// The tag was longer than the 4 bytes a `u32` can hold. Over-long tags
    /// are rejected rather than truncated: truncation could silently map two
    /// distinct tags to the same domain.
    #[error("domain tag {0:?} is {1} bytes; max 4")]
    TooLong(String, usize),

    /// The tag contained a non-ASCII character.
    #[error("domain tag {0:?} is not ASCII")]
    NotAscii(String),
}

/// Identifies one chain within the cross-chain protocol's address space.
///
/// Serializes as a plain `u32`. Global uniqueness across all configured
/// chains is a deployment-universe invariant that callers must uphold; this
/// type only guarantees that the same tag always encodes to the same value.
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct Domain(pub u32);

impl Domain {
    /// Encode an ASCII tag of 1 to 4 bytes as a domain identifier by reading
    /// its bytes as a big-endian integer.
    ///
    /// The mapping is deterministic and total over its accepted input set:
    /// `from_tag("celo")` is always `Domain(0x63656c6f)`. Empty, over-long,
    /// and non-ASCII tags are rejected.
    pub fn from_tag(tag: &str) -> Result<Self, InvalidTagError> {
        if tag.is_empty() {
            return Err(InvalidTagError::Empty);
        }

        if !tag.is_ascii() {
            return Err(InvalidTagError::NotAscii(tag.to_string()));
        }

        if tag.len() > 4 {
            return Err(InvalidTagError::TooLong(tag.to_string(), tag.len()));
        }

        let id = tag
            .bytes()
            .fold(0u32, |acc, b| (acc << 8) | u32::from(b));

        Ok(Domain(id))
    }

    /// Recover the ASCII tag this domain was derived from, if every non-zero
    /// byte of the identifier is printable ASCII. Returns `None` for domains
    /// that were assigned numerically.
    pub fn as_tag(&self) -> Option<String> {
        let bytes = self.0.to_be_bytes();
        let start = bytes.iter().position(|b| *b != 0)?;

        let tag = &bytes[start..];
        if tag.iter().all(|b| b.is_ascii_graphic()) {
            Some(String::from_utf8_lossy(tag).into_owned())
        } else {
            None
        }
    }
}

impl From<u32> for Domain {
    fn from(id: u32) -> Self {
        Domain(id)
    }
}

impl From<Domain> for u32 {
    fn from(d: Domain) -> Self {
        d.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Domain {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Domain)
    }
}
