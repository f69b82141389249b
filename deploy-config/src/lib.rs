//! Validated per-chain deployment configuration for the Lattice bridge core.
//!
//! A deployment targets exactly one chain. This crate turns raw key/value
//! configuration input into the strongly-typed, validated triple the
//! deployment pipeline consumes:
//!
//! - [`ChainDescriptor`] identifies the network itself: name, domain, RPC
//!   endpoint, optional deployer credential.
//! - [`CoreSecurityConfig`] carries the updater/watcher security parameters
//!   of the bridge core deployed onto that chain.
//! - [`BridgeExtensionConfig`] optionally configures the token-bridge
//!   extension; empty means the extension is not deployed.
//!
//! Construction is pure validation. Nothing in this crate performs network
//! access, and no partially-validated state escapes: either all three parts
//! validate and a [`ChainDeployment`] is produced, or construction fails
//! with a structured error report.

#![deny(warnings)]
#![deny(unused_results)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub mod bridge;
pub mod chain;
pub mod core;
pub mod deployment;
pub mod error;
pub mod settings;

pub use crate::bridge::BridgeExtensionConfig;
pub use crate::chain::{ChainConf, ChainDescriptor};
pub use crate::core::{CoreConf, CoreSecurityConfig, Policy};
pub use crate::deployment::ChainDeployment;
pub use crate::error::{ConfigError, ConfigErrors};
pub use crate::settings::{EnvSource, MapSource, Source};
pub use lattice_domains::Domain;

/// Raised when an address string fails format validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidAddressError {
    /// The string does not carry the `0x` prefix.
    #[error("address {0:?} does not start with 0x")]
    MissingPrefix(String),

    /// The string is not exactly 40 hex digits after the prefix.
    #[error("address {0:?} is not 20 bytes")]
    BadLength(String),

    /// The string contains a non-hex character.
    #[error("address {0:?} is not valid hex: {1}")]
    BadHex(String, hex::FromHexError),
}

/// A 20-byte account address, the form used by every on-chain role in a
/// deployment config (updater, recovery manager, watchers, governor).
///
/// Serializes as a `0x`-prefixed lowercase hex string, the form operators
/// write in config files; parsing accepts either case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for Address {
    type Err = InvalidAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| InvalidAddressError::MissingPrefix(s.to_string()))?;

        if digits.len() != 40 {
            return Err(InvalidAddressError::BadLength(s.to_string()));
        }

        let mut buf = [0u8; 20];
        hex::decode_to_slice(digits, &mut buf)
            .map_err(|e| InvalidAddressError::BadHex(s.to_string(), e))?;

        Ok(Address(buf))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <String as Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Address {
    fn schema_name() -> String {
        "Address".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        gen.subschema_for::<String>()
    }
}

/// Credential material used to sign deployment transactions.
///
/// The key is opaque to this crate and treated as sensitive everywhere: it
/// is excluded from serialization, and `Debug`/`Display` redact it. Absence
/// is valid (read-only and dry-run contexts).
#[derive(Clone, PartialEq, Eq)]
pub struct DeployerKey(String);

impl DeployerKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Hand the raw key to a signer. The only way the material leaves this
    /// type.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeployerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeployerKey(<redacted>)")
    }
}

impl fmt::Display for DeployerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Raised when an environment tag is not one of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid environment: {0:?}")]
pub struct InvalidEnvironmentError(String);

/// The deployment tier. Downstream policy (confirmation counts, validation
/// strictness) keys off this tag.
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Staging,
    Prod,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Environment::Dev => "dev",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        };

        f.write_str(s)
    }
}

impl FromStr for Environment {
    type Err = InvalidEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "staging" => Ok(Environment::Staging),
            "prod" => Ok(Environment::Prod),
            other => Err(InvalidEnvironmentError(other.to_string())),
        }
    }
}
