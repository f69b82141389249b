//! The chain descriptor: which network a deployment targets and how to
//! reach it.

use lattice_domains::Domain;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, settings::Source, DeployerKey};

/// A validated description of one network.
///
/// Constructed once from raw input via [`ChainConf::build`] and immutable
/// thereafter. The deployer key never appears in serialized output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ChainDescriptor {
    /// Short network label, unique within a deployment universe.
    pub name: String,

    /// The chain's domain identifier. Uniqueness across all configured
    /// chains is the caller's invariant.
    #[cfg_attr(feature = "schemars", schemars(with = "u32"))]
    pub domain: Domain,

    /// RPC endpoint for the chain. Always present and non-empty; nothing
    /// can be deployed without it.
    pub rpc: String,

    /// Credential for signing deployment transactions. Absent in read-only
    /// and dry-run contexts.
    #[serde(skip)]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    pub deployer_key: Option<DeployerKey>,
}

/// Raw, unvalidated input for a [`ChainDescriptor`].
///
/// Fields mirror what an external loader can actually source: everything
/// optional except the name, with validation deferred to [`build`].
///
/// [`build`]: ChainConf::build
#[derive(Debug, Clone, Default)]
pub struct ChainConf {
    pub name: String,
    /// Precomputed domain. Takes precedence over tag derivation.
    pub domain: Option<Domain>,
    /// ASCII tag to derive the domain from when no numeric domain is given.
    /// When this is also absent, the chain name itself is used as the tag.
    pub tag: Option<String>,
    pub rpc: Option<String>,
    pub deployer_key: Option<DeployerKey>,
}

impl ChainConf {
    /// Read the raw chain fields from a key/value provider.
    ///
    /// Keys follow the `<CHAIN>_RPC` / `<CHAIN>_DEPLOYER_KEY` convention;
    /// the provider owns the prefixing (see [`EnvSource`]). Reading is
    /// total: validation happens in [`build`](Self::build), not here.
    ///
    /// [`EnvSource`]: crate::settings::EnvSource
    pub fn from_source(name: impl Into<String>, source: &impl Source) -> Self {
        ChainConf {
            name: name.into(),
            domain: None,
            tag: None,
            rpc: source.get("RPC"),
            deployer_key: source.get("DEPLOYER_KEY").map(DeployerKey::new),
        }
    }

    /// Validate the raw input and produce a [`ChainDescriptor`].
    ///
    /// Fails fast: a missing or empty RPC endpoint makes every subsequent
    /// deployment action undefined, so it propagates immediately rather
    /// than being accumulated with other errors. Performs no network
    /// access.
    pub fn build(self) -> Result<ChainDescriptor, ConfigError> {
        let rpc = match self.rpc {
            Some(rpc) if !rpc.is_empty() => rpc,
            _ => return Err(ConfigError::MissingRequiredField { field: "rpc" }),
        };

        let domain = match self.domain {
            Some(domain) => domain,
            None => {
                let tag = self.tag.as_deref().unwrap_or(&self.name);
                Domain::from_tag(tag)?
            }
        };

        Ok(ChainDescriptor {
            name: self.name,
            domain,
            rpc,
            deployer_key: self.deployer_key,
        })
    }
}
