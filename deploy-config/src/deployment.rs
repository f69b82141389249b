//! Composition of the validated parts into the unit the deployment
//! pipeline consumes.

use serde::{Deserialize, Serialize};

use crate::{
    bridge::BridgeExtensionConfig,
    chain::{ChainConf, ChainDescriptor},
    core::{CoreConf, CoreSecurityConfig, Policy},
    error::ConfigErrors,
};

/// Everything the pipeline needs to deploy onto one chain: the network
/// identity, the core security parameters, and the (possibly empty)
/// token-bridge extension config.
///
/// Only fully-validated values can exist here; there is no partially-built
/// form. Safe to serialize and log: the deployer key is excluded from the
/// serialized form by [`ChainDescriptor`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct ChainDeployment {
    pub chain: ChainDescriptor,
    pub core: CoreSecurityConfig,
    pub bridge: BridgeExtensionConfig,
}

impl ChainDeployment {
    /// Validate both raw configs and attach the extension config.
    ///
    /// The chain descriptor is built first and its failure propagates
    /// immediately; the core config then validates with full accumulation.
    /// The extension config is passed through as-is.
    pub fn new(
        chain: ChainConf,
        core: CoreConf,
        bridge: BridgeExtensionConfig,
    ) -> Result<Self, ConfigErrors> {
        let policy = Policy::for_environment(core.environment);
        Self::new_with_policy(chain, core, bridge, policy)
    }

    /// Like [`new`](Self::new), with an explicit validation policy for the
    /// core security parameters.
    pub fn new_with_policy(
        chain: ChainConf,
        core: CoreConf,
        bridge: BridgeExtensionConfig,
        policy: Policy,
    ) -> Result<Self, ConfigErrors> {
        let chain = chain.build()?;
        let core = core.build_with_policy(policy)?;

        tracing::debug!(
            name = %chain.name,
            domain = %chain.domain,
            bridge = bridge.is_enabled(),
            "assembled chain deployment config"
        );

        Ok(ChainDeployment {
            chain,
            core,
            bridge,
        })
    }
}
