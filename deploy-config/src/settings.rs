//! Key/value providers for raw configuration input.
//!
//! The builders never read ambient process state themselves. They take an
//! explicit [`Source`], so production code can hand them a prefixed
//! environment view while tests hand them a synthetic map.

use std::collections::HashMap;

/// A flat mapping from string keys to string values. How it is populated
/// (env vars, files, secret managers) is the provider's concern.
pub trait Source {
    fn get(&self, key: &str) -> Option<String>;
}

/// An in-memory source, for tests and programmatic assembly.
#[derive(Debug, Clone, Default)]
pub struct MapSource(HashMap<String, String>);

impl Source for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapSource(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A view of the process environment restricted to one chain's prefix.
///
/// `EnvSource::new("CELO").get("RPC")` reads `CELO_RPC`, following the
/// `<CHAIN>_RPC` / `<CHAIN>_DEPLOYER_KEY` convention. The prefix is
/// uppercased so a chain name can be used directly.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl AsRef<str>) -> Self {
        EnvSource {
            prefix: prefix.as_ref().to_uppercase(),
        }
    }
}

impl Source for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{key}", self.prefix)).ok()
    }
}
