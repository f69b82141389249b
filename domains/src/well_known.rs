//! Domains for the named networks of the current deployment universe.
//!
//! Each constant records the tag it encodes so the values stay auditable
//! against the encoding in [`Domain::from_tag`](crate::Domain::from_tag).

use crate::Domain;

/// Celo mainnet, tag `"celo"`.
pub const CELO: Domain = Domain(0x6365_6c6f);

/// Ethereum mainnet, tag `"eth"`.
pub const ETHEREUM: Domain = Domain(0x0065_7468);

/// Kovan testnet, tag `"kova"`.
pub const KOVAN: Domain = Domain(0x6b6f_7661);

/// Alfajores, the Celo testnet, tag `"alfa"`.
pub const ALFAJORES: Domain = Domain(0x616c_6661);

/// Look up the conventional name for a well-known domain.
pub fn name(domain: Domain) -> Option<&'static str> {
    match domain {
        CELO => Some("celo"),
        ETHEREUM => Some("ethereum"),
        KOVAN => Some("kovan"),
        ALFAJORES => Some("alfajores"),
        _ => None,
    }
}
