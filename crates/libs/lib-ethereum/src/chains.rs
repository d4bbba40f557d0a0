//! Chain-id lookup table and network descriptor.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Network descriptor derived from the provider's chain id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Decimal chain id, e.g. `"4"`.
    pub id: String,
    /// Network name, e.g. `"rinkeby"`.
    pub name: String,
}

impl ChainInfo {
    /// Build a descriptor from a decimal chain-id string.
    pub fn from_decimal_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = chain_name(&id).to_owned();
        ChainInfo { id, name }
    }

    /// Build a descriptor from the provider's hex chain id (`"0x4"`).
    pub fn from_hex_id(raw: &str) -> Result<Self, Error> {
        Ok(Self::from_decimal_id(hex_chain_id_to_decimal(raw)?))
    }
}

/// Resolve a decimal chain-id string to a network name.
///
/// Locally generated development chains pick large ids, so any nonzero id
/// longer than nine digits maps to `"local"`. Unrecognized ids map to
/// `"unknown"`.
pub fn chain_name(chain_id: &str) -> &'static str {
    if is_nonzero_numeric(chain_id) && chain_id.len() > 9 {
        return "local";
    }
    match chain_id {
        "1" => "mainnet",
        "3" => "ropsten",
        "4" => "rinkeby",
        "5" => "goerli",
        "42" => "kovan",
        _ => "unknown",
    }
}

fn is_nonzero_numeric(chain_id: &str) -> bool {
    chain_id.parse::<u128>().map(|n| n != 0).unwrap_or(false)
}

/// Convert a hex chain id (`"0x4"`) to its decimal string form.
pub fn hex_chain_id_to_decimal(raw: &str) -> Result<String, Error> {
    let digits = raw.trim_start_matches("0x").trim_start_matches("0X");
    u128::from_str_radix(digits, 16)
        .map(|n| n.to_string())
        .map_err(|_| Error::InvalidChainId(raw.to_owned()))
}
