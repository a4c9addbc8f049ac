use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(thiserror::Error, PartialEq, Eq, Debug, Clone)]
pub enum NetworkError {
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, BorshSerialize, BorshDeserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        static NETWORKS: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];
        NETWORKS.iter().copied()
    }
}

impl FromStr for Network {
    type Err = NetworkError;
    fn from_str(network: &str) -> Result<Self, Self::Err> {
        match network.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(NetworkError::InvalidNetwork(network.to_string())),
        }
    }
}

impl Display for Network {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        };
        f.write_str(s)
    }
}
