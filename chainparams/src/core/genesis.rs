use serde::{Deserialize, Serialize};

/// Header constants of a network's genesis block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlock {
    /// Block hash in internal (little-endian) byte order.
    pub hash: [u8; 32],
    /// Merkle root in internal byte order.
    pub merkle_root: [u8; 32],
    pub version: i32,
    /// Header timestamp, seconds since the Unix epoch.
    pub time: u32,
    /// Compact difficulty target of the header.
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisBlock {
    /// Block hash in the reversed hex form shown by explorers and nodes.
    pub fn hash_hex(&self) -> String {
        let mut bytes = self.hash;
        bytes.reverse();
        faster_hex::hex_string(&bytes)
    }
}

// Note these are binary format, not display format which is reversed.
const GENESIS_HASH: [u8; 32] = [
    0x6f, 0xe2, 0x8c, 0x0a, 0xb6, 0xf1, 0xb3, 0x72, 0xc1, 0xa6, 0xa2, 0x46, 0xae, 0x63, 0xf7, 0x4f,
    0x93, 0x1e, 0x83, 0x65, 0xe1, 0x5a, 0x08, 0x9c, 0x68, 0xd6, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const TESTNET_GENESIS_HASH: [u8; 32] = [
    0x43, 0x49, 0x7f, 0xd7, 0xf8, 0x26, 0x95, 0x71, 0x08, 0xf4, 0xa3, 0x0f, 0xd9, 0xce, 0xc3, 0xae,
    0xba, 0x79, 0x97, 0x20, 0x84, 0xe9, 0x0e, 0xad, 0x01, 0xea, 0x33, 0x09, 0x00, 0x00, 0x00, 0x00,
];
const REGTEST_GENESIS_HASH: [u8; 32] = [
    0x06, 0x22, 0x6e, 0x46, 0x11, 0x1a, 0x0b, 0x59, 0xca, 0xaf, 0x12, 0x60, 0x43, 0xeb, 0x5b, 0xbf,
    0x28, 0xc3, 0x4f, 0x3a, 0x5e, 0x33, 0x2a, 0x1f, 0xc7, 0xb2, 0xb7, 0x3c, 0xf1, 0x88, 0x91, 0x0f,
];

// The same coinbase transaction roots every genesis block.
const GENESIS_MERKLE_ROOT: [u8; 32] = [
    0x3b, 0xa3, 0xed, 0xfd, 0x7a, 0x7b, 0x12, 0xb2, 0x7a, 0xc7, 0x2c, 0x3e, 0x67, 0x76, 0x8f, 0x61,
    0x7f, 0xc8, 0x1b, 0xc3, 0x88, 0x8a, 0x51, 0x32, 0x3a, 0x9f, 0xb8, 0xaa, 0x4b, 0x1e, 0x5e, 0x4a,
];

pub const GENESIS: GenesisBlock = GenesisBlock {
    hash: GENESIS_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1231006505,
    bits: 0x1d00ffff,
    nonce: 2083236893,
};

pub const TESTNET_GENESIS: GenesisBlock = GenesisBlock {
    hash: TESTNET_GENESIS_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1296688602,
    bits: 0x1d00ffff,
    nonce: 414098458,
};

pub const REGTEST_GENESIS: GenesisBlock = GenesisBlock {
    hash: REGTEST_GENESIS_HASH,
    merkle_root: GENESIS_MERKLE_ROOT,
    version: 1,
    time: 1296688602,
    bits: 0x207fffff,
    nonce: 2,
};
