use alloy_primitives::{keccak256, Address};
use k256::ecdsa::SigningKey;

/// Power distribution on the Cosmos Hub as of 2020-07-14
const EXAMPLE_POWERS: [u64; 130] = [
    707, 621, 608, 439, 412, 407, 319, 312, 311, 303, 246, 241, 224, 213, 194, 175, 173, 170, 154,
    149, 139, 123, 119, 113, 110, 107, 105, 104, 92, 90, 88, 88, 88, 85, 85, 84, 82, 70, 67, 64, 59,
    58, 56, 55, 52, 52, 52, 50, 49, 44, 42, 40, 39, 38, 37, 37, 36, 35, 34, 33, 33, 33, 32, 31, 30,
    30, 29, 28, 27, 26, 25, 24, 23, 23, 22, 22, 22, 21, 21, 20, 19, 18, 17, 16, 14, 14, 13, 13, 11,
    10, 10, 10, 10, 10, 9, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2,
    2, 2, 2, 1, 1, 1, 1, 1, 1, 1,
];

pub fn example_powers() -> Vec<u64> {
    EXAMPLE_POWERS.to_vec()
}

/// A deterministic secp256k1 identity
pub struct Signer {
    /// Secret key, for fixtures that sign
    pub key: SigningKey,
    /// `0x`-prefixed, lower case
    pub eth_address: String,
}

impl Signer {
    fn from_index(i: usize) -> Self {
        let mut secret = [0u8; 32];
        secret[24..].copy_from_slice(&(i as u64 + 1).to_be_bytes());
        let key = SigningKey::from_slice(&secret).unwrap();
        let eth_address = eth_address(&key);
        Signer { key, eth_address }
    }
}

fn eth_address(key: &SigningKey) -> String {
    let point = key.verifying_key().to_encoded_point(false);
    // drop the 0x04 uncompressed point tag
    let hash = keccak256(&point.as_bytes()[1..]);
    let addr = Address::from_slice(&hash[12..]);
    format!("0x{}", hex::encode(addr.as_slice()))
}

/// The first `n` signers, secret keys `1..=n`
pub fn signers(n: usize) -> Vec<Signer> {
    (0..n).map(Signer::from_index).collect()
}

/// Ethereum addresses of the first `n` signers paired with the example powers
pub fn example_validators(n: usize) -> (Vec<String>, Vec<u64>) {
    let validators = signers(n).into_iter().map(|s| s.eth_address).collect();
    let powers = EXAMPLE_POWERS.iter().copied().take(n).collect();
    (validators, powers)
}
