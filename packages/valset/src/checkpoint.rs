//! Ethereum compatible validator set checkpoints.
//!
//! A checkpoint is `keccak256(abi.encode(gravityId, "checkpoint", nonce, validators, powers,
//! rewardAmount, rewardToken))`, i.e. the hash the bridge contract on the Ethereum side stores
//! for its current validator set.
use alloy_primitives::{keccak256, FixedBytes, U256};
use alloy_sol_types::SolValue;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::ValsetError;
use crate::eth_address::parse_eth_address;
use crate::validators::BridgeValidators;

/// Domain separator mixed into every validator set checkpoint
pub const CHECKPOINT_METHOD_NAME: &str = "checkpoint";

pub const ZERO_ETH_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

pub type Checkpoint = [u8; 32];

#[cw_serde]
pub struct Valset {
    pub nonce: u64,
    pub members: BridgeValidators,
    pub reward_amount: Uint128,
    /// Ethereum address of the reward token, the zero address if there is no reward
    pub reward_token: String,
}

impl Valset {
    /// The set a bridge is deployed with: nonce 0 and no reward
    pub fn genesis(members: BridgeValidators) -> Self {
        Valset {
            nonce: 0,
            members,
            reward_amount: Uint128::zero(),
            reward_token: ZERO_ETH_ADDRESS.to_string(),
        }
    }

    pub fn checkpoint(&self, gravity_id: &str) -> Result<Checkpoint, ValsetError> {
        let gravity_id = to_bytes32(gravity_id)
            .ok_or_else(|| ValsetError::InvalidGravityId(gravity_id.to_string()))?;
        // the method name is a constant that always fits
        let method_name = to_bytes32(CHECKPOINT_METHOD_NAME).unwrap_or_default();
        let (validators, powers) = self.members.abi_parts()?;
        let reward_token = parse_eth_address(&self.reward_token)?;

        let encoded = (
            gravity_id,
            method_name,
            U256::from(self.nonce),
            validators,
            powers,
            U256::from(self.reward_amount.u128()),
            reward_token,
        )
            .abi_encode_params();
        Ok(keccak256(encoded).0)
    }
}

/// Right pads a non-empty string of at most 32 bytes with zeros, as Solidity's
/// `bytes32("...")` does
fn to_bytes32(s: &str) -> Option<FixedBytes<32>> {
    let bytes = s.as_bytes();
    if bytes.is_empty() || bytes.len() > 32 {
        return None;
    }
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(bytes);
    Some(FixedBytes(out))
}
