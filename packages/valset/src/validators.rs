use std::collections::{BTreeMap, HashSet};

use alloy_primitives::{Address, U256};
use cosmwasm_schema::cw_serde;

use crate::error::ValsetError;
use crate::eth_address::{normalize_eth_address, parse_eth_address};

/// A bridge validator: an Ethereum signing address and its voting power
#[cw_serde]
pub struct BridgeValidator {
    /// `0x`-prefixed, lower case Ethereum address
    pub ethereum_address: String,
    pub power: u64,
}

/// An ordered, non-empty list of bridge validators with unique addresses.
///
/// The order is significant: it is the order committed to by the checkpoint.
#[cw_serde]
pub struct BridgeValidators {
    members: Vec<BridgeValidator>,
}

impl BridgeValidators {
    /// Builds a validator set out of parallel address and power lists.
    ///
    /// Fails with [`ValsetError::MalformedValset`] if the lists differ in length, are empty,
    /// or repeat an address.
    pub fn from_parts(validators: &[String], powers: &[u64]) -> Result<Self, ValsetError> {
        if validators.len() != powers.len() || validators.is_empty() {
            return Err(ValsetError::MalformedValset);
        }
        let members = validators
            .iter()
            .zip(powers)
            .map(|(addr, power)| {
                Ok(BridgeValidator {
                    ethereum_address: normalize_eth_address(addr)?,
                    power: *power,
                })
            })
            .collect::<Result<Vec<_>, ValsetError>>()?;

        let set = BridgeValidators { members };
        set.validate()?;
        Ok(set)
    }

    /// Checks the set invariants on an already constructed (e.g. deserialized) set
    pub fn validate(&self) -> Result<(), ValsetError> {
        if self.members.is_empty() {
            return Err(ValsetError::MalformedValset);
        }
        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            let addr = parse_eth_address(&member.ethereum_address)?;
            if !seen.insert(addr) {
                return Err(ValsetError::MalformedValset);
            }
        }
        Ok(())
    }

    pub fn members(&self) -> &[BridgeValidator] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of all member powers. Widened so that it can never overflow.
    pub fn total_power(&self) -> u128 {
        self.members.iter().map(|v| u128::from(v.power)).sum()
    }

    /// Returns whether the cumulative power meets `threshold`
    pub fn has_power(&self, threshold: u64) -> bool {
        self.total_power() >= u128::from(threshold)
    }

    /// Fails with [`ValsetError::InsufficientPower`] unless [`Self::has_power`] holds
    pub fn check_power(&self, threshold: u64) -> Result<(), ValsetError> {
        if !self.has_power(threshold) {
            return Err(ValsetError::InsufficientPower);
        }
        Ok(())
    }

    /// Sorts into canonical order: power descending, then address ascending.
    ///
    /// Addresses are stored lower case and fixed length, so string order is byte order.
    // Changing this order changes every checkpoint computed off a sorted set
    pub fn sort(&mut self) {
        self.members.sort_by(|a, b| {
            b.power
                .cmp(&a.power)
                .then_with(|| a.ethereum_address.cmp(&b.ethereum_address))
        });
    }

    /// Normalised power difference between two sets.
    ///
    /// Sums the absolute per-address power deltas (an address missing on one side counts with
    /// power 0) and divides by `u32::MAX`, the scale validator powers are normalised to.
    pub fn power_diff(&self, other: &BridgeValidators) -> f64 {
        let mut deltas: BTreeMap<&str, i128> = BTreeMap::new();
        for v in &self.members {
            *deltas.entry(v.ethereum_address.as_str()).or_default() += i128::from(v.power);
        }
        for v in &other.members {
            *deltas.entry(v.ethereum_address.as_str()).or_default() -= i128::from(v.power);
        }
        let delta: u128 = deltas.values().map(|d| d.unsigned_abs()).sum();
        delta as f64 / f64::from(u32::MAX)
    }

    /// Splits the set into the parallel ABI arrays used by the checkpoint
    pub(crate) fn abi_parts(&self) -> Result<(Vec<Address>, Vec<U256>), ValsetError> {
        let mut addresses = Vec::with_capacity(self.members.len());
        let mut powers = Vec::with_capacity(self.members.len());
        for member in &self.members {
            addresses.push(parse_eth_address(&member.ethereum_address)?);
            powers.push(U256::from(member.power));
        }
        Ok((addresses, powers))
    }
}
