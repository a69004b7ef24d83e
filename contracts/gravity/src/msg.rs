use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};
use gravity_valset::Valset;

use crate::state::config::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Unique identifier of this bridge deployment, 1 to 32 bytes
    pub gravity_id: String,
    /// Minimum cumulative power the initial validator set must reach
    pub power_threshold: u64,
    /// `0x`-prefixed Ethereum addresses of the initial validators
    pub validators: Vec<String>,
    /// Voting power of each validator, in the same order as `validators`
    pub powers: Vec<u64>,
    /// Address of the access control contract
    pub access_control: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Sends the bridge's whole balance of the cw20 `token` to the sender.
    /// Only callable by holders of the admin role
    WithdrawErc20 { token: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    /// `AccessControl` returns the address of the configured access control contract
    #[returns(Addr)]
    AccessControl {},
    /// `ValidatorSet` returns the current validator set
    #[returns(Valset)]
    ValidatorSet {},
    /// `LastValsetCheckpoint` returns the checkpoint of the current validator set
    #[returns(HexBinary)]
    LastValsetCheckpoint {},
    #[returns(u64)]
    LastValsetNonce {},
}
