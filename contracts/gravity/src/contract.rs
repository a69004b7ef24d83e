use cosmwasm_std::{
    to_json_binary, Addr, Api, Deps, DepsMut, Empty, Env, Event, HexBinary, MessageInfo,
    QueryResponse, Response,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use gravity_valset::{BridgeValidators, Valset};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::queries;
use crate::state::config::{Config, CONFIG};
use crate::state::valset::save_valset;
use crate::withdraw::withdraw_erc20;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deploys the bridge with its initial validator set.
///
/// The set is checked for shape, then for power, then the access control address is checked.
/// The resulting genesis checkpoint is stored and reported in a `valset_updated` event.
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let members = BridgeValidators::from_parts(&msg.validators, &msg.powers)?;
    members.check_power(msg.power_threshold)?;
    let access_control = validate_access_control(deps.api, &msg.access_control)?;

    let valset = Valset::genesis(members);
    let checkpoint = valset.checkpoint(&msg.gravity_id)?;
    save_valset(deps.storage, &valset, &checkpoint)?;

    let cfg = Config {
        gravity_id: msg.gravity_id,
        power_threshold: msg.power_threshold,
        access_control,
    };
    CONFIG.save(deps.storage, &cfg)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let event = Event::new("valset_updated")
        .add_attribute("nonce", valset.nonce.to_string())
        .add_attribute("checkpoint", HexBinary::from(checkpoint).to_hex())
        .add_attribute("validators", valset.members.len().to_string())
        .add_attribute("total_power", valset.members.total_power().to_string())
        .add_attribute("reward_amount", valset.reward_amount.to_string())
        .add_attribute("reward_token", valset.reward_token);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("gravity_id", cfg.gravity_id)
        .add_attribute("access_control", cfg.access_control)
        .add_event(event))
}

/// The access control contract must be a valid account that is not the all zero address
fn validate_access_control(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    let addr = api
        .addr_validate(address)
        .map_err(|_| ContractError::AccessControlAddressIncorrect)?;
    let canonical = api
        .addr_canonicalize(addr.as_str())
        .map_err(|_| ContractError::AccessControlAddressIncorrect)?;
    if canonical.as_slice().iter().all(|b| *b == 0) {
        return Err(ContractError::AccessControlAddressIncorrect);
    }
    Ok(addr)
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::WithdrawErc20 { token } => withdraw_erc20(deps, env, info, token),
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&queries::config(deps)?)?),
        QueryMsg::AccessControl {} => Ok(to_json_binary(&queries::access_control(deps)?)?),
        QueryMsg::ValidatorSet {} => Ok(to_json_binary(&queries::validator_set(deps)?)?),
        QueryMsg::LastValsetCheckpoint {} => {
            Ok(to_json_binary(&queries::last_valset_checkpoint(deps)?)?)
        }
        QueryMsg::LastValsetNonce {} => Ok(to_json_binary(&queries::last_valset_nonce(deps)?)?),
    }
}

pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
