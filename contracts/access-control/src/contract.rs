#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Empty, Env, MessageInfo, Order, QueryResponse, Response,
    StdResult,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::msg::{AdminsResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::roles::{grant_role, has_role, init_role, revoke_role};
use crate::state::{Role, ROLES};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    // The deployer is the first admin
    init_role(deps.storage, Role::Admin, &info.sender)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddAdminRole { address } => grant_role(deps, &info, Role::Admin, &address),
        ExecuteMsg::RemoveAdminRole { address } => revoke_role(deps, &info, Role::Admin, &address),
        ExecuteMsg::AddWhitelistRole { address } => {
            grant_role(deps, &info, Role::Whitelist, &address)
        }
        ExecuteMsg::RemoveWhitelistRole { address } => {
            revoke_role(deps, &info, Role::Whitelist, &address)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    match msg {
        QueryMsg::HasAdminRole { address } => {
            Ok(to_json_binary(&query_has_role(deps, Role::Admin, address)?)?)
        }
        QueryMsg::HasWhitelistRole { address } => Ok(to_json_binary(&query_has_role(
            deps,
            Role::Whitelist,
            address,
        )?)?),
        QueryMsg::Admins { start_after, limit } => {
            Ok(to_json_binary(&query_admins(deps, start_after, limit)?)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}

fn query_has_role(deps: Deps, role: Role, address: String) -> StdResult<bool> {
    let addr = deps.api.addr_validate(&address)?;
    Ok(has_role(deps.storage, role, &addr))
}

fn query_admins(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AdminsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let admins = ROLES
        .prefix(Role::Admin.as_str())
        .keys(
            deps.storage,
            start_after.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(AdminsResponse { admins })
}
