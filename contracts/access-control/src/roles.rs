use cosmwasm_std::{Addr, Deps, DepsMut, Empty, MessageInfo, Response, Storage};
use cw_utils::nonpayable;

use crate::error::ContractError;
use crate::state::{Role, ROLES};

pub(crate) fn has_role(storage: &dyn Storage, role: Role, addr: &Addr) -> bool {
    ROLES.has(storage, (role.as_str(), addr))
}

// Helper function to check caller is an admin
fn check_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !has_role(deps.storage, Role::Admin, sender) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Grants `role` to `addr` without any authorization check. Only for instantiation.
pub(crate) fn init_role(
    storage: &mut dyn Storage,
    role: Role,
    addr: &Addr,
) -> Result<(), ContractError> {
    ROLES.save(storage, (role.as_str(), addr), &Empty {})?;
    Ok(())
}

pub(crate) fn grant_role(
    deps: DepsMut,
    info: &MessageInfo,
    role: Role,
    address: &str,
) -> Result<Response, ContractError> {
    nonpayable(info)?;
    check_admin(deps.as_ref(), &info.sender)?;

    let addr = deps.api.addr_validate(address)?;
    if has_role(deps.storage, role, &addr) {
        return Err(ContractError::RoleAlreadyGranted {
            role,
            address: addr.into_string(),
        });
    }
    init_role(deps.storage, role, &addr)?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", addr)
        .add_attribute("sender", &info.sender))
}

pub(crate) fn revoke_role(
    deps: DepsMut,
    info: &MessageInfo,
    role: Role,
    address: &str,
) -> Result<Response, ContractError> {
    nonpayable(info)?;
    check_admin(deps.as_ref(), &info.sender)?;

    let addr = deps.api.addr_validate(address)?;
    if !has_role(deps.storage, role, &addr) {
        return Err(ContractError::RoleNotGranted {
            role,
            address: addr.into_string(),
        });
    }
    ROLES.remove(deps.storage, (role.as_str(), &addr));

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", addr)
        .add_attribute("sender", &info.sender))
}
