use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, WasmMsg};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_utils::nonpayable;
use gravity_apis::AccessControlContract;

use crate::error::ContractError;
use crate::state::config::CONFIG;

/// Transfers the bridge's entire balance of `token` to the sender, if the sender is an admin
pub fn withdraw_erc20(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let cfg = CONFIG.load(deps.storage)?;
    let access_control = AccessControlContract(cfg.access_control);
    if !access_control.has_admin_role(&deps.querier, &info.sender)? {
        return Err(ContractError::RecipientNotAdmin);
    }

    let token = deps.api.addr_validate(&token)?;
    let BalanceResponse { balance }: BalanceResponse = deps.querier.query_wasm_smart(
        &token,
        &Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    let mut res = Response::new()
        .add_attribute("action", "withdraw_erc20")
        .add_attribute("token", &token)
        .add_attribute("recipient", &info.sender)
        .add_attribute("amount", balance.to_string());

    // cw20 rejects zero amount transfers
    if !balance.is_zero() {
        res = res.add_message(WasmMsg::Execute {
            contract_addr: token.into_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: info.sender.into_string(),
                amount: balance,
            })?,
            funds: vec![],
        });
    }
    Ok(res)
}
