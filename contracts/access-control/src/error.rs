use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

use crate::state::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("Sender must be an admin")]
    Unauthorized,
    #[error("{address} already has the {role} role")]
    RoleAlreadyGranted { role: Role, address: String },
    #[error("{address} does not have the {role} role")]
    RoleNotGranted { role: Role, address: String },
}
