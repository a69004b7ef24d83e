use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use gravity_valset::ValsetError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("{0}")]
    Payment(#[from] PaymentError),
    #[error("{0}")]
    Valset(#[from] ValsetError),
    #[error("Access control contract address is incorrect")]
    AccessControlAddressIncorrect,
    #[error("Recipient is not an admin")]
    RecipientNotAdmin,
}
