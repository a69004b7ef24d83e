use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValsetError {
    #[error("Malformed current validator set")]
    MalformedValset,
    #[error("Submitted validator set signatures do not have enough power")]
    InsufficientPower,
    #[error("Invalid Ethereum address: {0}")]
    InvalidEthAddress(String),
    #[error("Gravity id must be between 1 and 32 bytes long: {0:?}")]
    InvalidGravityId(String),
}
