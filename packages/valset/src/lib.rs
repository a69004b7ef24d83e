pub mod checkpoint;
pub mod error;
pub mod eth_address;
pub mod validators;

pub use checkpoint::{Checkpoint, Valset, ZERO_ETH_ADDRESS};
pub use error::ValsetError;
pub use validators::{BridgeValidator, BridgeValidators};
