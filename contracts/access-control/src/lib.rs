pub mod contract;
pub mod error;
pub mod msg;
mod roles;
pub mod state;
