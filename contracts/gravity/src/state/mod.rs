//! state is the module that manages the bridge's persisted state
pub mod config;
pub mod valset;
