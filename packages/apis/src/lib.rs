pub mod access_control_api;

pub use access_control_api::AccessControlContract;
