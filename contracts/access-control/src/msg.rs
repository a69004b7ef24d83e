use cosmwasm_schema::cw_serde;

pub use gravity_apis::access_control_api::{AdminsResponse, QueryMsg};

/// The instantiating account becomes the first admin
#[cw_serde]
pub struct InstantiateMsg {}

/// All messages can be called by an admin only
#[cw_serde]
pub enum ExecuteMsg {
    AddAdminRole { address: String },
    RemoveAdminRole { address: String },
    AddWhitelistRole { address: String },
    RemoveWhitelistRole { address: String },
}
