use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, CustomQuery, QuerierWrapper, StdResult};

/// Queries answered by the access control contract.
///
/// Other contracts (e.g. the Gravity bridge) use these to gate privileged operations.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// `HasAdminRole` returns whether `address` holds the admin role
    #[returns(bool)]
    HasAdminRole { address: String },
    /// `HasWhitelistRole` returns whether `address` holds the whitelist role
    #[returns(bool)]
    HasWhitelistRole { address: String },
    /// `Admins` returns the holders of the admin role, in address order.
    ///
    /// `start_after` is the address to start after, or `None` to start from the beginning
    #[returns(AdminsResponse)]
    Admins {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct AdminsResponse {
    pub admins: Vec<Addr>,
}

/// Thin wrapper around the address of a deployed access control contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessControlContract(pub Addr);

impl AccessControlContract {
    pub fn has_admin_role<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        address: &Addr,
    ) -> StdResult<bool> {
        querier.query_wasm_smart(
            &self.0,
            &QueryMsg::HasAdminRole {
                address: address.to_string(),
            },
        )
    }
}
