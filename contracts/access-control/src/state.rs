use std::fmt;

use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::Map;

/// Role holders, keyed by role name and holder address
pub(crate) const ROLES: Map<(&str, &Addr), Empty> = Map::new("roles");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// May grant and revoke roles, and perform admin-gated operations on contracts that
    /// delegate their access control here
    Admin,
    Whitelist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
