use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub(crate) const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Config {
    /// Unique identifier of this bridge deployment, mixed into every checkpoint
    pub gravity_id: String,
    /// Minimum cumulative validator power for a validator set to be accepted
    pub power_threshold: u64,
    /// Contract consulted for admin-gated operations
    pub access_control: Addr,
}
