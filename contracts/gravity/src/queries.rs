use cosmwasm_std::{Addr, Deps, HexBinary, StdResult};
use gravity_valset::Valset;

use crate::state::config::{Config, CONFIG};
use crate::state::valset::{LAST_VALSET_CHECKPOINT, VALSET};

pub fn config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn access_control(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.access_control)
}

pub fn validator_set(deps: Deps) -> StdResult<Valset> {
    VALSET.load(deps.storage)
}

pub fn last_valset_checkpoint(deps: Deps) -> StdResult<HexBinary> {
    LAST_VALSET_CHECKPOINT.load(deps.storage)
}

pub fn last_valset_nonce(deps: Deps) -> StdResult<u64> {
    Ok(VALSET.load(deps.storage)?.nonce)
}
