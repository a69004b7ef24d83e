use cosmwasm_std::{HexBinary, StdResult, Storage};
use cw_storage_plus::Item;
use gravity_valset::Valset;

/// The current validator set
pub(crate) const VALSET: Item<Valset> = Item::new("valset");

/// Checkpoint of [`VALSET`] under the configured gravity id
pub(crate) const LAST_VALSET_CHECKPOINT: Item<HexBinary> = Item::new("last_valset_checkpoint");

pub(crate) fn save_valset(
    storage: &mut dyn Storage,
    valset: &Valset,
    checkpoint: &[u8],
) -> StdResult<()> {
    VALSET.save(storage, valset)?;
    LAST_VALSET_CHECKPOINT.save(storage, &HexBinary::from(checkpoint))
}
