use alloy_primitives::Address;

use crate::error::ValsetError;

const ETH_ADDRESS_HEX_LEN: usize = 40;

/// Parses a `0x`-prefixed, 20-byte hex Ethereum address.
///
/// Mixed case is accepted, but the EIP-55 checksum is not enforced.
pub fn parse_eth_address(addr: &str) -> Result<Address, ValsetError> {
    let invalid = || ValsetError::InvalidEthAddress(addr.to_string());

    let hex_part = addr.strip_prefix("0x").ok_or_else(invalid)?;
    if hex_part.len() != ETH_ADDRESS_HEX_LEN {
        return Err(invalid());
    }
    let mut bytes = [0u8; 20];
    hex::decode_to_slice(hex_part, &mut bytes).map_err(|_| invalid())?;
    Ok(Address::from(bytes))
}

/// Canonical (lower case, `0x`-prefixed) string form of an Ethereum address
pub fn normalize_eth_address(addr: &str) -> Result<String, ValsetError> {
    let parsed = parse_eth_address(addr)?;
    Ok(format!("0x{}", hex::encode(parsed.as_slice())))
}
