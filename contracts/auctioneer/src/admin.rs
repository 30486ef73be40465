use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::AuctioneerConfig;

/// Authenticate the caller and check it against the configured admin.
///
/// Returns the current configuration so setters can mutate it in place.
pub fn require_admin(e: &Env, admin: &Address) -> Result<AuctioneerConfig, Error> {
    admin.require_auth();
    let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
    if *admin != config.admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
