use soroban_sdk::{Address, Env};

use crate::types::{
    AuctioneerConfig, DutchListing, EnglishAuction, FixedListing, StorageKey,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get engine configuration
pub fn get_config(e: &Env) -> Option<AuctioneerConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, AuctioneerConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set engine configuration
pub fn set_config(e: &Env, config: &AuctioneerConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ESCROW LEDGER STORAGE
// ============================================================================

/// Get an account's escrow balance
pub fn get_deposit(e: &Env, account: &Address) -> i128 {
    let key = StorageKey::Deposit(account.clone());
    let balance = e.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if balance > 0 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance
}

/// Set an account's escrow balance
pub fn set_deposit(e: &Env, account: &Address, balance: i128) {
    let key = StorageKey::Deposit(account.clone());
    e.storage().persistent().set(&key, &balance);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove an account's escrow entry (balance back to zero)
pub fn remove_deposit(e: &Env, account: &Address) {
    let key = StorageKey::Deposit(account.clone());
    e.storage().persistent().remove(&key);
}

// ============================================================================
// ENGLISH AUCTION STORAGE
// ============================================================================

/// Get the auction record for an asset
pub fn get_english_auction(e: &Env, asset_id: u64) -> Option<EnglishAuction> {
    let key = StorageKey::EnglishAuction(asset_id);
    let auction = e.storage().persistent().get::<_, EnglishAuction>(&key);
    if auction.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

/// Set the auction record for an asset
pub fn set_english_auction(e: &Env, asset_id: u64, auction: &EnglishAuction) {
    let key = StorageKey::EnglishAuction(asset_id);
    e.storage().persistent().set(&key, auction);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// FIXED LISTING STORAGE
// ============================================================================

/// Get the fixed-price listing for an asset
pub fn get_fixed_listing(e: &Env, collection: &Address, asset_id: u64) -> Option<FixedListing> {
    let key = StorageKey::FixedListing(collection.clone(), asset_id);
    let listing = e.storage().persistent().get::<_, FixedListing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Set the fixed-price listing for an asset
pub fn set_fixed_listing(e: &Env, collection: &Address, asset_id: u64, listing: &FixedListing) {
    let key = StorageKey::FixedListing(collection.clone(), asset_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove the fixed-price listing for an asset
pub fn remove_fixed_listing(e: &Env, collection: &Address, asset_id: u64) {
    let key = StorageKey::FixedListing(collection.clone(), asset_id);
    e.storage().persistent().remove(&key);
}

// ============================================================================
// DUTCH LISTING STORAGE
// ============================================================================

/// Get the Dutch listing for an asset
pub fn get_dutch_listing(e: &Env, asset_id: u64) -> Option<DutchListing> {
    let key = StorageKey::DutchListing(asset_id);
    let listing = e.storage().persistent().get::<_, DutchListing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Set the Dutch listing for an asset
pub fn set_dutch_listing(e: &Env, asset_id: u64, listing: &DutchListing) {
    let key = StorageKey::DutchListing(asset_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove the Dutch listing for an asset
pub fn remove_dutch_listing(e: &Env, asset_id: u64) {
    let key = StorageKey::DutchListing(asset_id);
    e.storage().persistent().remove(&key);
}

// ============================================================================
// KEEPER STORAGE
// ============================================================================

/// Get the keeper delegate for an asset
pub fn get_keeper(e: &Env, collection: &Address, asset_id: u64) -> Option<Address> {
    let key = StorageKey::Keeper(collection.clone(), asset_id);
    let keeper = e.storage().persistent().get::<_, Address>(&key);
    if keeper.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    keeper
}

/// Set the keeper delegate for an asset
pub fn set_keeper(e: &Env, collection: &Address, asset_id: u64, keeper: &Address) {
    let key = StorageKey::Keeper(collection.clone(), asset_id);
    e.storage().persistent().set(&key, keeper);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
