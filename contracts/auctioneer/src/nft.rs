use soroban_sdk::{contractclient, Address, Env};

/// External asset-ownership registry the engine settles against.
///
/// The registry is the only component allowed to move assets. The engine
/// reads `owner_of` / `is_approved_for_all` to validate a sale before
/// opening it, and calls `transfer_from` exactly once per successful
/// settlement, with its own address as the approved spender.
#[contractclient(name = "NftClient")]
pub trait AssetRegistry {
    /// Current owner of the asset.
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Whether `operator` may move any of `owner`'s assets.
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    /// Move an asset on behalf of `from`. `spender` must be `from` itself
    /// or an operator approved for all of `from`'s assets.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, asset_id: u64);
}
