pub mod settlement_test;

use crate::{Auctioneer, AuctioneerClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

// ============================================================================
// Mock asset registry
// ============================================================================

/// Storage keys of the mock registry.
#[contracttype]
#[derive(Clone)]
pub enum NftKey {
    Owner(u64),
    Operator(Address, Address),
}

/// Minimal asset-ownership registry exposing the surface the engine
/// settles against.
#[contract]
pub struct MockAssetRegistry;

#[contractimpl]
impl MockAssetRegistry {
    pub fn mint(env: Env, to: Address, asset_id: u64) {
        env.storage().persistent().set(&NftKey::Owner(asset_id), &to);
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&NftKey::Owner(asset_id))
            .unwrap()
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&NftKey::Operator(owner, operator), &approved);
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get(&NftKey::Operator(owner, operator))
            .unwrap_or(false)
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, asset_id: u64) {
        spender.require_auth();
        let owner: Address = env
            .storage()
            .persistent()
            .get(&NftKey::Owner(asset_id))
            .unwrap();
        if owner != from {
            panic!("transfer from non-owner");
        }
        if spender != from && !Self::is_approved_for_all(env.clone(), from, spender) {
            panic!("operator not approved");
        }
        env.storage().persistent().set(&NftKey::Owner(asset_id), &to);
    }
}

// ============================================================================
// Fixture
// ============================================================================

/// Amount of payment token minted to every account.
pub const STARTING_FUNDS: i128 = 100_000_000;

/// The standard escrow deposit used across scenarios (0.05 units).
pub const DEPOSIT: i128 = 500_000;

pub struct TestCtx<'a> {
    pub env: Env,
    pub client: AuctioneerClient<'a>,
    pub admin: Address,
    pub owner: Address,
    pub addr1: Address,
    pub addr2: Address,
    pub nft: MockAssetRegistryClient<'a>,
    pub nft_address: Address,
    pub token: token::TokenClient<'a>,
}

/// Register the engine, a mock asset registry and a Stellar asset as the
/// currency ledger. Assets 1..=3 belong to `owner`, which has approved the
/// engine for all of them; every account starts with `STARTING_FUNDS`.
pub fn setup_test() -> TestCtx<'static> {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(Auctioneer, ());
    let client = AuctioneerClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let addr1 = Address::generate(&env);
    let addr2 = Address::generate(&env);

    let nft_address = env.register(MockAssetRegistry, ());
    let nft = MockAssetRegistryClient::new(&env, &nft_address);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&owner, &STARTING_FUNDS);
    token_admin_client.mint(&addr1, &STARTING_FUNDS);
    token_admin_client.mint(&addr2, &STARTING_FUNDS);

    nft.mint(&owner, &1);
    nft.mint(&owner, &2);
    nft.mint(&owner, &3);
    nft.set_approval_for_all(&owner, &contract_id, &true);

    client.initialize(&admin, &nft_address, &token_address);

    TestCtx {
        env,
        client,
        admin,
        owner,
        addr1,
        addr2,
        nft,
        nft_address,
        token,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
