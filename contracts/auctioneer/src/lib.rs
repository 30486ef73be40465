#![no_std]

mod admin;
mod errors;
mod events;
mod nft;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env};

use crate::errors::Error;
use crate::events::*;
use crate::nft::NftClient;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Maximum basis points for the settlement fee
const MAX_FEE_RATE: u32 = 10000; // 100%

/// Denominator of the Dutch decay rate: the price loses a tenth of its
/// initial value over the listing duration, one decay step per second.
const DUTCH_DECAY_SCALE: i128 = 10;

// ============================================================================
// Contract
// ============================================================================

/// Auctioneer sale engine
///
/// A single-writer marketplace engine on Stellar/Soroban that handles:
/// - A per-account refundable escrow ledger gating participation
/// - English (ascending) auctions with an anti-snipe grace period
/// - Dutch (descending-price) listings with a linear time decay
/// - Fixed-price listings keyed by collection and asset id
/// - Owner-gated treasury/keeper/grace-period configuration
///
/// Asset custody stays with the external asset registry; the engine only
/// instructs it to move an asset once a sale settles. Every mutating call
/// commits its own bookkeeping before any outbound transfer.
#[contract]
pub struct Auctioneer;

#[contractimpl]
impl Auctioneer {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the engine.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `nft` - Primary asset registry the auction engines operate on
    /// * `payment_token` - Token used for deposits, bids and purchases
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: &Env,
        admin: Address,
        nft: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = AuctioneerConfig {
            admin: admin.clone(),
            nft: nft.clone(),
            payment_token: payment_token.clone(),
            treasury: None,
            grace_period: 0,
            fee_bps: 0,
            updated_at: e.ledger().timestamp(),
        };

        storage::set_config(e, &config);
        storage::set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            nft,
            payment_token,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // ESCROW LEDGER
    // ========================================================================

    /// Fund the caller's escrow balance.
    ///
    /// A non-zero balance is what admits an account to auctions and
    /// purchases. Funds stay withdrawable until spent on a winning bid.
    ///
    /// # Errors
    /// * `Error::InvalidAmount` - If `amount` is not positive
    pub fn deposit(e: &Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        token::TokenClient::new(e, &config.payment_token).transfer(
            &account,
            &e.current_contract_address(),
            &amount,
        );

        credit_deposit(e, &account, amount);
        Self::extend_instance_ttl(e);

        DepositedEventData { account, amount }.publish(e);

        Ok(())
    }

    /// Withdraw the account's full escrow balance.
    ///
    /// The balance is zeroed before the outbound transfer so a re-entering
    /// receiver observes an already-empty ledger entry.
    ///
    /// # Errors
    /// * `Error::InsufficientBalance` - If the balance is already zero
    pub fn withdraw_deposit(e: &Env, account: Address) -> Result<(), Error> {
        account.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let balance = storage::get_deposit(e, &account);
        if balance == 0 {
            return Err(Error::InsufficientBalance);
        }

        storage::remove_deposit(e, &account);

        token::TokenClient::new(e, &config.payment_token).transfer(
            &e.current_contract_address(),
            &account,
            &balance,
        );

        Self::extend_instance_ttl(e);

        WithdrawnEventData {
            account,
            amount: balance,
        }
        .publish(e);

        Ok(())
    }

    /// Whether the account currently holds a non-zero escrow balance.
    pub fn deposit_check(e: &Env, account: Address) -> bool {
        storage::get_deposit(e, &account) > 0
    }

    /// The account's raw escrow balance.
    pub fn get_deposit(e: &Env, account: Address) -> i128 {
        storage::get_deposit(e, &account)
    }

    // ========================================================================
    // ENGLISH AUCTION
    // ========================================================================

    /// Open an ascending auction for an asset of the primary registry.
    ///
    /// The caller must be the asset owner or its registered keeper, and
    /// must hold a non-zero escrow balance. The recorded seller is always
    /// the owner, so proceeds are unaffected by who opened the auction.
    ///
    /// # Errors
    /// * `Error::InvalidDuration` - If `period` is zero
    /// * `Error::InvalidAmount` - If `starting_bid` is not positive
    /// * `Error::AlreadyStarted` - If a live auction exists for the asset
    /// * `Error::Unauthorized` - If the caller is neither owner nor keeper
    /// * `Error::NotApproved` - If the engine cannot move the owner's assets
    pub fn start(
        e: &Env,
        caller: Address,
        asset_id: u64,
        starting_bid: i128,
        period: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if period == 0 {
            return Err(Error::InvalidDuration);
        }
        if starting_bid <= 0 {
            return Err(Error::InvalidAmount);
        }

        if let Some(existing) = storage::get_english_auction(e, asset_id) {
            if !existing.is_settled() {
                return Err(Error::AlreadyStarted);
            }
        }

        if storage::get_deposit(e, &caller) == 0 {
            return Err(Error::InsufficientBalance);
        }

        let registry = NftClient::new(e, &config.nft);
        let owner = registry.owner_of(&asset_id);
        if owner != caller {
            let keeper = storage::get_keeper(e, &config.nft, asset_id);
            if keeper.as_ref() != Some(&caller) {
                return Err(Error::Unauthorized);
            }
        }
        if !registry.is_approved_for_all(&owner, &e.current_contract_address()) {
            return Err(Error::NotApproved);
        }

        let deadline = e.ledger().timestamp() + period;

        let auction = EnglishAuction {
            seller: owner.clone(),
            starting_bid,
            highest_bid: starting_bid,
            highest_bidder: None,
            deadline,
            started: true,
            ended: false,
            winner: None,
            winnings: 0,
            seller_claimed: false,
            winner_claimed: false,
        };

        storage::set_english_auction(e, asset_id, &auction);
        Self::extend_instance_ttl(e);

        AuctionStartedEventData {
            seller: owner,
            asset_id,
            starting_bid,
            deadline,
        }
        .publish(e);

        Ok(())
    }

    /// Place a bid on a live auction.
    ///
    /// The full bid amount is pulled into the contract; the previous
    /// highest bidder's amount is returned to their escrow balance, where
    /// it is immediately withdrawable. A bid landing inside the configured
    /// grace period pushes the deadline back by that grace period.
    ///
    /// # Errors
    /// * `Error::AuctionNotStarted` - If no auction exists for the asset
    /// * `Error::AuctionEnded` - If the auction is closed or past its deadline
    /// * `Error::InsufficientBalance` - If the bidder has no escrow deposit
    /// * `Error::BidTooLow` - If `amount` does not exceed the highest bid
    pub fn bid(e: &Env, bidder: Address, asset_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let mut auction =
            storage::get_english_auction(e, asset_id).ok_or(Error::AuctionNotStarted)?;

        let now = e.ledger().timestamp();
        if auction.ended || now >= auction.deadline {
            return Err(Error::AuctionEnded);
        }

        if storage::get_deposit(e, &bidder) == 0 {
            return Err(Error::InsufficientBalance);
        }

        if amount <= auction.highest_bid {
            return Err(Error::BidTooLow);
        }

        token::TokenClient::new(e, &config.payment_token).transfer(
            &bidder,
            &e.current_contract_address(),
            &amount,
        );

        let refunded = if let Some(previous) = auction.highest_bidder.clone() {
            let prior = auction.highest_bid;
            credit_deposit(e, &previous, prior);
            Some((previous, prior))
        } else {
            None
        };

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());

        if config.grace_period > 0 && auction.deadline - now < config.grace_period {
            auction.deadline = auction.deadline.saturating_add(config.grace_period);
        }

        let deadline = auction.deadline;
        storage::set_english_auction(e, asset_id, &auction);
        Self::extend_instance_ttl(e);

        if let Some((previous, prior)) = refunded {
            BidRefundedEventData {
                bidder: previous,
                asset_id,
                amount: prior,
            }
            .publish(e);
        }

        BidPlacedEventData {
            bidder,
            asset_id,
            amount,
            deadline,
        }
        .publish(e);

        Ok(())
    }

    /// Close an auction whose deadline has passed. Permissionless.
    ///
    /// Records the winner and winning amount; with no bids the auction
    /// closes winnerless and only the seller side remains claimable.
    ///
    /// # Errors
    /// * `Error::AuctionNotStarted` - If no auction exists for the asset
    /// * `Error::AlreadyEnded` - If the auction was already closed
    /// * `Error::AuctionNotEnded` - If the deadline has not been reached
    pub fn end(e: &Env, asset_id: u64) -> Result<(), Error> {
        storage::get_config(e).ok_or(Error::NotInitialized)?;

        let mut auction =
            storage::get_english_auction(e, asset_id).ok_or(Error::AuctionNotStarted)?;

        if auction.ended {
            return Err(Error::AlreadyEnded);
        }
        if e.ledger().timestamp() < auction.deadline {
            return Err(Error::AuctionNotEnded);
        }

        auction.ended = true;
        auction.winner = auction.highest_bidder.clone();
        auction.winnings = if auction.winner.is_some() {
            auction.highest_bid
        } else {
            0
        };

        let winner = auction.winner.clone();
        let winnings = auction.winnings;
        storage::set_english_auction(e, asset_id, &auction);
        Self::extend_instance_ttl(e);

        AuctionEndedEventData {
            asset_id,
            winner,
            winnings,
        }
        .publish(e);

        Ok(())
    }

    /// Deliver the asset to the auction winner. Settles exactly once.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If no auction exists for the asset
    /// * `Error::AuctionNotEnded` - If the auction is still open
    /// * `Error::Unauthorized` - If the caller is not the recorded winner
    /// * `Error::AlreadyClaimed` - If the asset was already delivered
    pub fn claim_winner(e: &Env, caller: Address, asset_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_english_auction(e, asset_id).ok_or(Error::AuctionNotFound)?;

        if !auction.ended {
            return Err(Error::AuctionNotEnded);
        }
        match &auction.winner {
            Some(winner) if *winner == caller => {}
            _ => return Err(Error::Unauthorized),
        }
        if auction.winner_claimed {
            return Err(Error::AlreadyClaimed);
        }

        auction.winner_claimed = true;
        let seller = auction.seller.clone();
        storage::set_english_auction(e, asset_id, &auction);
        Self::extend_instance_ttl(e);

        NftClient::new(e, &config.nft).transfer_from(
            &e.current_contract_address(),
            &seller,
            &caller,
            &asset_id,
        );

        AssetClaimedEventData {
            winner: caller,
            asset_id,
        }
        .publish(e);

        Ok(())
    }

    /// Credit the auction proceeds to the seller's escrow balance.
    /// Settles exactly once; the treasury fee is deducted when configured.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If no auction exists for the asset
    /// * `Error::AuctionNotEnded` - If the auction is still open
    /// * `Error::Unauthorized` - If the caller is not the recorded seller
    /// * `Error::AlreadyClaimed` - If the proceeds were already claimed
    pub fn claim_seller(e: &Env, caller: Address, asset_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_english_auction(e, asset_id).ok_or(Error::AuctionNotFound)?;

        if !auction.ended {
            return Err(Error::AuctionNotEnded);
        }
        if auction.seller != caller {
            return Err(Error::Unauthorized);
        }
        if auction.seller_claimed {
            return Err(Error::AlreadyClaimed);
        }

        auction.seller_claimed = true;

        let mut fee: i128 = 0;
        if auction.winnings > 0 {
            if let Some(treasury) = &config.treasury {
                fee = calculate_fee(auction.winnings, config.fee_bps);
                if fee > 0 {
                    credit_deposit(e, treasury, fee);
                }
            }
            credit_deposit(e, &caller, auction.winnings - fee);
        }

        let amount = auction.winnings - fee;
        storage::set_english_auction(e, asset_id, &auction);
        Self::extend_instance_ttl(e);

        ProceedsClaimedEventData {
            seller: caller,
            asset_id,
            amount,
            fee,
        }
        .publish(e);

        Ok(())
    }

    /// Full auction record for an asset.
    pub fn nft_status(e: &Env, asset_id: u64) -> Result<EnglishAuction, Error> {
        storage::get_english_auction(e, asset_id).ok_or(Error::AuctionNotFound)
    }

    // ========================================================================
    // FIXED PRICE LISTING
    // ========================================================================

    /// List an asset for sale at a fixed price.
    ///
    /// # Errors
    /// * `Error::InvalidAmount` - If `price` is not positive
    /// * `Error::AlreadyListed` - If the asset is already listed
    /// * `Error::Unauthorized` - If the caller does not own the asset
    /// * `Error::NotApproved` - If the engine cannot move the owner's assets
    pub fn list_item(
        e: &Env,
        seller: Address,
        collection: Address,
        asset_id: u64,
        price: i128,
    ) -> Result<(), Error> {
        seller.require_auth();

        storage::get_config(e).ok_or(Error::NotInitialized)?;

        if price <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::get_fixed_listing(e, &collection, asset_id).is_some() {
            return Err(Error::AlreadyListed);
        }

        let registry = NftClient::new(e, &collection);
        if registry.owner_of(&asset_id) != seller {
            return Err(Error::Unauthorized);
        }
        if !registry.is_approved_for_all(&seller, &e.current_contract_address()) {
            return Err(Error::NotApproved);
        }

        let listing = FixedListing {
            seller: Some(seller.clone()),
            price,
            active: true,
        };
        storage::set_fixed_listing(e, &collection, asset_id, &listing);
        Self::extend_instance_ttl(e);

        ItemListedEventData {
            seller,
            collection,
            asset_id,
            price,
        }
        .publish(e);

        Ok(())
    }

    /// Cancel a fixed-price listing. Seller only.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the asset is not listed
    /// * `Error::NotSeller` - If the caller did not create the listing
    pub fn cancel_listing(
        e: &Env,
        caller: Address,
        collection: Address,
        asset_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        storage::get_config(e).ok_or(Error::NotInitialized)?;

        let listing =
            storage::get_fixed_listing(e, &collection, asset_id).ok_or(Error::NotListed)?;
        if listing.seller != Some(caller.clone()) {
            return Err(Error::NotSeller);
        }

        storage::remove_fixed_listing(e, &collection, asset_id);
        Self::extend_instance_ttl(e);

        ListingCancelledEventData {
            seller: caller,
            collection,
            asset_id,
        }
        .publish(e);

        Ok(())
    }

    /// Buy a listed asset. One purchase consumes the listing.
    ///
    /// Exactly `price` is collected from the buyer regardless of the
    /// offered `amount`; the proceeds land on the seller's escrow balance.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the asset is not listed
    /// * `Error::InsufficientPayment` - If `amount` is below the asked price
    pub fn buy_item(
        e: &Env,
        buyer: Address,
        collection: Address,
        asset_id: u64,
        amount: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let listing =
            storage::get_fixed_listing(e, &collection, asset_id).ok_or(Error::NotListed)?;
        let seller = listing.seller.ok_or(Error::NotListed)?;

        if amount < listing.price {
            return Err(Error::InsufficientPayment);
        }

        storage::remove_fixed_listing(e, &collection, asset_id);

        token::TokenClient::new(e, &config.payment_token).transfer(
            &buyer,
            &e.current_contract_address(),
            &listing.price,
        );
        credit_deposit(e, &seller, listing.price);
        Self::extend_instance_ttl(e);

        NftClient::new(e, &collection).transfer_from(
            &e.current_contract_address(),
            &seller,
            &buyer,
            &asset_id,
        );

        ItemSoldEventData {
            buyer,
            seller,
            collection,
            asset_id,
            price: listing.price,
        }
        .publish(e);

        Ok(())
    }

    /// Listing record for an asset; the inactive value when nothing is
    /// listed. Callers must treat the inactive value, not an error, as
    /// "not listed".
    pub fn get_listing(e: &Env, collection: Address, asset_id: u64) -> FixedListing {
        storage::get_fixed_listing(e, &collection, asset_id).unwrap_or(FixedListing::inactive())
    }

    // ========================================================================
    // DUTCH AUCTION
    // ========================================================================

    /// Open a descending-price listing for an asset of the primary
    /// registry. The price decays linearly from `initial_price` and
    /// bottoms out at `start_time + duration`.
    ///
    /// # Errors
    /// * `Error::InvalidDuration` - If `duration` is zero
    /// * `Error::InvalidAmount` - If `initial_price` is not positive
    /// * `Error::AlreadyListed` - If the asset already has a Dutch listing
    /// * `Error::InsufficientBalance` - If the seller has no escrow deposit
    /// * `Error::Unauthorized` - If the caller does not own the asset
    /// * `Error::NotApproved` - If the engine cannot move the owner's assets
    pub fn start_dutch(
        e: &Env,
        seller: Address,
        asset_id: u64,
        initial_price: i128,
        duration: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if duration == 0 {
            return Err(Error::InvalidDuration);
        }
        if initial_price <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::get_dutch_listing(e, asset_id).is_some() {
            return Err(Error::AlreadyListed);
        }
        if storage::get_deposit(e, &seller) == 0 {
            return Err(Error::InsufficientBalance);
        }

        let registry = NftClient::new(e, &config.nft);
        if registry.owner_of(&asset_id) != seller {
            return Err(Error::Unauthorized);
        }
        if !registry.is_approved_for_all(&seller, &e.current_contract_address()) {
            return Err(Error::NotApproved);
        }

        let listing = DutchListing {
            seller: seller.clone(),
            initial_price,
            start_time: e.ledger().timestamp(),
            duration,
        };
        storage::set_dutch_listing(e, asset_id, &listing);
        Self::extend_instance_ttl(e);

        DutchStartedEventData {
            seller,
            asset_id,
            initial_price,
            duration,
        }
        .publish(e);

        Ok(())
    }

    /// Current price of a Dutch listing, recomputed from the ledger clock.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the asset has no active Dutch listing
    pub fn get_price_dutch(e: &Env, asset_id: u64) -> Result<i128, Error> {
        let listing = storage::get_dutch_listing(e, asset_id).ok_or(Error::NotListed)?;
        Ok(current_dutch_price(e, &listing))
    }

    /// Buy a Dutch-listed asset at the price in effect at call time.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the asset has no active Dutch listing
    /// * `Error::InsufficientPayment` - If `amount` is below the current price
    pub fn buy_dutch(e: &Env, buyer: Address, asset_id: u64, amount: i128) -> Result<(), Error> {
        buyer.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        let listing = storage::get_dutch_listing(e, asset_id).ok_or(Error::NotListed)?;

        let price = current_dutch_price(e, &listing);
        if amount < price {
            return Err(Error::InsufficientPayment);
        }

        storage::remove_dutch_listing(e, asset_id);

        token::TokenClient::new(e, &config.payment_token).transfer(
            &buyer,
            &e.current_contract_address(),
            &price,
        );
        credit_deposit(e, &listing.seller, price);
        Self::extend_instance_ttl(e);

        NftClient::new(e, &config.nft).transfer_from(
            &e.current_contract_address(),
            &listing.seller,
            &buyer,
            &asset_id,
        );

        DutchSoldEventData {
            buyer,
            seller: listing.seller,
            asset_id,
            price,
        }
        .publish(e);

        Ok(())
    }

    /// Dutch listing record for an asset.
    ///
    /// # Errors
    /// * `Error::NotListed` - If the asset has no active Dutch listing
    pub fn get_dutch_listing(e: &Env, asset_id: u64) -> Result<DutchListing, Error> {
        storage::get_dutch_listing(e, asset_id).ok_or(Error::NotListed)
    }

    // ========================================================================
    // ADMIN CONFIGURATION
    // ========================================================================

    /// Get engine configuration
    pub fn get_config(e: &Env) -> Result<AuctioneerConfig, Error> {
        storage::get_config(e).ok_or(Error::NotInitialized)
    }

    /// Set the treasury address receiving settlement fees (admin only)
    pub fn set_treasury(e: &Env, admin: Address, treasury: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(e, &admin)?;

        config.treasury = Some(treasury.clone());
        config.updated_at = e.ledger().timestamp();
        storage::set_config(e, &config);
        Self::extend_instance_ttl(e);

        TreasuryUpdatedEventData { admin, treasury }.publish(e);

        Ok(())
    }

    /// Set the anti-snipe grace period in seconds (admin only)
    pub fn set_grace_period(e: &Env, admin: Address, grace_period: u64) -> Result<(), Error> {
        let mut config = admin::require_admin(e, &admin)?;

        config.grace_period = grace_period;
        config.updated_at = e.ledger().timestamp();
        storage::set_config(e, &config);
        Self::extend_instance_ttl(e);

        GracePeriodUpdatedEventData {
            admin,
            grace_period,
        }
        .publish(e);

        Ok(())
    }

    /// Set the settlement fee rate in basis points (admin only)
    ///
    /// # Errors
    /// * `Error::InvalidFeeRate` - If `new_rate` exceeds 10000 bps
    pub fn set_fee_rate(e: &Env, admin: Address, new_rate: u32) -> Result<(), Error> {
        let mut config = admin::require_admin(e, &admin)?;

        if new_rate > MAX_FEE_RATE {
            return Err(Error::InvalidFeeRate);
        }

        config.fee_bps = new_rate;
        config.updated_at = e.ledger().timestamp();
        storage::set_config(e, &config);
        Self::extend_instance_ttl(e);

        FeeRateUpdatedEventData { admin, new_rate }.publish(e);

        Ok(())
    }

    /// Register a keeper delegate for an asset (admin only)
    pub fn set_keepers(
        e: &Env,
        admin: Address,
        collection: Address,
        asset_id: u64,
        keeper: Address,
    ) -> Result<(), Error> {
        admin::require_admin(e, &admin)?;

        storage::set_keeper(e, &collection, asset_id, &keeper);
        Self::extend_instance_ttl(e);

        KeeperUpdatedEventData {
            admin,
            collection,
            asset_id,
            keeper,
        }
        .publish(e);

        Ok(())
    }

    /// Configured grace period in seconds
    pub fn get_grace_period(e: &Env) -> Result<u64, Error> {
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.grace_period)
    }

    /// Keeper delegate registered for an asset, if any
    pub fn get_keeper(e: &Env, collection: Address, asset_id: u64) -> Option<Address> {
        storage::get_keeper(e, &collection, asset_id)
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

// ============================================================================
// Free helpers
// ============================================================================

fn credit_deposit(e: &Env, account: &Address, amount: i128) {
    let balance = storage::get_deposit(e, account);
    storage::set_deposit(e, account, balance + amount);
}

fn calculate_fee(amount: i128, fee_bps: u32) -> i128 {
    (amount * fee_bps as i128) / 10000
}

/// Linear decay: one step of `initial_price / (DUTCH_DECAY_SCALE * duration)`
/// per elapsed second, frozen at the floor once `duration` has passed.
fn current_dutch_price(e: &Env, listing: &DutchListing) -> i128 {
    let decay_per_second = listing.initial_price / (DUTCH_DECAY_SCALE * listing.duration as i128);
    let elapsed = e
        .ledger()
        .timestamp()
        .saturating_sub(listing.start_time)
        .min(listing.duration);
    listing.initial_price - decay_per_second * elapsed as i128
}
