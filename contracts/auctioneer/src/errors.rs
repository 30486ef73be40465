use soroban_sdk::contracterror;

/// Error codes for the auctioneer contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not have required role or permissions
    Unauthorized = 3,
    /// Escrow balance is empty
    InsufficientBalance = 4,
    /// Amount or price must be greater than zero
    InvalidAmount = 5,
    /// Duration or period must be greater than zero
    InvalidDuration = 6,
    /// No auction record exists for this asset
    AuctionNotFound = 7,
    /// A live auction already exists for this asset
    AlreadyStarted = 8,
    /// Auction has not been started
    AuctionNotStarted = 9,
    /// Auction deadline has passed or auction is closed
    AuctionEnded = 10,
    /// Auction deadline has not been reached yet
    AuctionNotEnded = 11,
    /// Auction has already been closed
    AlreadyEnded = 12,
    /// Bid does not exceed the current highest bid
    BidTooLow = 13,
    /// Settlement already claimed for this role
    AlreadyClaimed = 14,
    /// Caller is not the seller of this listing
    NotSeller = 15,
    /// An active listing already exists for this asset
    AlreadyListed = 16,
    /// No active listing exists for this asset
    NotListed = 17,
    /// Attached payment is below the asked price
    InsufficientPayment = 18,
    /// The engine is not approved to transfer the seller's assets
    NotApproved = 19,
    /// Fee rate exceeds the basis-point maximum
    InvalidFeeRate = 20,
}
