use soroban_sdk::{contractevent, Address};

/// Event emitted when the engine is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub nft: Address,
    pub payment_token: Address,
}

/// Event emitted when an account funds its escrow balance
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
}

/// Event emitted when an account withdraws its full escrow balance
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
}

/// Event emitted when an English auction opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub asset_id: u64,
    pub starting_bid: i128,
    pub deadline: u64,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    #[topic]
    pub asset_id: u64,
    pub amount: i128,
    pub deadline: u64,
}

/// Event emitted when an outbid amount is returned to the escrow ledger
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub bidder: Address,
    #[topic]
    pub asset_id: u64,
    pub amount: i128,
}

/// Event emitted when an English auction closes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub asset_id: u64,
    pub winner: Option<Address>,
    pub winnings: i128,
}

/// Event emitted when the winner takes delivery of the asset
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetClaimedEventData {
    #[topic]
    pub winner: Address,
    #[topic]
    pub asset_id: u64,
}

/// Event emitted when the seller collects the auction proceeds
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsClaimedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub asset_id: u64,
    pub amount: i128,
    pub fee: i128,
}

/// Event emitted when an asset is listed at a fixed price
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemListedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub collection: Address,
    pub asset_id: u64,
    pub price: i128,
}

/// Event emitted when a fixed-price listing is cancelled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelledEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub collection: Address,
    pub asset_id: u64,
}

/// Event emitted when a fixed-price listing is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub seller: Address,
    pub collection: Address,
    pub asset_id: u64,
    pub price: i128,
}

/// Event emitted when a Dutch listing opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchStartedEventData {
    #[topic]
    pub seller: Address,
    #[topic]
    pub asset_id: u64,
    pub initial_price: i128,
    pub duration: u64,
}

/// Event emitted when a Dutch listing is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchSoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub seller: Address,
    pub asset_id: u64,
    pub price: i128,
}

/// Event emitted when the treasury address is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub treasury: Address,
}

/// Event emitted when the grace period is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GracePeriodUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub grace_period: u64,
}

/// Event emitted when the settlement fee rate is updated
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRateUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_rate: u32,
}

/// Event emitted when a keeper delegate is assigned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeeperUpdatedEventData {
    #[topic]
    pub admin: Address,
    #[topic]
    pub collection: Address,
    pub asset_id: u64,
    pub keeper: Address,
}
