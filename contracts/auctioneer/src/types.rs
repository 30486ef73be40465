use soroban_sdk::{contracttype, Address};

/// Storage keys for the auctioneer contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Engine configuration
    Config,
    /// Escrow balance by account
    Deposit(Address),
    /// English auction record by asset id
    EnglishAuction(u64),
    /// Fixed-price listing by (collection, asset id)
    FixedListing(Address, u64),
    /// Dutch listing by asset id
    DutchListing(u64),
    /// Keeper delegate by (collection, asset id)
    Keeper(Address, u64),
}

/// Engine configuration, mutated only through the owner-gated setters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctioneerConfig {
    /// Contract owner with admin privileges
    pub admin: Address,
    /// Primary asset registry the auction engines operate on
    pub nft: Address,
    /// Token used for deposits, bids and purchases
    pub payment_token: Address,
    /// Treasury receiving settlement fees, if configured
    pub treasury: Option<Address>,
    /// Anti-snipe extension window in seconds
    pub grace_period: u64,
    /// Settlement fee in basis points
    pub fee_bps: u32,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// English auction record.
///
/// The record stays in storage after settlement so its history remains
/// readable; a new auction for the same asset replaces it once both sides
/// have claimed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnglishAuction {
    /// Asset owner the proceeds belong to
    pub seller: Address,
    /// Minimum bid set at start
    pub starting_bid: i128,
    /// Highest bid so far (equals starting_bid until the first bid lands)
    pub highest_bid: i128,
    /// Account holding the highest bid
    pub highest_bidder: Option<Address>,
    /// Bidding closes at this timestamp
    pub deadline: u64,
    /// Auction has been opened
    pub started: bool,
    /// Auction has been closed by `end`
    pub ended: bool,
    /// Winning account recorded at `end`
    pub winner: Option<Address>,
    /// Winning amount recorded at `end`
    pub winnings: i128,
    /// Seller has claimed the proceeds
    pub seller_claimed: bool,
    /// Winner has claimed the asset
    pub winner_claimed: bool,
}

impl EnglishAuction {
    /// Terminal state: closed and nothing left to claim.
    pub fn is_settled(&self) -> bool {
        self.ended && self.seller_claimed && (self.winner.is_none() || self.winner_claimed)
    }
}

/// Fixed-price listing record.
///
/// `seller: None` together with `price: 0` is the inactive value returned
/// for assets that are not listed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedListing {
    /// Account that listed the asset
    pub seller: Option<Address>,
    /// Asked price
    pub price: i128,
    /// Whether the listing can currently be bought
    pub active: bool,
}

impl FixedListing {
    /// The "not listed" read value.
    pub fn inactive() -> Self {
        FixedListing {
            seller: None,
            price: 0,
            active: false,
        }
    }
}

/// Dutch (descending-price) listing record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchListing {
    /// Account that listed the asset
    pub seller: Address,
    /// Price at `start_time`
    pub initial_price: i128,
    /// Timestamp the price decay starts from
    pub start_time: u64,
    /// Seconds until the price reaches its floor
    pub duration: u64,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
