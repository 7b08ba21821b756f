//! Auction arena storage.
//!
//! Contract-wide values live in instance storage; each auction is one
//! persistent entry keyed by its id.

use soroban_sdk::{contracttype, Address, Env};

use crate::error::AuctionError;
use crate::types::Auction;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const AUCTION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const AUCTION_LIFETIME_THRESHOLD: u32 = AUCTION_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token every auction in this contract is paid in
    PaymentToken,
    /// Number of auctions created so far, also the next id
    AuctionCounter,
    /// Auction data (id -> Auction)
    Auction(u64),
}

pub struct AuctionStore;

impl AuctionStore {
    pub fn set_payment_token(e: &Env, token: &Address) {
        e.storage().instance().set(&DataKey::PaymentToken, token);
        Self::extend_instance(e);
    }

    pub fn payment_token(e: &Env) -> Result<Address, AuctionError> {
        e.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(AuctionError::NotInitialized)
    }

    pub fn count(e: &Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::AuctionCounter)
            .unwrap_or(0)
    }

    /// Reserve the next auction id
    pub fn next_id(e: &Env) -> u64 {
        let id = Self::count(e);
        e.storage()
            .instance()
            .set(&DataKey::AuctionCounter, &(id + 1));
        Self::extend_instance(e);
        id
    }

    pub fn load(e: &Env, id: u64) -> Result<Auction, AuctionError> {
        e.storage()
            .persistent()
            .get(&DataKey::Auction(id))
            .ok_or(AuctionError::AuctionNotFound)
    }

    pub fn save(e: &Env, auction: &Auction) {
        let key = DataKey::Auction(auction.id);
        e.storage().persistent().set(&key, auction);
        let bump = AUCTION_BUMP_AMOUNT.min(e.storage().max_ttl());
        let threshold = AUCTION_LIFETIME_THRESHOLD.min(bump);
        e.storage().persistent().extend_ttl(&key, threshold, bump);
        Self::extend_instance(e);
    }

    // Keep the instance (payment token, counter) alive as long as the
    // auctions that depend on it
    fn extend_instance(e: &Env) {
        let bump = INSTANCE_BUMP_AMOUNT.min(e.storage().max_ttl());
        let threshold = INSTANCE_LIFETIME_THRESHOLD.min(bump);
        e.storage().instance().extend_ttl(threshold, bump);
    }
}
