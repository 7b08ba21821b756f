#![no_std]

//! Custodial descending-price auction for a non-fungible asset.
//!
//! The seller approves this contract for the asset and the contract takes
//! custody of it at creation. A qualifying bid either concludes the sale at
//! once (`immediate_settlement`) or becomes the standing bid, held in escrow
//! until it is outbid, the auction is ended by the owner or custodian, or the
//! window runs out. An auction that expires without bids returns the asset
//! to the seller.

use auction_core::{Auction, AuctionError, AuctionHouse, EscrowedAsset, SettlementInstruction};
use soroban_sdk::{contract, contractimpl, Address, Env};


#[contract]
pub struct NftDutchAuctionContract;

#[contractimpl]
impl NftDutchAuctionContract {
    /// Deploy with the token every auction of this contract is paid in
    pub fn __constructor(e: Env, payment_token: Address) {
        AuctionHouse::init(&e, &payment_token);
    }

    // ========================================================================
    // Auction management
    // ========================================================================

    /// Open a new auction for `asset_id` of `asset_registry`
    ///
    /// `owner` must hold the asset and have approved this contract for it.
    /// The asset is held by this contract until the auction settles.
    ///
    /// # Arguments
    /// * `owner` - The seller, must authorize
    /// * `asset_registry` - Registry contract of the asset
    /// * `asset_id` - Token id within the registry
    /// * `reserve_price` - Price floor, must be positive
    /// * `num_ledgers_open` - Ledgers the auction accepts bids for, must be positive
    /// * `offer_price_decrement` - Price drop per ledger, must be positive
    /// * `immediate_settlement` - End on the first qualifying bid
    /// * `custodian` - Optional party allowed to end the auction besides the owner
    ///
    /// # Errors
    /// * `InvalidReservePrice`, `InvalidDuration`, `InvalidPriceDecrement`
    /// * `PriceOverflow` - the opening price does not fit in an i128
    /// * `AssetNotEscrowed` - the asset is not owned by `owner` or could not
    ///   be moved into this contract
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        e: Env,
        owner: Address,
        asset_registry: Address,
        asset_id: u32,
        reserve_price: i128,
        num_ledgers_open: u32,
        offer_price_decrement: i128,
        immediate_settlement: bool,
        custodian: Option<Address>,
    ) -> Result<u64, AuctionError> {
        let asset = EscrowedAsset {
            registry: asset_registry,
            token_id: asset_id,
            custodian,
        };
        AuctionHouse::open(
            &e,
            owner,
            reserve_price,
            num_ledgers_open,
            offer_price_decrement,
            immediate_settlement,
            Some(asset),
        )
    }

    /// Bid `amount` on auction `id`
    ///
    /// # Errors
    /// * `AuctionClosed` - auction ended or its window ran out
    /// * `OwnerCannotBid` - the seller tried to bid
    /// * `BidTooLow` - `amount` is below the current price
    /// * `SettlementFailure` - a transfer failed; nothing changed
    pub fn bid(
        e: Env,
        id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<SettlementInstruction, AuctionError> {
        AuctionHouse::bid(&e, id, bidder, amount)
    }

    /// End auction `id`, selling to the standing bid
    ///
    /// `caller` must be the owner or the custodian named at creation.
    ///
    /// # Errors
    /// * `AlreadyEnded` - the auction already ended
    /// * `Unauthorized` - caller is neither owner nor custodian
    /// * `NoBidsReceived` - there is no standing bid
    pub fn end_auction(
        e: Env,
        id: u64,
        caller: Address,
    ) -> Result<SettlementInstruction, AuctionError> {
        AuctionHouse::end(&e, id, caller)
    }

    /// Conclude an auction whose window ran out; anyone may call
    pub fn close_expired(e: Env, id: u64) -> Result<SettlementInstruction, AuctionError> {
        AuctionHouse::close_expired(&e, id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_current_price(e: Env, id: u64) -> Result<i128, AuctionError> {
        AuctionHouse::current_price(&e, id)
    }

    pub fn reserve_price(e: Env, id: u64) -> Result<i128, AuctionError> {
        Ok(AuctionHouse::config(&e, id)?.reserve_price)
    }

    pub fn num_ledgers_open(e: Env, id: u64) -> Result<u32, AuctionError> {
        Ok(AuctionHouse::config(&e, id)?.num_ledgers_open)
    }

    pub fn offer_price_decrement(e: Env, id: u64) -> Result<i128, AuctionError> {
        Ok(AuctionHouse::config(&e, id)?.offer_price_decrement)
    }

    pub fn initial_price(e: Env, id: u64) -> Result<i128, AuctionError> {
        Ok(AuctionHouse::config(&e, id)?.initial_price)
    }

    pub fn owner(e: Env, id: u64) -> Result<Address, AuctionError> {
        Ok(AuctionHouse::config(&e, id)?.owner)
    }

    pub fn escrowed_asset(e: Env, id: u64) -> Result<EscrowedAsset, AuctionError> {
        AuctionHouse::config(&e, id)?
            .asset
            .ok_or(AuctionError::AssetNotEscrowed)
    }

    /// `true` once the auction ended or its window ran out
    pub fn auction_ended(e: Env, id: u64) -> Result<bool, AuctionError> {
        AuctionHouse::is_ended(&e, id)
    }

    pub fn winning_bid(e: Env, id: u64) -> Result<i128, AuctionError> {
        Ok(AuctionHouse::state(&e, id)?.winning_bid)
    }

    pub fn highest_bidder(e: Env, id: u64) -> Result<Option<Address>, AuctionError> {
        Ok(AuctionHouse::state(&e, id)?.highest_bidder)
    }

    pub fn get_auction(e: Env, id: u64) -> Result<Auction, AuctionError> {
        AuctionHouse::auction(&e, id)
    }

    pub fn auction_count(e: Env) -> u64 {
        AuctionHouse::count(&e)
    }

    pub fn payment_token(e: Env) -> Result<Address, AuctionError> {
        AuctionHouse::payment_token(&e)
    }
}
