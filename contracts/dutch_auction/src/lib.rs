#![no_std]

//! Direct-settlement descending-price auction.
//!
//! The value being sold is the seller's claim on the payment itself: the
//! first bid at or above the current price ends the auction, pays the price
//! to the seller and refunds any excess to the bidder in the same call.

use auction_core::{Auction, AuctionError, AuctionHouse, SettlementInstruction};
use soroban_sdk::{contract, contractimpl, Address, Env};


#[contract]
pub struct DutchAuctionContract;

#[contractimpl]
impl DutchAuctionContract {
    /// Deploy with the token every auction of this contract is paid in
    pub fn __constructor(e: Env, payment_token: Address) {
        AuctionHouse::init(&e, &payment_token);
    }

    // ========================================================================
    // Auction management
    // ========================================================================

    /// Open a new auction at the current ledger
    ///
    /// The opening price is `reserve_price + offer_price_decrement * num_ledgers_open`
    /// and falls by `offer_price_decrement` every ledger down to `reserve_price`.
    ///
    /// # Arguments
    /// * `owner` - The seller, must authorize
    /// * `reserve_price` - Price floor, must be positive
    /// * `num_ledgers_open` - Ledgers the auction accepts bids for, must be positive
    /// * `offer_price_decrement` - Price drop per ledger, must be positive
    ///
    /// # Returns
    /// The new auction id
    ///
    /// # Errors
    /// * `InvalidReservePrice`, `InvalidDuration`, `InvalidPriceDecrement`
    /// * `PriceOverflow` - the opening price does not fit in an i128
    pub fn create_auction(
        e: Env,
        owner: Address,
        reserve_price: i128,
        num_ledgers_open: u32,
        offer_price_decrement: i128,
    ) -> Result<u64, AuctionError> {
        AuctionHouse::open(
            &e,
            owner,
            reserve_price,
            num_ledgers_open,
            offer_price_decrement,
            true,
            None,
        )
    }

    /// Bid `amount` on auction `id`
    ///
    /// A bid at or above the current price wins immediately. The bidder pays
    /// `amount`; the seller receives the current price and the bidder gets
    /// the rest back.
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

    /// End auction `id` early
    ///
    /// Only the owner may call this. A bid always ends a direct auction, so
    /// this fails with `AlreadyEnded` after a sale and `NoBidsReceived` before.
    pub fn end_auction(
        e: Env,
        id: u64,
        caller: Address,
    ) -> Result<SettlementInstruction, AuctionError> {
        AuctionHouse::end(&e, id, caller)
    }

    /// Mark an auction whose window ran out without a sale as ended
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

    /// `true` once a bid was accepted or the window ran out
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
