//! Auction events.
//!
//! Every event is published under `(symbol, auction_id)` topics.

use shared_utils::Events;
use soroban_sdk::{symbol_short, Address, Env};

pub struct AuctionEvents;

impl AuctionEvents {
    /// `AucStart` -> `(owner, initial_price)`
    pub fn started(e: &Env, id: u64, owner: &Address, initial_price: i128) {
        Events::emit_for_id(e, symbol_short!("AucStart"), id, (owner.clone(), initial_price));
    }

    /// `BidPlaced` -> `(bidder, amount)`, a standing bid held in escrow
    pub fn bid_placed(e: &Env, id: u64, bidder: &Address, amount: i128) {
        Events::emit_for_id(e, symbol_short!("BidPlaced"), id, (bidder.clone(), amount));
    }

    /// `BidRefund` -> `(previous_bidder, amount)`
    pub fn bid_refunded(e: &Env, id: u64, previous_bidder: &Address, amount: i128) {
        Events::emit_for_id(
            e,
            symbol_short!("BidRefund"),
            id,
            (previous_bidder.clone(), amount),
        );
    }

    /// `AucEnd` -> `(winner, winning_bid)`
    pub fn ended(e: &Env, id: u64, winner: &Address, winning_bid: i128) {
        Events::emit_for_id(e, symbol_short!("AucEnd"), id, (winner.clone(), winning_bid));
    }

    /// `AucExpire` -> `owner`
    pub fn expired(e: &Env, id: u64, owner: &Address) {
        Events::emit_for_id(e, symbol_short!("AucExpire"), id, owner.clone());
    }
}
