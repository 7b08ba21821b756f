//! Bid admission.
//!
//! `submit_bid` is pure: it validates a bid against the auction's config and
//! state and returns the next state together with the settlement that has to
//! commit alongside it. Nothing is written until the caller commits.

use shared_utils::Validation;
use soroban_sdk::Address;

use crate::error::AuctionError;
use crate::price::PriceSchedule;
use crate::types::{
    AuctionConfig, AuctionState, Payout, Refund, RefundReason, SettlementInstruction, Transition,
};

pub struct BidProcessor;

impl BidProcessor {
    /// Validate and admit a bid
    ///
    /// Checks run in order: busy flag, open window, owner, price.
    ///
    /// # Errors
    /// * `ReentrancyDetected` - a settlement for this auction is in flight
    /// * `AuctionClosed` - the auction has ended or its window ran out
    /// * `OwnerCannotBid` - `bidder` is the seller
    /// * `BidTooLow` - `amount` is below the current price
    pub fn submit_bid(
        config: &AuctionConfig,
        state: &AuctionState,
        bidder: &Address,
        amount: i128,
        now: u32,
    ) -> Result<Transition, AuctionError> {
        if state.settling {
            return Err(AuctionError::ReentrancyDetected);
        }
        if !state.is_open(config, now) {
            return Err(AuctionError::AuctionClosed);
        }
        if *bidder == config.owner {
            return Err(AuctionError::OwnerCannotBid);
        }

        let price = PriceSchedule::current_price(config, state.start_ledger, now);
        Validation::require_min(amount, price, AuctionError::BidTooLow)?;

        if config.immediate_settlement {
            Ok(Self::conclude(config, state, bidder, amount, price))
        } else {
            Ok(Self::supersede(state, bidder, amount))
        }
    }

    /// First qualifying bid wins at the current price
    fn conclude(
        config: &AuctionConfig,
        state: &AuctionState,
        bidder: &Address,
        amount: i128,
        price: i128,
    ) -> Transition {
        let excess = amount - price;

        let mut next = state.clone();
        next.ended = true;
        next.highest_bidder = Some(bidder.clone());
        next.winning_bid = price;
        next.escrow = 0;

        let refund = if excess > 0 {
            Some(Refund {
                to: bidder.clone(),
                amount: excess,
                reason: RefundReason::Excess,
            })
        } else {
            None
        };

        Transition {
            state: next,
            settlement: SettlementInstruction {
                received: amount,
                payment: Some(Payout {
                    to: config.owner.clone(),
                    amount: price,
                }),
                refund,
                asset_recipient: config.asset.as_ref().map(|_| bidder.clone()),
            },
        }
    }

    /// Hold the full amount as the standing bid and return the previous one
    fn supersede(state: &AuctionState, bidder: &Address, amount: i128) -> Transition {
        let refund = match &state.highest_bidder {
            Some(previous) if state.escrow > 0 => Some(Refund {
                to: previous.clone(),
                amount: state.escrow,
                reason: RefundReason::Superseded,
            }),
            _ => None,
        };

        let mut next = state.clone();
        next.highest_bidder = Some(bidder.clone());
        next.winning_bid = amount;
        next.escrow = amount;

        Transition {
            state: next,
            settlement: SettlementInstruction {
                received: amount,
                payment: None,
                refund,
                asset_recipient: None,
            },
        }
    }
}
