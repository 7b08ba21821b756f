//! Forced and expiry-driven termination.

use shared_utils::AccessControl;
use soroban_sdk::Address;

use crate::error::AuctionError;
use crate::types::{AuctionConfig, AuctionState, Payout, SettlementInstruction, Transition};

pub struct AuctionLifecycle;

impl AuctionLifecycle {
    /// End the auction on request of the owner or the custodian named at
    /// creation
    ///
    /// # Errors
    /// * `ReentrancyDetected` - a settlement for this auction is in flight
    /// * `AlreadyEnded` - the auction is already in its terminal state
    /// * `Unauthorized` - `caller` is neither owner nor custodian
    /// * `NoBidsReceived` - there is no standing bid to settle
    pub fn force_end(
        config: &AuctionConfig,
        state: &AuctionState,
        caller: &Address,
    ) -> Result<Transition, AuctionError> {
        if state.settling {
            return Err(AuctionError::ReentrancyDetected);
        }
        if state.ended {
            return Err(AuctionError::AlreadyEnded);
        }
        AccessControl::require_owner_or_custodian(
            caller,
            &config.owner,
            config.custodian(),
            AuctionError::Unauthorized,
        )?;
        if !state.has_bid() {
            return Err(AuctionError::NoBidsReceived);
        }

        Ok(Self::settle_standing_bid(config, state))
    }

    /// Terminate an auction whose window has run out
    ///
    /// Anyone may call this. A standing bid is settled exactly like
    /// `force_end`; without one the auction is marked ended and an escrowed
    /// asset goes back to the owner.
    pub fn close_expired(
        config: &AuctionConfig,
        state: &AuctionState,
        now: u32,
    ) -> Result<Transition, AuctionError> {
        if state.settling {
            return Err(AuctionError::ReentrancyDetected);
        }
        if state.ended {
            return Err(AuctionError::AlreadyEnded);
        }
        if !state.is_expired(config, now) {
            return Err(AuctionError::AuctionStillOpen);
        }

        if state.has_bid() {
            return Ok(Self::settle_standing_bid(config, state));
        }

        let mut next = state.clone();
        next.ended = true;
        Ok(Transition {
            state: next,
            settlement: SettlementInstruction {
                received: 0,
                payment: None,
                refund: None,
                asset_recipient: config.asset.as_ref().map(|_| config.owner.clone()),
            },
        })
    }

    // Escrowed value to the owner, asset to the highest bidder
    fn settle_standing_bid(config: &AuctionConfig, state: &AuctionState) -> Transition {
        let mut next = state.clone();
        next.ended = true;
        next.escrow = 0;

        let payment = if state.escrow > 0 {
            Some(Payout {
                to: config.owner.clone(),
                amount: state.escrow,
            })
        } else {
            None
        };
        let asset_recipient = match config.asset {
            Some(_) => state.highest_bidder.clone(),
            None => None,
        };

        Transition {
            state: next,
            settlement: SettlementInstruction {
                received: 0,
                payment,
                refund: None,
                asset_recipient,
            },
        }
    }
}
