use shared_utils::Validation;
use soroban_sdk::{contracttype, Address};

use crate::error::AuctionError;
use crate::price::PriceSchedule;

// ============================================================================
// Configuration
// ============================================================================

/// Non-fungible asset held in escrow for the custodial variant
///
/// The auction contract owns the token from creation until settlement.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowedAsset {
    pub registry: Address,
    pub token_id: u32,
    /// Party the seller authorized to end the auction on its behalf
    pub custodian: Option<Address>,
}

/// Immutable auction parameters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub owner: Address,
    pub payment_token: Address,
    pub reserve_price: i128,
    pub num_ledgers_open: u32,
    pub offer_price_decrement: i128,
    /// Always `reserve_price + offer_price_decrement * num_ledgers_open`
    pub initial_price: i128,
    /// End on the first qualifying bid instead of keeping bidding open
    pub immediate_settlement: bool,
    pub asset: Option<EscrowedAsset>,
}

impl AuctionConfig {
    /// Validate the parameters and derive the opening price
    ///
    /// # Errors
    /// * `InvalidReservePrice` - `reserve_price <= 0`
    /// * `InvalidDuration` - `num_ledgers_open == 0`
    /// * `InvalidPriceDecrement` - `offer_price_decrement <= 0`
    /// * `PriceOverflow` - the opening price does not fit in an i128
    pub fn new(
        owner: Address,
        payment_token: Address,
        reserve_price: i128,
        num_ledgers_open: u32,
        offer_price_decrement: i128,
        immediate_settlement: bool,
        asset: Option<EscrowedAsset>,
    ) -> Result<Self, AuctionError> {
        Validation::require_positive(reserve_price, AuctionError::InvalidReservePrice)?;
        Validation::require_valid_duration(num_ledgers_open, AuctionError::InvalidDuration)?;
        Validation::require_positive(offer_price_decrement, AuctionError::InvalidPriceDecrement)?;

        let initial_price =
            PriceSchedule::initial_price(reserve_price, num_ledgers_open, offer_price_decrement)
                .ok_or(AuctionError::PriceOverflow)?;

        Ok(Self {
            owner,
            payment_token,
            reserve_price,
            num_ledgers_open,
            offer_price_decrement,
            initial_price,
            immediate_settlement,
            asset,
        })
    }

    /// Custodian of the escrowed asset, if one was named at creation
    pub fn custodian(&self) -> Option<&Address> {
        self.asset.as_ref().and_then(|asset| asset.custodian.as_ref())
    }
}

// ============================================================================
// Mutable state
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub start_ledger: u32,
    pub ended: bool,
    pub highest_bidder: Option<Address>,
    pub winning_bid: i128,
    /// Value the contract holds for this auction between calls
    pub escrow: i128,
    /// Busy flag, set while a settlement's transfers are in flight
    pub settling: bool,
}

impl AuctionState {
    pub fn open(start_ledger: u32) -> Self {
        Self {
            start_ledger,
            ended: false,
            highest_bidder: None,
            winning_bid: 0,
            escrow: 0,
            settling: false,
        }
    }

    /// `true` once the window opened at `start_ledger` has run out
    pub fn is_expired(&self, config: &AuctionConfig, now: u32) -> bool {
        PriceSchedule::is_expired(config, self.start_ledger, now)
    }

    /// `true` while bids can still be admitted
    pub fn is_open(&self, config: &AuctionConfig, now: u32) -> bool {
        !self.ended && !self.is_expired(config, now)
    }

    pub fn has_bid(&self) -> bool {
        self.highest_bidder.is_some()
    }
}

/// One arena entry: an auction's id, parameters and state
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub config: AuctionConfig,
    pub state: AuctionState,
}

// ============================================================================
// Settlement instructions
// ============================================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefundReason {
    /// Bid amount above the accepted price, returned to the same bidder
    Excess,
    /// Standing bid replaced by a newer qualifying bid
    Superseded,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refund {
    pub to: Address,
    pub amount: i128,
    pub reason: RefundReason,
}

/// The transfers that conclude one operation
///
/// `received` flows in from the bidder; `payment` and `refund` flow out of
/// the contract; `asset_recipient` receives the escrowed asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementInstruction {
    pub received: i128,
    pub payment: Option<Payout>,
    pub refund: Option<Refund>,
    pub asset_recipient: Option<Address>,
}

impl SettlementInstruction {
    /// Total value leaving the contract
    pub fn outflow(&self) -> i128 {
        let paid = self.payment.as_ref().map(|p| p.amount).unwrap_or(0);
        let refunded = self.refund.as_ref().map(|r| r.amount).unwrap_or(0);
        paid.saturating_add(refunded)
    }

    pub fn superseded_refund(&self) -> Option<&Refund> {
        self.refund
            .as_ref()
            .filter(|r| r.reason == RefundReason::Superseded)
    }
}

/// Next state plus the settlement that must commit with it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    pub state: AuctionState,
    pub settlement: SettlementInstruction,
}
