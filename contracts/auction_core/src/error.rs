//! Auction error codes.
//!
//! Codes 1-4 and 14 are configuration errors raised at auction creation;
//! the rest are raised by bids and lifecycle calls.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    /// Reserve price must be greater than zero
    InvalidReservePrice = 1,
    /// Auction must stay open for at least one ledger
    InvalidDuration = 2,
    /// Offer price decrement must be greater than zero
    InvalidPriceDecrement = 3,
    /// Opening price does not fit in an i128
    PriceOverflow = 4,
    /// No auction with the given id
    AuctionNotFound = 5,
    /// Auction has ended or its window has run out
    AuctionClosed = 6,
    /// The seller tried to bid on their own auction
    OwnerCannotBid = 7,
    /// Bid is below the current price
    BidTooLow = 8,
    /// Caller holds neither the owner nor the custodian capability
    Unauthorized = 9,
    /// Forced end without any standing bid
    NoBidsReceived = 10,
    /// Auction already reached its terminal state
    AlreadyEnded = 11,
    /// A transfer leg failed; the whole call is reverted
    SettlementFailure = 12,
    /// A settlement for this auction is still in progress
    ReentrancyDetected = 13,
    /// Asset could not be taken into escrow at creation
    AssetNotEscrowed = 14,
    /// Auction window has not run out yet
    AuctionStillOpen = 15,
    /// Payment token was never configured
    NotInitialized = 16,
}

impl AuctionError {
    /// Human-readable message for this error (for logs and clients).
    pub fn message(&self) -> &'static str {
        match self {
            AuctionError::InvalidReservePrice => "Reserve price should be greater than 0",
            AuctionError::InvalidDuration => "Auction must be open for at least one ledger",
            AuctionError::InvalidPriceDecrement => {
                "Offer price decrement should be greater than 0"
            }
            AuctionError::PriceOverflow => "Initial price overflows",
            AuctionError::AuctionNotFound => "Auction not found",
            AuctionError::AuctionClosed => "Auction is closed",
            AuctionError::OwnerCannotBid => "Owner cannot place a bid",
            AuctionError::BidTooLow => "Bid is not high enough",
            AuctionError::Unauthorized => "Only owner or custodian can end the auction",
            AuctionError::NoBidsReceived => "No bids received",
            AuctionError::AlreadyEnded => "Auction has already ended",
            AuctionError::SettlementFailure => "Settlement transfer failed",
            AuctionError::ReentrancyDetected => "Reentrancy detected",
            AuctionError::AssetNotEscrowed => "Asset could not be taken into escrow",
            AuctionError::AuctionStillOpen => "Auction has not finished yet",
            AuctionError::NotInitialized => "Contract not initialized",
        }
    }
}
