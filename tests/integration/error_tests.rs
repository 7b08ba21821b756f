//! Error and Edge Case Tests
//!
//! Every rejected call must leave balances, asset custody and auction
//! state exactly as they were.

use crate::assert_err;
use crate::harness::{
    TestHarness, DEFAULT_USER_BALANCE, LEDGERS_OPEN, PRICE_DECREMENT, RESERVE_PRICE,
};
use auction_core::AuctionError;
use mock_nft::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

/// Test: Nobody but the owner can end a direct auction
#[test]
fn test_error_unauthorized_end() {
    let harness = TestHarness::new();
    let auction = harness.dutch_auction();
    let id = harness.open_direct_auction();

    assert_err!(
        auction.try_end_auction(&id, &harness.accounts.attacker),
        Ok(AuctionError::Unauthorized)
    );
    assert_err!(
        auction.try_end_auction(&id, &harness.accounts.seller),
        Ok(AuctionError::NoBidsReceived)
    );
}

/// Test: An attacker cannot end a custodial auction holding someone's bid
#[test]
fn test_error_attacker_cannot_end_custodial_auction() {
    let harness = TestHarness::new();
    let auction = harness.nft_auction();
    let (id, _) = harness.open_asset_auction(false);

    auction.bid(&id, &harness.accounts.bidder1, &2_000);

    assert_err!(
        auction.try_end_auction(&id, &harness.accounts.attacker),
        Ok(AuctionError::Unauthorized)
    );
    assert_eq!(harness.balance(&harness.contracts.nft_auction), 2_000);
    assert!(!auction.auction_ended(&id));
}

/// Test: Once listed, the seller cannot pull the asset out from under a bid
#[test]
fn test_error_seller_cannot_withdraw_listed_asset() {
    let harness = TestHarness::new();
    let auction = harness.nft_auction();
    let registry = harness.registry();
    let seller = &harness.accounts.seller;
    let bidder = &harness.accounts.bidder1;

    let (id, asset_id) = harness.open_asset_auction(false);
    auction.bid(&id, bidder, &2_000);

    assert_err!(
        registry.try_transfer(seller, &harness.accounts.attacker, &asset_id),
        Ok(ContractError::NotOwner)
    );
    assert_err!(
        registry.try_approve(seller, &None, &asset_id),
        Ok(ContractError::NotOwner)
    );

    // The standing bid still settles after the window runs out
    harness.advance_ledgers(LEDGERS_OPEN);
    auction.close_expired(&id);

    assert_eq!(registry.owner_of(&asset_id), *bidder);
    assert_eq!(harness.balance(seller), 2_000);
    assert_eq!(harness.balance(bidder), DEFAULT_USER_BALANCE - 2_000);
    assert_eq!(harness.balance(&harness.contracts.nft_auction), 0);
}

/// Test: An asset already in an auction cannot back a second one
#[test]
fn test_error_double_listing() {
    let harness = TestHarness::new();
    let auction = harness.nft_auction();
    let (_, asset_id) = harness.open_asset_auction(true);

    assert_err!(
        auction.try_create_auction(
            &harness.accounts.seller,
            &harness.contracts.registry,
            &asset_id,
            &RESERVE_PRICE,
            &LEDGERS_OPEN,
            &PRICE_DECREMENT,
            &true,
            &None,
        ),
        Ok(AuctionError::AssetNotEscrowed)
    );
    assert_eq!(auction.auction_count(), 1);
}

/// Test: A bidder without funds cannot supersede the standing bid
#[test]
fn test_error_unfunded_bid_keeps_standing_bid() {
    let harness = TestHarness::new();
    let auction = harness.nft_auction();
    let (id, _) = harness.open_asset_auction(false);
    let broke = Address::generate(&harness.env);

    auction.bid(&id, &harness.accounts.bidder1, &2_000);

    assert_err!(
        auction.try_bid(&id, &broke, &2_000),
        Ok(AuctionError::SettlementFailure)
    );
    assert_eq!(
        auction.highest_bidder(&id),
        Some(harness.accounts.bidder1.clone())
    );
    assert_eq!(harness.balance(&harness.contracts.nft_auction), 2_000);
    assert_eq!(
        harness.balance(&harness.accounts.bidder1),
        DEFAULT_USER_BALANCE - 2_000
    );
}

/// Test: Bids after the window are rejected even at the reserve
#[test]
fn test_error_bid_after_expiry() {
    let harness = TestHarness::new();
    let auction = harness.dutch_auction();
    let id = harness.open_direct_auction();

    harness.advance_ledgers(LEDGERS_OPEN);

    assert_err!(
        auction.try_bid(&id, &harness.accounts.bidder1, &5_000),
        Ok(AuctionError::AuctionClosed)
    );
    assert_eq!(
        harness.balance(&harness.accounts.bidder1),
        DEFAULT_USER_BALANCE
    );
}

/// Test: Operations on ids that were never created
#[test]
fn test_error_unknown_auction() {
    let harness = TestHarness::new();

    assert_err!(
        harness.dutch_auction().try_get_current_price(&42),
        Ok(AuctionError::AuctionNotFound)
    );
    assert_err!(
        harness.nft_auction().try_close_expired(&42),
        Ok(AuctionError::AuctionNotFound)
    );
    assert_err!(
        harness
            .nft_auction()
            .try_end_auction(&42, &harness.accounts.seller),
        Ok(AuctionError::AuctionNotFound)
    );
}

/// Test: Closing an auction that is still running
#[test]
fn test_error_close_before_expiry() {
    let harness = TestHarness::new();
    let auction = harness.dutch_auction();
    let id = harness.open_direct_auction();

    harness.advance_ledgers(LEDGERS_OPEN - 1);

    assert_err!(
        auction.try_close_expired(&id),
        Ok(AuctionError::AuctionStillOpen)
    );
}
