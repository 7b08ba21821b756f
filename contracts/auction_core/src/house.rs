//! Orchestration of auction operations against host storage.
//!
//! Each operation loads one auction, runs the pure processor or lifecycle
//! step, then commits: the next state is persisted with the busy flag set,
//! the settlement runs, and the flag is cleared again.

use shared_utils::{ErrorHelper, TimeUtils};
use soroban_sdk::{log, Address, Env};

use crate::error::AuctionError;
use crate::events::AuctionEvents;
use crate::lifecycle::AuctionLifecycle;
use crate::price::PriceSchedule;
use crate::processor::BidProcessor;
use crate::settlement::SettlementEngine;
use crate::storage::AuctionStore;
use crate::types::{
    Auction, AuctionConfig, AuctionState, EscrowedAsset, SettlementInstruction, Transition,
};

pub struct AuctionHouse;

impl AuctionHouse {
    /// Fix the payment token for every auction of this contract
    pub fn init(e: &Env, payment_token: &Address) {
        AuctionStore::set_payment_token(e, payment_token);
    }

    /// Create a new auction opening at the current ledger
    ///
    /// With `asset` set, the seller must own the token and have approved
    /// this contract for it; the token moves into the contract's custody
    /// until the auction settles.
    pub fn open(
        e: &Env,
        owner: Address,
        reserve_price: i128,
        num_ledgers_open: u32,
        offer_price_decrement: i128,
        immediate_settlement: bool,
        asset: Option<EscrowedAsset>,
    ) -> Result<u64, AuctionError> {
        owner.require_auth();

        let payment_token = AuctionStore::payment_token(e)?;
        let config = AuctionConfig::new(
            owner,
            payment_token,
            reserve_price,
            num_ledgers_open,
            offer_price_decrement,
            immediate_settlement,
            asset,
        )
        .map_err(|err| Self::rejected(e, "create_auction", err))?;

        if let Some(asset) = &config.asset {
            SettlementEngine::escrow(e, asset, &config.owner)
                .map_err(|err| Self::rejected(e, "create_auction", err))?;
        }

        let id = AuctionStore::next_id(e);
        let auction = Auction {
            id,
            state: AuctionState::open(TimeUtils::now(e)),
            config,
        };
        AuctionStore::save(e, &auction);

        AuctionEvents::started(e, id, &auction.config.owner, auction.config.initial_price);
        log!(e, "auction {} opened at {}", id, auction.config.initial_price);

        Ok(id)
    }

    /// Place a bid of `amount` on auction `id`
    pub fn bid(
        e: &Env,
        id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<SettlementInstruction, AuctionError> {
        bidder.require_auth();

        let mut auction = AuctionStore::load(e, id)?;
        let transition = BidProcessor::submit_bid(
            &auction.config,
            &auction.state,
            &bidder,
            amount,
            TimeUtils::now(e),
        )
        .map_err(|err| Self::rejected(e, "bid", err))?;

        let settlement = Self::commit(e, &mut auction, transition, Some(&bidder))
            .map_err(|err| Self::rejected(e, "bid", err))?;

        if let Some(refund) = settlement.superseded_refund() {
            AuctionEvents::bid_refunded(e, id, &refund.to, refund.amount);
        }
        if auction.state.ended {
            AuctionEvents::ended(e, id, &bidder, auction.state.winning_bid);
        } else {
            AuctionEvents::bid_placed(e, id, &bidder, amount);
        }

        Ok(settlement)
    }

    /// End auction `id` early on request of its owner or custodian
    pub fn end(
        e: &Env,
        id: u64,
        caller: Address,
    ) -> Result<SettlementInstruction, AuctionError> {
        caller.require_auth();

        let mut auction = AuctionStore::load(e, id)?;
        let transition = AuctionLifecycle::force_end(&auction.config, &auction.state, &caller)
            .map_err(|err| Self::rejected(e, "end_auction", err))?;

        let settlement = Self::commit(e, &mut auction, transition, None)
            .map_err(|err| Self::rejected(e, "end_auction", err))?;
        Self::publish_end(e, &auction);

        Ok(settlement)
    }

    /// Close auction `id` once its window has run out
    pub fn close_expired(e: &Env, id: u64) -> Result<SettlementInstruction, AuctionError> {
        let mut auction = AuctionStore::load(e, id)?;
        let transition =
            AuctionLifecycle::close_expired(&auction.config, &auction.state, TimeUtils::now(e))
                .map_err(|err| Self::rejected(e, "close_expired", err))?;

        let settlement = Self::commit(e, &mut auction, transition, None)
            .map_err(|err| Self::rejected(e, "close_expired", err))?;
        Self::publish_end(e, &auction);

        Ok(settlement)
    }

    pub fn current_price(e: &Env, id: u64) -> Result<i128, AuctionError> {
        let auction = AuctionStore::load(e, id)?;
        Ok(PriceSchedule::current_price(
            &auction.config,
            auction.state.start_ledger,
            TimeUtils::now(e),
        ))
    }

    /// `true` once the auction ended or its window ran out
    pub fn is_ended(e: &Env, id: u64) -> Result<bool, AuctionError> {
        let auction = AuctionStore::load(e, id)?;
        Ok(auction.state.ended || auction.state.is_expired(&auction.config, TimeUtils::now(e)))
    }

    pub fn auction(e: &Env, id: u64) -> Result<Auction, AuctionError> {
        AuctionStore::load(e, id)
    }

    pub fn config(e: &Env, id: u64) -> Result<AuctionConfig, AuctionError> {
        Ok(AuctionStore::load(e, id)?.config)
    }

    pub fn state(e: &Env, id: u64) -> Result<AuctionState, AuctionError> {
        Ok(AuctionStore::load(e, id)?.state)
    }

    pub fn count(e: &Env) -> u64 {
        AuctionStore::count(e)
    }

    pub fn payment_token(e: &Env) -> Result<Address, AuctionError> {
        AuctionStore::payment_token(e)
    }

    // Persist `transition` with the busy flag raised, run the settlement,
    // then lower the flag. Any error aborts the whole invocation.
    fn commit(
        e: &Env,
        auction: &mut Auction,
        transition: Transition,
        payer: Option<&Address>,
    ) -> Result<SettlementInstruction, AuctionError> {
        let Transition { state, settlement } = transition;
        let held = auction.state.escrow.saturating_add(settlement.received);

        auction.state = AuctionState {
            settling: true,
            ..state
        };
        AuctionStore::save(e, auction);

        if settlement.received > 0 {
            let payer = payer.ok_or(AuctionError::SettlementFailure)?;
            SettlementEngine::collect(e, &auction.config.payment_token, payer, settlement.received)?;
        }
        SettlementEngine::execute(e, &auction.config, &settlement, held)?;

        auction.state.settling = false;
        AuctionStore::save(e, auction);

        Ok(settlement)
    }

    fn publish_end(e: &Env, auction: &Auction) {
        match &auction.state.highest_bidder {
            Some(winner) => {
                AuctionEvents::ended(e, auction.id, winner, auction.state.winning_bid)
            }
            None => AuctionEvents::expired(e, auction.id, &auction.config.owner),
        }
    }

    fn rejected(e: &Env, context: &str, err: AuctionError) -> AuctionError {
        ErrorHelper::reject(e, context, err.message(), err)
    }
}
