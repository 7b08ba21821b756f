//! Linear descending price schedule.
//!
//! The price starts at `initial_price` on the opening ledger and drops by
//! `offer_price_decrement` per elapsed ledger, never below `reserve_price`.

use shared_utils::{SafeMath, TimeUtils};

use crate::types::AuctionConfig;

pub struct PriceSchedule;

impl PriceSchedule {
    /// Opening price for the given parameters, `None` on overflow
    pub fn initial_price(
        reserve_price: i128,
        num_ledgers_open: u32,
        offer_price_decrement: i128,
    ) -> Option<i128> {
        SafeMath::linear_total(reserve_price, offer_price_decrement, num_ledgers_open)
    }

    /// Price at ledger `now` for an auction opened at `start_ledger`
    pub fn current_price(config: &AuctionConfig, start_ledger: u32, now: u32) -> i128 {
        let elapsed = TimeUtils::elapsed_within(start_ledger, now, config.num_ledgers_open);
        // elapsed <= num_ledgers_open, so the product fits whenever initial_price did
        let drop = SafeMath::mul_units(config.offer_price_decrement, elapsed).unwrap_or(i128::MAX);
        SafeMath::sub_floored(config.initial_price, drop, config.reserve_price)
    }

    /// `true` once `num_ledgers_open` ledgers have passed since `start_ledger`
    pub fn is_expired(config: &AuctionConfig, start_ledger: u32, now: u32) -> bool {
        TimeUtils::is_expired(start_ledger, config.num_ledgers_open, now)
    }
}
