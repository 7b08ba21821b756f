//! Time utilities for ledger-sequence based schedules
//!
//! Auctions measure time in ledgers: the ledger sequence number is the
//! monotonically increasing counter every schedule is derived from.

use soroban_sdk::Env;

/// Time utility functions for working with ledger sequence numbers
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger sequence number
    pub fn now(e: &Env) -> u32 {
        e.ledger().sequence()
    }

    /// Ledgers elapsed between `start` and `now` (0 if `now` is before `start`)
    pub fn elapsed(start: u32, now: u32) -> u32 {
        now.saturating_sub(start)
    }

    /// Ledgers elapsed since `start`, clamped to `window`
    ///
    /// # Arguments
    /// * `start` - The first ledger of the window
    /// * `now` - The current ledger
    /// * `window` - Window length in ledgers
    ///
    /// # Returns
    /// A value in `[0, window]`
    pub fn elapsed_within(start: u32, now: u32, window: u32) -> u32 {
        Self::elapsed(start, now).min(window)
    }

    /// Check if a window opened at `start` has run out (elapsed >= window)
    pub fn is_expired(start: u32, window: u32, now: u32) -> bool {
        Self::elapsed(start, now) >= window
    }
}
