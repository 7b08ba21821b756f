#![no_std]

//! Shared utility library for the Dutch auction contracts
//!
//! This library provides the common helpers used by `auction_core` and the
//! auction contracts built on top of it:
//! - Math utilities (checked i128 arithmetic)
//! - Time utilities (ledger-sequence based elapsed/expiry math)
//! - Validation utilities
//! - Access control capability checks
//! - Event emission patterns
//! - Error logging helpers

pub mod access_control;
pub mod errors;
pub mod events;
pub mod math;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use time::*;
pub use validation::*;
