//! Integration Test Suite for the auction contracts
//!
//! This module validates:
//! - Complete auction flows across the auction, registry and token contracts
//! - Error scenarios and rollback guarantees
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `e2e_tests`: End-to-end flow tests
//! - `error_tests`: Error and edge case tests

#![cfg(test)]

pub mod error_tests;
pub mod harness;

// Re-export commonly used items for convenience
pub use harness::*;
