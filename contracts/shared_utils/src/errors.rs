//! Error logging helpers
//!
//! Contracts return their own `#[contracterror]` codes; these helpers only
//! record the rejection in the host's debug log.

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with context
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The error context (operation name)
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }

    /// Log `message` under `context` and hand `err` back to the caller
    ///
    /// Lets call sites write `return Err(ErrorHelper::reject(e, "bid", msg, err))`.
    pub fn reject<E>(e: &Env, context: &str, message: &str, err: E) -> E {
        Self::log_error_with_context(e, context, message);
        err
    }
}
