//! Validation utilities for constructor and call arguments

/// Validation utility functions
///
/// Each check returns the caller-supplied error so contracts keep their
/// own `#[contracterror]` codes.
pub struct Validation;

impl Validation {
    /// Validate that an amount is greater than zero
    ///
    /// # Arguments
    /// * `amount` - The amount to validate
    /// * `err` - Error returned when `amount <= 0`
    pub fn require_positive<E>(amount: i128, err: E) -> Result<(), E> {
        if amount <= 0 {
            return Err(err);
        }
        Ok(())
    }

    /// Validate that a ledger count is greater than zero
    ///
    /// # Arguments
    /// * `ledgers` - The duration in ledgers
    /// * `err` - Error returned when `ledgers == 0`
    pub fn require_valid_duration<E>(ledgers: u32, err: E) -> Result<(), E> {
        if ledgers == 0 {
            return Err(err);
        }
        Ok(())
    }

    /// Validate that `value >= min`
    pub fn require_min<E>(value: i128, min: i128, err: E) -> Result<(), E> {
        if value < min {
            return Err(err);
        }
        Ok(())
    }
}
