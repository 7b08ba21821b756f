//! Math utilities for overflow-checked price arithmetic

/// Checked math operations on token amounts
///
/// Every operation returns `None` instead of wrapping or panicking so the
/// calling contract can surface its own error code.
pub struct SafeMath;

impl SafeMath {
    /// Add two amounts, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Multiply an amount by a count of time units
    ///
    /// # Arguments
    /// * `amount` - The per-unit amount
    /// * `units` - Number of units
    ///
    /// # Returns
    /// `amount * units`, or `None` on overflow
    pub fn mul_units(amount: i128, units: u32) -> Option<i128> {
        amount.checked_mul(units as i128)
    }

    /// Compute `base + step * units`, `None` on overflow
    ///
    /// Used to derive the opening price of a linear descending schedule.
    pub fn linear_total(base: i128, step: i128, units: u32) -> Option<i128> {
        Self::mul_units(step, units).and_then(|delta| Self::add(base, delta))
    }

    /// Subtract without going below `floor`
    ///
    /// # Returns
    /// `max(value - amount, floor)`; saturates instead of overflowing
    pub fn sub_floored(value: i128, amount: i128, floor: i128) -> i128 {
        value.saturating_sub(amount).max(floor)
    }
}
