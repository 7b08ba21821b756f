//! Access control as explicit capability checks on the caller identity

use soroban_sdk::Address;

/// A privilege held by a caller over a single auction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    /// The seller that created the auction
    Owner,
    /// The party the seller authorized to act on the escrowed asset
    Custodian,
}

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Check if an address is the owner
    ///
    /// # Arguments
    /// * `address` - The address to check
    /// * `owner` - The owner address
    ///
    /// # Returns
    /// `true` if address is the owner, `false` otherwise
    pub fn is_owner(address: &Address, owner: &Address) -> bool {
        *address == *owner
    }

    /// Resolve the capability `caller` holds, if any
    ///
    /// Ownership wins over custody when both apply.
    ///
    /// # Arguments
    /// * `caller` - The caller address
    /// * `owner` - The owner address
    /// * `custodian` - The current asset custodian, when an asset is escrowed
    pub fn capability_of(
        caller: &Address,
        owner: &Address,
        custodian: Option<&Address>,
    ) -> Option<Capability> {
        if Self::is_owner(caller, owner) {
            return Some(Capability::Owner);
        }
        match custodian {
            Some(custodian) if *caller == *custodian => Some(Capability::Custodian),
            _ => None,
        }
    }

    /// Require that `caller` holds the owner or custodian capability
    ///
    /// # Errors
    /// Returns `err` when the caller holds neither
    pub fn require_owner_or_custodian<E>(
        caller: &Address,
        owner: &Address,
        custodian: Option<&Address>,
        err: E,
    ) -> Result<Capability, E> {
        Self::capability_of(caller, owner, custodian).ok_or(err)
    }
}
