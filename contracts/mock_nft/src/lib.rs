#![no_std]

//! Minimal non-fungible registry used as the asset registry in auction tests.
//!
//! Supports single-token approval: the owner approves one spender per token,
//! and the approval is cleared whenever the token changes hands.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, Symbol};


// ============================================================================
// Error Types
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// NFT with the given token_id does not exist
    NFTNotFound = 3,
    /// Caller is not the owner of the NFT
    NotOwner = 4,
    /// Spender is not approved for the NFT
    NotApproved = 5,
}

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    Admin,
    /// Last minted token id
    TokenCounter,
    /// Owner mapping (token_id -> Address)
    Owner(u32),
    /// Approved spender (token_id -> Address)
    Approved(u32),
    /// Number of tokens held (owner -> u32)
    Balance(Address),
}

// ============================================================================
// Storage Module
// ============================================================================

mod storage {
    use super::*;

    pub fn set_admin(e: &Env, admin: &Address) {
        e.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_admin(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Admin)
    }

    pub fn has_admin(e: &Env) -> bool {
        e.storage().instance().has(&DataKey::Admin)
    }

    pub fn increment_token_counter(e: &Env) -> u32 {
        let count: u32 = e
            .storage()
            .instance()
            .get(&DataKey::TokenCounter)
            .unwrap_or(0);
        let new_count = count + 1;
        e.storage()
            .instance()
            .set(&DataKey::TokenCounter, &new_count);
        new_count
    }

    pub fn get_owner(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Owner(token_id))
    }

    pub fn set_owner(e: &Env, token_id: u32, owner: &Address) {
        e.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), owner);
    }

    pub fn get_approved(e: &Env, token_id: u32) -> Option<Address> {
        e.storage().persistent().get(&DataKey::Approved(token_id))
    }

    pub fn set_approved(e: &Env, token_id: u32, spender: Option<&Address>) {
        let key = DataKey::Approved(token_id);
        match spender {
            Some(spender) => e.storage().persistent().set(&key, spender),
            None => e.storage().persistent().remove(&key),
        }
    }

    pub fn balance(e: &Env, owner: &Address) -> u32 {
        e.storage()
            .persistent()
            .get(&DataKey::Balance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn set_balance(e: &Env, owner: &Address, balance: u32) {
        e.storage()
            .persistent()
            .set(&DataKey::Balance(owner.clone()), &balance);
    }
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct MockNftContract;

#[contractimpl]
impl MockNftContract {
    /// Initialize the registry with an admin allowed to mint
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&e) {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_admin(&e, &admin);
        e.storage().instance().set(&DataKey::TokenCounter, &0u32);
        Ok(())
    }

    /// Mint a new token to `to`, returning its id
    pub fn mint(e: Env, to: Address) -> Result<u32, ContractError> {
        let admin = storage::get_admin(&e).ok_or(ContractError::NotInitialized)?;
        admin.require_auth();

        let token_id = storage::increment_token_counter(&e);
        storage::set_owner(&e, token_id, &to);
        storage::set_balance(&e, &to, storage::balance(&e, &to) + 1);

        e.events()
            .publish((Symbol::new(&e, "Mint"), token_id), to);

        Ok(token_id)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, ContractError> {
        storage::get_owner(&e, token_id).ok_or(ContractError::NFTNotFound)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        storage::balance(&e, &owner)
    }

    /// Approve `spender` to move `token_id`, or clear the approval with `None`
    ///
    /// # Errors
    /// * `NFTNotFound` - If the NFT does not exist
    /// * `NotOwner` - If `owner` does not hold the NFT
    pub fn approve(
        e: Env,
        owner: Address,
        spender: Option<Address>,
        token_id: u32,
    ) -> Result<(), ContractError> {
        owner.require_auth();

        let current_owner = storage::get_owner(&e, token_id).ok_or(ContractError::NFTNotFound)?;
        if current_owner != owner {
            return Err(ContractError::NotOwner);
        }

        storage::set_approved(&e, token_id, spender.as_ref());
        e.events()
            .publish((Symbol::new(&e, "Approve"), token_id), (owner, spender));

        Ok(())
    }

    pub fn get_approved(e: Env, token_id: u32) -> Result<Option<Address>, ContractError> {
        storage::get_owner(&e, token_id).ok_or(ContractError::NFTNotFound)?;
        Ok(storage::get_approved(&e, token_id))
    }

    /// Transfer an NFT held by `from`
    ///
    /// # Errors
    /// * `NFTNotFound` - If the NFT does not exist
    /// * `NotOwner` - If `from` does not hold the NFT
    pub fn transfer(
        e: Env,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        from.require_auth();
        move_token(&e, &from, &to, token_id)
    }

    /// Transfer an NFT on behalf of its owner
    ///
    /// # Errors
    /// * `NotApproved` - If `spender` is not the approved address
    /// * `NFTNotFound`, `NotOwner` - as for `transfer`
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), ContractError> {
        spender.require_auth();

        if storage::get_approved(&e, token_id) != Some(spender) {
            return Err(ContractError::NotApproved);
        }
        move_token(&e, &from, &to, token_id)
    }
}

fn move_token(e: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), ContractError> {
    let current_owner = storage::get_owner(e, token_id).ok_or(ContractError::NFTNotFound)?;
    if current_owner != *from {
        return Err(ContractError::NotOwner);
    }

    storage::set_owner(e, token_id, to);
    storage::set_approved(e, token_id, None);
    storage::set_balance(e, from, storage::balance(e, from).saturating_sub(1));
    storage::set_balance(e, to, storage::balance(e, to) + 1);

    e.events().publish(
        (Symbol::new(e, "Transfer"), token_id),
        (from.clone(), to.clone()),
    );

    Ok(())
}
