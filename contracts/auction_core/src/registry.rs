//! Client interface for the non-fungible asset registry used by the
//! custodial auction.
//!
//! Any registry exposing these entry points can back an auction: the seller
//! approves the auction contract for the token, the auction pulls it into
//! its own custody with `transfer_from` at creation, and hands it out with
//! `transfer` when the auction settles.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of `token_id`
    fn owner_of(env: Env, token_id: u32) -> Address;

    /// Move `token_id` held by `from` to `to`
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);

    /// Move `token_id` from `from` to `to` on behalf of the approved `spender`
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}
