//! Value and asset transfers.
//!
//! Every leg goes through the fallible `try_` client call. A failed leg
//! surfaces as `SettlementFailure`; returning that error from the contract
//! entry point makes the host revert every write and transfer of the call.

use soroban_sdk::{token, Address, Env};

use crate::error::AuctionError;
use crate::registry::AssetRegistryClient;
use crate::types::{AuctionConfig, EscrowedAsset, SettlementInstruction};

pub struct SettlementEngine;

impl SettlementEngine {
    /// Pull `amount` of `token` from `from` into the contract
    pub fn collect(
        e: &Env,
        token: &Address,
        from: &Address,
        amount: i128,
    ) -> Result<(), AuctionError> {
        if amount <= 0 {
            return Ok(());
        }
        let client = token::TokenClient::new(e, token);
        let result = client.try_transfer(from, &e.current_contract_address(), &amount);
        if matches!(result, Ok(Ok(_))) {
            Ok(())
        } else {
            Err(AuctionError::SettlementFailure)
        }
    }

    /// Pull the seller's approved asset into the contract's custody
    ///
    /// # Errors
    /// * `AssetNotEscrowed` - `seller` does not hold the token, or the
    ///   registry refused the transfer
    pub fn escrow(e: &Env, asset: &EscrowedAsset, seller: &Address) -> Result<(), AuctionError> {
        let registry = AssetRegistryClient::new(e, &asset.registry);
        let owned = matches!(
            registry.try_owner_of(&asset.token_id),
            Ok(Ok(holder)) if holder == *seller
        );
        if !owned {
            return Err(AuctionError::AssetNotEscrowed);
        }

        let custody = e.current_contract_address();
        let result = registry.try_transfer_from(&custody, seller, &custody, &asset.token_id);
        if matches!(result, Ok(Ok(_))) {
            Ok(())
        } else {
            Err(AuctionError::AssetNotEscrowed)
        }
    }

    /// Pay out every leg of `instruction`
    ///
    /// `held` is the value the contract holds for this auction, including
    /// whatever was collected in the current call.
    ///
    /// # Errors
    /// * `SettlementFailure` - the outflow exceeds `held`, or a leg failed
    /// * `AssetNotEscrowed` - an asset leg on an auction without an asset
    pub fn execute(
        e: &Env,
        config: &AuctionConfig,
        instruction: &SettlementInstruction,
        held: i128,
    ) -> Result<(), AuctionError> {
        if instruction.outflow() > held {
            return Err(AuctionError::SettlementFailure);
        }

        if let Some(payment) = &instruction.payment {
            Self::pay(e, &config.payment_token, &payment.to, payment.amount)?;
        }
        if let Some(refund) = &instruction.refund {
            Self::pay(e, &config.payment_token, &refund.to, refund.amount)?;
        }
        if let Some(recipient) = &instruction.asset_recipient {
            let asset = config.asset.as_ref().ok_or(AuctionError::AssetNotEscrowed)?;
            Self::deliver(e, asset, recipient)?;
        }

        Ok(())
    }

    fn pay(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), AuctionError> {
        if amount <= 0 {
            return Ok(());
        }
        let client = token::TokenClient::new(e, token);
        let result = client.try_transfer(&e.current_contract_address(), to, &amount);
        if matches!(result, Ok(Ok(_))) {
            Ok(())
        } else {
            Err(AuctionError::SettlementFailure)
        }
    }

    // The contract holds the asset from creation on
    fn deliver(e: &Env, asset: &EscrowedAsset, to: &Address) -> Result<(), AuctionError> {
        let registry = AssetRegistryClient::new(e, &asset.registry);
        let result = registry.try_transfer(&e.current_contract_address(), to, &asset.token_id);
        if matches!(result, Ok(Ok(_))) {
            Ok(())
        } else {
            Err(AuctionError::SettlementFailure)
        }
    }
}
