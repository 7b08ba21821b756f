//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env with a fixed ledger
//! - Deploys both auction contracts, the asset registry and a payment token
//! - Creates test accounts (seller/bidders/attacker)
//! - Seeds token balances and mints assets
//! - Provides typed contract clients
//! - Supports deterministic ledger advancement

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use dutch_auction::{DutchAuctionContract, DutchAuctionContractClient};
use mock_nft::{MockNftContract, MockNftContractClient};
use nft_dutch_auction::{NftDutchAuctionContract, NftDutchAuctionContractClient};

/// Ledger the harness starts at
pub const START_LEDGER: u32 = 1_000;

/// Default bidder initial balance
pub const DEFAULT_USER_BALANCE: i128 = 10_000_000_000; // 1000 tokens with 7 decimals

/// Default auction parameters: opening price 2_000 falling by 100 per ledger
pub const RESERVE_PRICE: i128 = 1_000;
pub const LEDGERS_OPEN: u32 = 10;
pub const PRICE_DECREMENT: i128 = 100;

/// Test accounts container
pub struct TestAccounts {
    pub admin: Address,
    pub seller: Address,
    pub bidder1: Address,
    pub bidder2: Address,
    pub attacker: Address,
}

impl TestAccounts {
    /// Create new test accounts
    pub fn new(e: &Env) -> Self {
        Self {
            admin: Address::generate(e),
            seller: Address::generate(e),
            bidder1: Address::generate(e),
            bidder2: Address::generate(e),
            attacker: Address::generate(e),
        }
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub dutch_auction: Address,
    pub nft_auction: Address,
    pub registry: Address,
    pub token: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a new test harness with all contracts deployed and initialized
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        env.ledger().set(LedgerInfo {
            timestamp: 1704067200, // Jan 1, 2024 00:00:00 UTC
            protocol_version: 22,
            sequence_number: START_LEDGER,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 1000,
            min_persistent_entry_ttl: 1000,
            max_entry_ttl: 100_000,
        });

        let accounts = TestAccounts::new(&env);

        // Payment token (Stellar Asset Contract)
        let token_admin = Address::generate(&env);
        let token = env.register_stellar_asset_contract_v2(token_admin);
        let token_address = token.address();

        let registry = env.register(MockNftContract, ());
        MockNftContractClient::new(&env, &registry).initialize(&accounts.admin);

        let dutch_auction = env.register(DutchAuctionContract, (token_address.clone(),));
        let nft_auction = env.register(NftDutchAuctionContract, (token_address.clone(),));

        let minter = StellarAssetClient::new(&env, &token_address);
        minter.mint(&accounts.bidder1, &DEFAULT_USER_BALANCE);
        minter.mint(&accounts.bidder2, &DEFAULT_USER_BALANCE);
        minter.mint(&accounts.attacker, &DEFAULT_USER_BALANCE);

        let contracts = DeployedContracts {
            dutch_auction,
            nft_auction,
            registry,
            token: token_address,
        };

        Self {
            env,
            accounts,
            contracts,
        }
    }

    // ========================================================================
    // Ledger Management Helpers
    // ========================================================================

    /// Advance the ledger sequence by `ledgers`
    pub fn advance_ledgers(&self, ledgers: u32) {
        let mut ledger = self.env.ledger().get();
        ledger.sequence_number += ledgers;
        ledger.timestamp += 5 * ledgers as u64;
        self.env.ledger().set(ledger);
    }

    pub fn current_ledger(&self) -> u32 {
        self.env.ledger().sequence()
    }

    // ========================================================================
    // Clients
    // ========================================================================

    pub fn dutch_auction(&self) -> DutchAuctionContractClient {
        DutchAuctionContractClient::new(&self.env, &self.contracts.dutch_auction)
    }

    pub fn nft_auction(&self) -> NftDutchAuctionContractClient {
        NftDutchAuctionContractClient::new(&self.env, &self.contracts.nft_auction)
    }

    pub fn registry(&self) -> MockNftContractClient {
        MockNftContractClient::new(&self.env, &self.contracts.registry)
    }

    /// Get token client
    pub fn token_client(&self) -> TokenClient {
        TokenClient::new(&self.env, &self.contracts.token)
    }

    /// Check user balance
    pub fn balance(&self, user: &Address) -> i128 {
        self.token_client().balance(user)
    }

    // ========================================================================
    // Auction Helpers
    // ========================================================================

    /// Open a direct auction for the seller with the default parameters
    pub fn open_direct_auction(&self) -> u64 {
        self.dutch_auction().create_auction(
            &self.accounts.seller,
            &RESERVE_PRICE,
            &LEDGERS_OPEN,
            &PRICE_DECREMENT,
        )
    }

    /// Mint an asset to the seller, approve the auction and open a custodial
    /// auction for it. Returns `(auction_id, asset_id)`.
    pub fn open_asset_auction(&self, immediate_settlement: bool) -> (u64, u32) {
        self.open_asset_auction_with(immediate_settlement, None)
    }

    /// As `open_asset_auction`, naming `custodian` as the seller's agent
    pub fn open_asset_auction_with(
        &self,
        immediate_settlement: bool,
        custodian: Option<Address>,
    ) -> (u64, u32) {
        let registry = self.registry();
        let asset_id = registry.mint(&self.accounts.seller);
        registry.approve(
            &self.accounts.seller,
            &Some(self.contracts.nft_auction.clone()),
            &asset_id,
        );

        let id = self.nft_auction().create_auction(
            &self.accounts.seller,
            &self.contracts.registry,
            &asset_id,
            &RESERVE_PRICE,
            &LEDGERS_OPEN,
            &PRICE_DECREMENT,
            &immediate_settlement,
            &custodian,
        );
        (id, asset_id)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert that a `try_` client call failed with the expected contract error
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $expected:pat) => {
        match $result {
            Err($expected) => (),
            Err(e) => panic!("Expected error {:?}, got {:?}", stringify!($expected), e),
            Ok(_) => panic!("Expected error {:?}, got Ok", stringify!($expected)),
        }
    };
}

#[cfg(test)]
mod harness_tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();

        assert_ne!(harness.accounts.seller, harness.accounts.bidder1);
        assert_ne!(harness.accounts.bidder1, harness.accounts.bidder2);
        assert_ne!(harness.contracts.dutch_auction, harness.contracts.nft_auction);

        assert_eq!(harness.dutch_auction().payment_token(), harness.contracts.token);
        assert_eq!(harness.nft_auction().payment_token(), harness.contracts.token);
    }

    #[test]
    fn test_ledger_advancement() {
        let harness = TestHarness::new();
        assert_eq!(harness.current_ledger(), START_LEDGER);

        harness.advance_ledgers(3);
        assert_eq!(harness.current_ledger(), START_LEDGER + 3);
    }

    #[test]
    fn test_token_balances() {
        let harness = TestHarness::new();

        assert_eq!(harness.balance(&harness.accounts.bidder1), DEFAULT_USER_BALANCE);
        assert_eq!(harness.balance(&harness.accounts.seller), 0);
    }
}
