#![no_std]

//! Descending-price auction engine shared by the auction contracts.
//!
//! The pure pieces (`price`, `processor`, `lifecycle`) compute what should
//! happen to one auction; `settlement` moves value and assets; `house`
//! wires them to storage, events and the host.

pub mod error;
pub mod events;
pub mod house;
pub mod lifecycle;
pub mod price;
pub mod processor;
pub mod registry;
pub mod settlement;
pub mod storage;
pub mod types;

pub use error::AuctionError;
pub use events::AuctionEvents;
pub use house::AuctionHouse;
pub use lifecycle::AuctionLifecycle;
pub use price::PriceSchedule;
pub use processor::BidProcessor;
pub use registry::{AssetRegistry, AssetRegistryClient};
pub use settlement::SettlementEngine;
pub use storage::{AuctionStore, DataKey};
pub use types::*;
