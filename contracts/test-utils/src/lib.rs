//! # Test Utilities Library
//!
//! Shared constants, the deployment fixture and assertion helpers for
//! testing the lock-with-reward contract.
//!
//! ## Modules
//!
//! - [`constants`] - Time and amount units shared by every test
//! - [`factories`] - Token and contract deployment helpers
//! - [`setup`] - The [`TestSetup`] fixture with its signer roles
//! - [`assertions`] - Revert and position assertions
//! - [`time`] - Ledger time travel
//! - [`balances`] - Balance snapshots and change checks

pub mod assertions;
pub mod balances;
pub mod constants;
pub mod factories;
pub mod setup;
pub mod time;

pub use assertions::*;
pub use balances::*;
pub use constants::*;
pub use factories::*;
pub use setup::*;
pub use time::*;
