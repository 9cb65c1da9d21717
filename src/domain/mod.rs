//! Domain types for the wallet balance toolbar.
//!
//! # Module Organization
//!
//! - [`coin`] - Exact coin amounts
//! - [`fiat`] - Fiat values and exchange rates
//! - [`chain`] - Chain sync snapshots and impediments
//! - [`progress`] - Structured sync progress messages
//! - [`display`] - The derived [`DisplayState`]
//! - [`error`] - Errors for parsing inputs

// ============================================================================
// Module Declarations
// ============================================================================

pub mod chain;
pub mod coin;
pub mod display;
pub mod error;
pub mod fiat;
pub mod progress;

// ============================================================================
// Re-exports
// ============================================================================

pub use chain::{ChainSyncSnapshot, Impediment};
pub use coin::Coin;
pub use display::{DisplayState, LocalAmount};
pub use error::WalletBarError;
pub use fiat::{ExchangeRate, Fiat};
pub use progress::{LagUnit, ProgressMessage, SyncActivity};
