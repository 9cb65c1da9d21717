//! Display state reconciliation.
//!
//! - [`classifier`] - whether chain sync should be surfaced, and how far behind it is
//! - [`policy`] - the final display mode from balance, rate, lock and the sync verdict
//! - [`reconciler`] - the per-channel input holder that recomputes on every update
//!
//! ```text
//!  balance ──┐
//!  rate ─────┤
//!  chain ────┼──▶ Inputs ──▶ classify(chain, now) ──▶ present ──▶ DisplayState
//!  lock ─────┘
//! ```

pub mod classifier;
pub mod policy;
pub mod reconciler;

pub use classifier::{SyncProgressClassifier, SyncVerdict};
pub use policy::{BalancePresentationPolicy, LockPrecedence, PolicyConfig};
pub use reconciler::{
    DisplayStateReconciler, InputUpdate, Inputs, TooMuchBalanceNotice, reconcile,
};
