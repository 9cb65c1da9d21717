//! Reusable UI components.
//!
//! - [`amount`] - coin and local amount formatting for the toolbar
//! - [`toast`] - toast notification overlay for non-blocking notices
//!
//! Components are stateless: they format or render what they are given.

pub mod amount;
pub mod toast;

pub use amount::{COIN_SYMBOL, CoinAmount, LocalAmountText};
pub use toast::{ToastKind, render_toast};
