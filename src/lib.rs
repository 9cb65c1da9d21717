//! walletbar: the wallet balance toolbar.
//!
//! The core is [`reconcile::DisplayStateReconciler`], which folds the latest
//! balance, exchange rate, chain sync snapshot and wallet lock state into one
//! [`domain::DisplayState`]. Everything else hosts it: [`sources`] provides
//! in-process feeds, [`state`] binds them to a TUI, [`ui`] renders it.

pub mod commands;
pub mod constants;
pub mod domain;
pub mod messages;
pub mod reconcile;
pub mod sources;
pub mod state;
pub mod theme;
pub mod tui;
pub mod ui;

#[cfg(test)]
mod test_utils;
