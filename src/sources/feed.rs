//! Last-value-wins push sources.
//!
//! A [`Feed`] keeps only its latest value. Late subscribers see that value
//! immediately, the way a loader redelivers its last result on reattach.

use tokio::sync::watch;

use crate::domain::{ChainSyncSnapshot, Coin, ExchangeRate};

/// A push source of optional values backed by a watch channel.
#[derive(Debug)]
pub struct Feed<T> {
    tx: watch::Sender<Option<T>>,
}

/// Emits balance updates; `None` means not known yet.
pub type BalanceSource = Feed<Coin>;

/// Emits exchange rate updates.
pub type ExchangeRateSource = Feed<ExchangeRate>;

/// Emits chain sync snapshots.
pub type ChainSyncSource = Feed<ChainSyncSnapshot>;

impl<T> Feed<T> {
    /// Creates a feed with no value yet.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replaces the current value and wakes subscribers.
    pub fn publish(&self, value: Option<T>) {
        self.tx.send_replace(value);
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<T>> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Feed<T> {
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.tx.borrow().clone()
    }
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}
