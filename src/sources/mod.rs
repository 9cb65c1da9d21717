//! Input sources and host subscriptions.
//!
//! The reconciler consumes four collaborators (balance, exchange rate, chain
//! sync, wallet lock) plus a [`Clock`]. This module provides in-process
//! implementations of each and [`Subscriptions`], which funnels all four into
//! a single ordered stream of [`InputUpdate`]s for one event loop.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::reconcile::InputUpdate;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod feed;
pub mod lock;
pub mod scenario;

// ============================================================================
// Re-exports
// ============================================================================

pub use clock::{Clock, FixedClock, SystemClock};
pub use feed::{BalanceSource, ChainSyncSource, ExchangeRateSource, Feed};
pub use lock::{ListenerId, LockListener, LockStateSource, WalletLock};
pub use scenario::{Scenario, ScenarioStep, ScenarioUpdate};

// ============================================================================
// WalletSources
// ============================================================================

/// The four input collaborators of one wallet.
#[derive(Debug, Default)]
pub struct WalletSources {
    pub balance: BalanceSource,
    pub exchange_rate: ExchangeRateSource,
    pub chain_sync: ChainSyncSource,
    pub lock: WalletLock,
}

impl WalletSources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to every source. Must be called within a Tokio runtime.
    #[must_use]
    pub fn subscribe(&self) -> Subscriptions {
        Subscriptions::attach(
            self.balance.subscribe(),
            self.exchange_rate.subscribe(),
            self.chain_sync.subscribe(),
            Box::new(self.lock.clone()),
        )
    }
}

// ============================================================================
// Subscriptions
// ============================================================================

/// Live subscriptions to all four sources.
///
/// Each feed is forwarded by its own task into one channel; the lock source
/// is observed through a registered listener. Every source delivers its
/// current value right after attaching. Subscriptions must be released
/// explicitly; dropping them releases too, with a warning.
pub struct Subscriptions {
    rx: mpsc::UnboundedReceiver<InputUpdate>,
    forwarders: Vec<JoinHandle<()>>,
    lock: Box<dyn LockStateSource + Send + Sync>,
    listener: Option<ListenerId>,
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("forwarders", &self.forwarders.len())
            .field("listener", &self.listener)
            .finish()
    }
}

impl Subscriptions {
    /// Attaches to the given receivers and lock source.
    #[must_use]
    pub fn attach(
        balance: watch::Receiver<Option<crate::domain::Coin>>,
        exchange_rate: watch::Receiver<Option<crate::domain::ExchangeRate>>,
        chain_sync: watch::Receiver<Option<crate::domain::ChainSyncSnapshot>>,
        lock: Box<dyn LockStateSource + Send + Sync>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let forwarders = vec![
            forward(balance, tx.clone(), InputUpdate::Balance),
            forward(exchange_rate, tx.clone(), InputUpdate::ExchangeRate),
            forward(chain_sync, tx.clone(), InputUpdate::ChainSync),
        ];

        // Register before reading so no change slips between the two. A change
        // between the read and its send is caught by the second read.
        let listener_tx = tx.clone();
        let listener = lock.add_listener(Box::new(move |locked| {
            let _ = listener_tx.send(InputUpdate::LockChanged(locked));
        }));
        // Receiver is owned by this struct; send fails only after release.
        let initial = lock.is_locked();
        let _ = tx.send(InputUpdate::LockChanged(initial));
        let current = lock.is_locked();
        if current != initial {
            let _ = tx.send(InputUpdate::LockChanged(current));
        }

        debug!("subscriptions attached");
        Self {
            rx,
            forwarders,
            lock,
            listener: Some(listener),
        }
    }

    /// Returns the next pending update without waiting.
    pub fn try_next(&mut self) -> Option<InputUpdate> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next update.
    pub async fn next(&mut self) -> Option<InputUpdate> {
        self.rx.recv().await
    }

    /// Releases every subscription. Queued updates are discarded.
    pub fn release(mut self) {
        self.release_all();
    }

    fn release_all(&mut self) {
        for forwarder in self.forwarders.drain(..) {
            forwarder.abort();
        }
        if let Some(id) = self.listener.take() {
            self.lock.remove_listener(id);
        }
        self.rx.close();
        while self.rx.try_recv().is_ok() {}
        debug!("subscriptions released");
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        if self.listener.is_some() {
            warn!("subscriptions dropped without release");
            self.release_all();
        }
    }
}

/// Forwards every value of a watch receiver, starting with the current one.
fn forward<T, F>(
    mut rx: watch::Receiver<Option<T>>,
    tx: mpsc::UnboundedSender<InputUpdate>,
    wrap: F,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(Option<T>) -> InputUpdate + Send + 'static,
{
    tokio::spawn(async move {
        let current = rx.borrow_and_update().clone();
        if tx.send(wrap(current)).is_err() {
            return;
        }
        while rx.changed().await.is_ok() {
            let value = rx.borrow_and_update().clone();
            if tx.send(wrap(value)).is_err() {
                break;
            }
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
