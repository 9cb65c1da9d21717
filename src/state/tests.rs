//! Tests for the state module.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Duration as ChronoDuration;

use super::{App, AppConfig};
use crate::commands::AppCommand;
use crate::domain::{Coin, DisplayState, LagUnit, LocalAmount, SyncActivity};
use crate::reconcile::{InputUpdate, LockPrecedence};
use crate::sources::{FixedClock, WalletSources};
use crate::test_utils::{RateMother, SnapshotMother, fixed_now};
use crate::ui::components::ToastKind;

// ========================================================================
// Test Helper Functions
// ========================================================================

fn create_test_app(config: AppConfig) -> (App<FixedClock>, FixedClock) {
    let clock = FixedClock::new(fixed_now());
    let app = App::with_clock(config, Arc::new(WalletSources::new()), clock.clone());
    (app, clock)
}

/// Waits until the forwarders have delivered something, then drains.
async fn settle(app: &mut App<FixedClock>) -> usize {
    let mut applied = 0;
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        applied += app.process_updates();
    }
    applied
}

// ========================================================================
// Construction
// ========================================================================

#[test]
fn test_new_app_is_paused_and_unknown() {
    let (app, _) = create_test_app(AppConfig::default());
    assert!(app.is_paused());
    assert_eq!(app.display, DisplayState::BalanceUnknown);
    assert!(!app.exit);
}

// ========================================================================
// Lifecycle
// ========================================================================

#[tokio::test]
async fn test_resume_delivers_current_values() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.sources().balance.publish(Some(Coin::from_coins(2)));
    app.sources().exchange_rate.publish(Some(RateMother::eur(50)));

    app.resume();
    assert!(!app.is_paused());
    assert_eq!(settle(&mut app).await, 4);

    assert_eq!(
        app.display,
        DisplayState::Balance {
            amount_shown: Coin::from_coins(2),
            too_much_warning: false,
            local_amount: LocalAmount::Shown {
                value: crate::domain::Fiat::from_major(100),
                currency_code: "EUR".to_string(),
            },
        }
    );
    app.pause();
}

#[tokio::test]
async fn test_pause_stops_updates_until_resume() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.resume();
    settle(&mut app).await;

    app.pause();
    assert!(app.is_paused());
    assert_eq!(app.sources().lock.listener_count(), 0);

    app.sources().balance.publish(Some(Coin::from_coins(9)));
    assert_eq!(settle(&mut app).await, 0);
    assert_eq!(app.display, DisplayState::BalanceUnknown);

    app.resume();
    settle(&mut app).await;
    assert!(matches!(
        app.display,
        DisplayState::Balance { amount_shown, .. } if amount_shown == Coin::from_coins(9)
    ));
    app.pause();
}

#[tokio::test]
async fn test_resume_twice_keeps_one_subscription() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.resume();
    app.resume();
    assert_eq!(app.sources().lock.listener_count(), 1);
    app.pause();
    app.pause();
    assert_eq!(app.sources().lock.listener_count(), 0);
}

#[tokio::test]
async fn test_lock_toggle_flows_through_subscription() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.sources().balance.publish(Some(Coin::from_coins(1)));
    app.resume();
    settle(&mut app).await;

    app.execute_command(AppCommand::ToggleLock);
    settle(&mut app).await;
    assert!(app.is_wallet_locked());
    assert_eq!(app.display, DisplayState::Hidden);

    app.execute_command(AppCommand::ToggleLock);
    settle(&mut app).await;
    assert!(matches!(app.display, DisplayState::Balance { .. }));
    app.pause();
}

#[tokio::test]
async fn test_toggle_pause_command() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.resume();

    app.execute_command(AppCommand::TogglePause);
    assert!(app.is_paused());
    assert_eq!(app.ui.toast_message(), Some("Paused"));

    app.execute_command(AppCommand::TogglePause);
    assert!(!app.is_paused());
    assert_eq!(app.ui.toast_message(), Some("Resumed"));
    app.pause();
}

// ========================================================================
// Recomputation
// ========================================================================

#[test]
fn test_recompute_picks_up_passing_time() {
    let (mut app, clock) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(1))));
    app.apply(InputUpdate::ChainSync(Some(SnapshotMother::idle_behind(
        ChronoDuration::minutes(30),
    ))));
    assert!(matches!(app.display, DisplayState::Balance { .. }));

    // Now replaying, and the best block ages past the threshold.
    app.apply(InputUpdate::ChainSync(Some(
        crate::domain::ChainSyncSnapshot::new(
            Some(fixed_now() - ChronoDuration::minutes(30)),
            true,
        ),
    )));
    assert!(matches!(app.display, DisplayState::Balance { .. }));

    clock.advance(ChronoDuration::hours(2));
    app.execute_command(AppCommand::Recompute);
    match &app.display {
        DisplayState::Progress { message } => {
            assert_eq!(message.activity, SyncActivity::Downloading);
            assert_eq!(message.unit, LagUnit::Hours);
            assert_eq!(message.magnitude, 2);
        }
        other => panic!("expected progress, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_if_due() {
    let config = AppConfig {
        refresh_interval_secs: 60,
        ..AppConfig::default()
    };
    let (mut app, _) = create_test_app(config);
    let start = Instant::now();

    // Paused hosts never refresh.
    assert!(!app.refresh_if_due(start + Duration::from_secs(120)));

    app.resume();
    let resumed_at = Instant::now();
    assert!(!app.refresh_if_due(resumed_at + Duration::from_secs(10)));
    assert!(app.refresh_if_due(resumed_at + Duration::from_secs(61)));
    app.pause();
}

#[tokio::test]
async fn test_refresh_disabled_with_zero_interval() {
    let config = AppConfig {
        refresh_interval_secs: 0,
        ..AppConfig::default()
    };
    let (mut app, _) = create_test_app(config);
    app.resume();
    assert!(!app.refresh_if_due(Instant::now() + Duration::from_secs(3_600)));
    app.pause();
}

// ========================================================================
// Gestures
// ========================================================================

#[test]
fn test_balance_click_raises_notice_above_threshold() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(31))));

    app.execute_command(AppCommand::BalanceClick);
    let toast = app.ui.toast.as_ref().expect("notice toast");
    assert_eq!(toast.kind, ToastKind::Warning);
    assert!(toast.message.starts_with("You have a large balance"));
}

#[test]
fn test_balance_click_silent_at_or_below_threshold() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(30))));
    app.execute_command(AppCommand::BalanceClick);
    assert_eq!(app.ui.toast, None);
}

#[test]
fn test_balance_click_ignored_while_hidden() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(100))));
    app.apply(InputUpdate::LockChanged(true));
    assert_eq!(app.display, DisplayState::Hidden);

    app.execute_command(AppCommand::BalanceClick);
    assert_eq!(app.ui.toast, None);
}

#[test]
fn test_progress_click_toasts_message() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::ChainSync(Some(SnapshotMother::replaying_behind(
        ChronoDuration::hours(36),
    ))));

    app.execute_command(AppCommand::ToolbarClick);
    let toast = app.ui.toast.as_ref().expect("progress toast");
    assert_eq!(toast.kind, ToastKind::Progress);
    assert_eq!(toast.message, "Downloading, 36 hours behind");
}

#[test]
fn test_progress_click_without_progress_does_nothing() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.execute_command(AppCommand::ProgressClick);
    assert_eq!(app.ui.toast, None);
}

#[test]
fn test_toolbar_click_on_balance_row() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(45))));
    app.execute_command(AppCommand::ToolbarClick);
    assert_eq!(
        app.ui.toast.as_ref().map(|t| t.kind),
        Some(ToastKind::Warning)
    );
}

// ========================================================================
// Configuration
// ========================================================================

#[test]
fn test_lock_first_config_hides_progress() {
    let config = AppConfig {
        lock_precedence: LockPrecedence::LockFirst,
        ..AppConfig::default()
    };
    let (mut app, _) = create_test_app(config);
    app.apply(InputUpdate::ChainSync(Some(SnapshotMother::replaying_behind(
        ChronoDuration::days(3),
    ))));
    assert!(matches!(app.display, DisplayState::Progress { .. }));

    app.apply(InputUpdate::LockChanged(true));
    assert_eq!(app.display, DisplayState::Hidden);
}

#[test]
fn test_no_local_balance_config() {
    let config = AppConfig {
        show_local_balance: false,
        ..AppConfig::default()
    };
    let (mut app, _) = create_test_app(config);
    app.apply(InputUpdate::Balance(Some(Coin::from_coins(1))));
    app.apply(InputUpdate::ExchangeRate(Some(RateMother::usd(10))));
    assert!(matches!(
        app.display,
        DisplayState::Balance {
            local_amount: LocalAmount::NotRequested,
            ..
        }
    ));
}

#[test]
fn test_quit_and_dismiss() {
    let (mut app, _) = create_test_app(AppConfig::default());
    app.ui.show_toast("hello", ToastKind::Info, 10);
    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.ui.toast, None);

    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}
