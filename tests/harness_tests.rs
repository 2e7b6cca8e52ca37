//! Tests using the EffectStoreTestHarness
//!
//! These tests drive the whole refresh workflow without ever sleeping:
//! the reload delay lives on the effect, so completion is simulated by
//! feeding the result action back through the harness.

use tui_dispatch::testing::*;
use tui_dispatch::NumericComponentId;

use skypanel::{
    action::Action,
    components::{Component, SnapshotDisplay, SnapshotDisplayProps},
    effect::Effect,
    provider,
    reducer::reducer,
    state::AppState,
};

// ============================================================================
// EffectStoreTestHarness Tests
// ============================================================================

#[test]
fn test_refresh_workflow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let before = provider::sample_snapshot();

    // Trigger refresh - should enter Refreshing and emit the reload effect
    harness.dispatch_collect(Action::SnapshotRefresh);
    harness.assert_state(|s| s.is_refreshing);

    // Verify effect was emitted
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::ReloadSnapshot { .. }));

    // Simulate the delayed completion
    harness.complete_action(Action::SnapshotDidLoad(provider::sample_snapshot()));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    // Back to Idle, snapshot reassigned exactly once, value unchanged
    harness.assert_state(|s| !s.is_refreshing);
    harness.assert_state(|s| s.snapshot == before);
    harness.assert_state(|s| s.snapshot.city == "Hà Nội");
    harness.assert_state(|s| s.snapshot.temperature == 28);
    harness.assert_state(|s| {
        let today = &s.snapshot.daily[0];
        today.high == 30 && today.low == 24 && today.rain_chance == 20
    });
}

#[test]
fn test_double_tap_coalesces() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    // Two refresh taps in quick succession
    harness.dispatch_collect(Action::SnapshotRefresh);
    harness.dispatch_collect(Action::SnapshotRefresh);

    // Only the first tap produced a reload effect
    let effects = harness.drain_effects();
    effects.effects_count(1);

    // One completion lands and the workflow is over
    harness.complete_action(Action::SnapshotDidLoad(provider::sample_snapshot()));
    harness.process_emitted();
    harness.assert_state(|s| !s.is_refreshing);

    // Nothing else in flight: a new refresh starts a fresh cycle
    harness.dispatch_collect(Action::SnapshotRefresh);
    harness.assert_state(|s| s.is_refreshing);
    let effects = harness.drain_effects();
    effects.effects_count(1);
}

#[test]
fn test_hour_scroll_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.assert_state(|s| s.hourly_offset == 0);

    harness.dispatch_collect(Action::UiHoursRight);
    harness.dispatch_collect(Action::UiHoursRight);
    harness.assert_state(|s| s.hourly_offset == 2);

    harness.dispatch_collect(Action::UiHoursLeft);
    harness.assert_state(|s| s.hourly_offset == 1);
}

#[test]
fn test_dispatch_all() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    // Dispatch multiple actions at once
    let results = harness.dispatch_all([
        Action::UiHoursRight,
        Action::UiHoursRight,
        Action::UiHoursLeft,
    ]);

    // All should have changed state
    assert_eq!(results, vec![true, true, true]);

    harness.assert_state(|s| s.hourly_offset == 1);
}

// ============================================================================
// Component + Store Integration Tests
// ============================================================================

#[test]
fn test_keyboard_triggers_refresh() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = SnapshotDisplay;

    // Send 'r' key through component, get actions
    let actions = harness.send_keys::<NumericComponentId, _, _>("r", |state, event| {
        let props = SnapshotDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    // Verify action was returned
    actions.assert_count(1);
    actions.assert_first(Action::SnapshotRefresh);

    // Now dispatch the action manually and verify state + effects
    harness.dispatch_collect(Action::SnapshotRefresh);
    harness.assert_state(|s| s.is_refreshing);

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::ReloadSnapshot { .. }));
}

// ============================================================================
// Effect Assertions Tests
// ============================================================================

#[test]
fn test_effect_assertions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    // Initially no effects
    let effects = harness.drain_effects();
    effects.effects_empty();

    // After refresh, exactly one effect carrying the configured delay
    harness.dispatch_collect(Action::SnapshotRefresh);
    let effects = harness.drain_effects();
    effects.effects_not_empty();
    effects.effects_count(1);
    effects.effects_all_match(
        |e| matches!(e, Effect::ReloadSnapshot { delay_ms } if *delay_ms == provider::REFRESH_DELAY_MS),
    );

    // Scrolling never produces effects
    harness.dispatch_collect(Action::UiHoursRight);
    let effects = harness.drain_effects();
    effects.effects_empty();
}

// ============================================================================
// Async Simulation Tests
// ============================================================================

#[test]
fn test_multiple_async_completions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SnapshotRefresh);

    // Queue up async completion plus a user scroll that raced with it
    harness.complete_action(Action::SnapshotDidLoad(provider::sample_snapshot()));
    harness.complete_action(Action::UiHoursRight);

    // Process all at once
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 2);
    assert_eq!(changed, 2);

    // State should reflect both actions
    harness.assert_state(|s| !s.is_refreshing);
    harness.assert_state(|s| s.hourly_offset == 1);
}
