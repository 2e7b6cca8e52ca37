//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, REFRESH_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Snapshot actions =====
        Action::SnapshotRefresh => {
            // A reload is already in flight: coalesce, no second timer
            if state.is_refreshing {
                return DispatchResult::unchanged();
            }
            state.is_refreshing = true;
            state.tick_count = 0;
            state.refresh_anim_ticks_remaining = 0;
            DispatchResult::changed_with(Effect::ReloadSnapshot {
                delay_ms: state.refresh_delay_ms,
            })
        }

        Action::SnapshotDidLoad(snapshot) => {
            state.snapshot = snapshot;
            state.is_refreshing = false;
            state.refresh_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiHoursLeft => {
            if state.hourly_offset > 0 {
                state.hourly_offset -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::UiHoursRight => {
            let last = state.snapshot.hourly.len().saturating_sub(1);
            if state.hourly_offset < last {
                state.hourly_offset += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Tick => {
            if state.refresh_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.refresh_anim_ticks_remaining > 0 {
                    state.refresh_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = REFRESH_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 {
        0
    } else {
        cycle - remainder
    }
}
