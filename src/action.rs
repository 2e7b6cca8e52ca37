//! Actions - everything that can happen, with category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Snapshot category =====
    /// Intent: Reload the snapshot (the refresh tap)
    SnapshotRefresh,

    /// Result: Reload finished, replacement snapshot attached
    SnapshotDidLoad(WeatherSnapshot),

    // ===== UI category =====
    /// Scroll the hourly strip one cell left
    #[action(category = "ui")]
    UiHoursLeft,

    /// Scroll the hourly strip one cell right
    #[action(category = "ui")]
    UiHoursRight,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the refresh animation
    Tick,

    /// Exit the application
    Quit,
}
