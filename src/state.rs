//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::provider;

/// Icon tag attached to forecast entries. Closed set: every consumer
/// matches exhaustively, so a new variant fails to compile until it is
/// mapped everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IconKind {
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    PartlyCloudy,
    Night,
}

/// One hourly forecast cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourlyEntry {
    pub time: String,
    pub temp: i16,
    pub icon: IconKind,
}

/// One row of the seven-day forecast
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyEntry {
    pub day: String,
    pub high: i16,
    pub low: i16,
    pub icon: IconKind,
    pub rain_chance: u8,
}

/// One complete weather reading plus its forecasts. Replaced wholesale on
/// refresh; never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature: i16,
    pub feels_like: i16,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u16,
    pub uv_index: u8,
    pub visibility: u16,
    pub pressure: u16,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

/// Animation timing for the header gradient pulse.
pub const REFRESH_ANIM_TICK_MS: u64 = 40;
pub const REFRESH_ANIM_CYCLE_TICKS: u32 = 30;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Current snapshot (always present; seeded from the provider)
    #[debug(section = "Snapshot", label = "Data", debug_fmt)]
    pub snapshot: WeatherSnapshot,

    /// Whether a simulated reload is in flight (data stays visible)
    #[debug(section = "Snapshot", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Simulated fetch latency in milliseconds
    #[debug(section = "Snapshot", label = "Delay ms")]
    pub refresh_delay_ms: u64,

    /// First visible cell of the hourly strip
    #[debug(section = "View", label = "Hour offset")]
    pub hourly_offset: usize,

    // --- Animation internals (skipped) ---
    /// Animation frame counter for the header pulse
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to land the pulse after a reload completes
    #[debug(skip)]
    pub refresh_anim_ticks_remaining: u32,
}

impl AppState {
    /// Create state seeded from the provider, with the given reload delay
    pub fn new(refresh_delay_ms: u64) -> Self {
        Self {
            snapshot: provider::sample_snapshot(),
            is_refreshing: false,
            refresh_delay_ms,
            hourly_offset: 0,
            tick_count: 0,
            refresh_anim_ticks_remaining: 0,
        }
    }

    pub fn refresh_anim_active(&self) -> bool {
        self.is_refreshing || self.refresh_anim_ticks_remaining > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(provider::REFRESH_DELAY_MS)
    }
}
