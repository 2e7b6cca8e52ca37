//! Snapshot provider - the app's only data source
//!
//! There is no backend: `sample_snapshot` is a pure constant generator and
//! `load_snapshot` just simulates the latency a real one would have.

use std::time::Duration;

use thiserror::Error;

use crate::state::{DailyEntry, HourlyEntry, IconKind, WeatherSnapshot};

/// Simulated fetch latency.
pub const REFRESH_DELAY_MS: u64 = 1500;

/// Reserved for a real data source. Uninhabited: callers discharge it with
/// `match err {}`.
#[derive(Debug, Error)]
pub enum ProviderError {}

/// Build the sample snapshot. Deterministic and side-effect free; every
/// call returns a structurally identical value.
pub fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        city: "Hà Nội".into(),
        temperature: 28,
        feels_like: 30,
        condition: "Có mây".into(),
        humidity: 65,
        wind_speed: 12,
        uv_index: 6,
        visibility: 10,
        pressure: 1013,
        hourly: vec![
            hour("Bây giờ", 28, IconKind::PartlyCloudy),
            hour("14:00", 29, IconKind::PartlyCloudy),
            hour("15:00", 30, IconKind::Clear),
            hour("16:00", 29, IconKind::Clear),
            hour("17:00", 28, IconKind::PartlyCloudy),
            hour("18:00", 26, IconKind::Cloudy),
            hour("19:00", 25, IconKind::Cloudy),
            hour("20:00", 24, IconKind::Night),
        ],
        daily: vec![
            day("Hôm nay", 30, 24, IconKind::PartlyCloudy, 20),
            day("Thứ Năm", 29, 23, IconKind::Rainy, 60),
            day("Thứ Sáu", 28, 22, IconKind::Rainy, 70),
            day("Thứ Bảy", 27, 21, IconKind::Cloudy, 40),
            day("Chủ Nhật", 29, 23, IconKind::PartlyCloudy, 30),
            day("Thứ Hai", 31, 24, IconKind::Clear, 10),
            day("Thứ Ba", 32, 25, IconKind::Clear, 5),
        ],
    }
}

/// Simulated reload: wait out the fixed latency, then hand back the sample
/// data. Cannot fail.
pub async fn load_snapshot(delay: Duration) -> Result<WeatherSnapshot, ProviderError> {
    tokio::time::sleep(delay).await;
    Ok(sample_snapshot())
}

fn hour(time: &str, temp: i16, icon: IconKind) -> HourlyEntry {
    HourlyEntry {
        time: time.into(),
        temp,
        icon,
    }
}

fn day(label: &str, high: i16, low: i16, icon: IconKind, rain_chance: u8) -> DailyEntry {
    DailyEntry {
        day: label.into(),
        high,
        low,
        icon,
        rain_chance,
    }
}
