pub mod city_header;
pub mod current_card;
pub mod daily_list;
pub mod detail_tiles;
pub mod hourly_strip;
pub mod snapshot_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_header::{CityHeader, CityHeaderProps};
pub use current_card::{CurrentCard, CurrentCardProps};
pub use daily_list::{DailyList, DailyListProps};
pub use detail_tiles::{DetailTiles, DetailTilesProps};
pub use hourly_strip::{HourlyStrip, HourlyStripProps};
pub use snapshot_display::{SnapshotDisplay, SnapshotDisplayProps};
