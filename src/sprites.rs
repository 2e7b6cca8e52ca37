//! Icon art for the six forecast icon kinds
//!
//! Sprites are loaded from text files at compile time using `include_str!`
//! and composited from colored layers, with spaces treated as transparent.
//! Every mapping here matches exhaustively on `IconKind`: a new variant
//! does not compile until it gets a glyph and art in all three sizes.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::state::IconKind;

// ============================================================================
// Sprite data - embedded at compile time
// File naming: {size}_{color}.txt (e.g. small_yellow.txt, medium_gray.txt)
// ============================================================================

mod sprite_data {
    pub mod sun {
        pub const SMALL_YELLOW: &str = include_str!("../sprites/sun/small_yellow.txt");
        pub const MEDIUM_YELLOW: &str = include_str!("../sprites/sun/medium_yellow.txt");
        pub const LARGE_YELLOW: &str = include_str!("../sprites/sun/large_yellow.txt");
    }
    pub mod moon {
        pub const SMALL_PALE: &str = include_str!("../sprites/moon/small_pale.txt");
        pub const MEDIUM_PALE: &str = include_str!("../sprites/moon/medium_pale.txt");
        pub const LARGE_PALE: &str = include_str!("../sprites/moon/large_pale.txt");
    }
    pub mod partly_cloudy {
        // Sun layer (background)
        pub const SMALL_YELLOW: &str = include_str!("../sprites/partly_cloudy/small_yellow.txt");
        pub const MEDIUM_YELLOW: &str = include_str!("../sprites/partly_cloudy/medium_yellow.txt");
        pub const LARGE_YELLOW: &str = include_str!("../sprites/partly_cloudy/large_yellow.txt");
        // Cloud layer (foreground)
        pub const SMALL_GRAY: &str = include_str!("../sprites/partly_cloudy/small_gray.txt");
        pub const MEDIUM_GRAY: &str = include_str!("../sprites/partly_cloudy/medium_gray.txt");
        pub const LARGE_GRAY: &str = include_str!("../sprites/partly_cloudy/large_gray.txt");
    }
    pub mod cloudy {
        // Back cloud (darker)
        pub const SMALL_DARKGRAY: &str = include_str!("../sprites/cloudy/small_darkgray.txt");
        pub const MEDIUM_DARKGRAY: &str = include_str!("../sprites/cloudy/medium_darkgray.txt");
        pub const LARGE_DARKGRAY: &str = include_str!("../sprites/cloudy/large_darkgray.txt");
        // Front cloud (lighter)
        pub const SMALL_LIGHTGRAY: &str = include_str!("../sprites/cloudy/small_lightgray.txt");
        pub const MEDIUM_LIGHTGRAY: &str = include_str!("../sprites/cloudy/medium_lightgray.txt");
        pub const LARGE_LIGHTGRAY: &str = include_str!("../sprites/cloudy/large_lightgray.txt");
    }
    pub mod rain {
        // Cloud layer (background)
        pub const SMALL_GRAY: &str = include_str!("../sprites/rain/small_gray.txt");
        pub const MEDIUM_GRAY: &str = include_str!("../sprites/rain/medium_gray.txt");
        pub const LARGE_GRAY: &str = include_str!("../sprites/rain/large_gray.txt");
        // Rain layer (foreground)
        pub const SMALL_BLUE: &str = include_str!("../sprites/rain/small_blue.txt");
        pub const MEDIUM_BLUE: &str = include_str!("../sprites/rain/medium_blue.txt");
        pub const LARGE_BLUE: &str = include_str!("../sprites/rain/large_blue.txt");
    }
    pub mod storm {
        // Cloud layer (background)
        pub const SMALL_GRAY: &str = include_str!("../sprites/storm/small_gray.txt");
        pub const MEDIUM_GRAY: &str = include_str!("../sprites/storm/medium_gray.txt");
        pub const LARGE_GRAY: &str = include_str!("../sprites/storm/large_gray.txt");
        // Lightning layer (foreground)
        pub const SMALL_YELLOW: &str = include_str!("../sprites/storm/small_yellow.txt");
        pub const MEDIUM_YELLOW: &str = include_str!("../sprites/storm/medium_yellow.txt");
        pub const LARGE_YELLOW: &str = include_str!("../sprites/storm/large_yellow.txt");
    }
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text, last layer on top, spaces transparent
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let grids: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|layer| layer.content.lines().map(|l| l.chars().collect()).collect())
        .collect();

    let rows = grids.iter().map(Vec::len).max().unwrap_or(0);
    let cols = grids
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(cols);
        for col in 0..cols {
            let mut cell = (' ', Color::Reset);
            for (grid, layer) in grids.iter().zip(layers).rev() {
                let ch = grid.get(row).and_then(|l| l.get(col)).copied();
                if let Some(ch) = ch.filter(|&ch| ch != ' ') {
                    cell = (ch, layer.color);
                    break;
                }
            }
            spans.push(Span::styled(
                cell.0.to_string(),
                Style::default().fg(cell.1),
            ));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

// ============================================================================
// Types
// ============================================================================

/// Sprite size categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSize {
    /// 5 lines
    Small,
    /// 8 lines
    Medium,
    /// 11 lines
    Large,
}

impl SpriteSize {
    /// Pick the largest sprite that fits the available height, or `None`
    /// if even Small does not (callers fall back to the emoji glyph).
    pub fn for_height(available: u16) -> Option<Self> {
        match available {
            0..=4 => None,
            5..=7 => Some(SpriteSize::Small),
            8..=10 => Some(SpriteSize::Medium),
            _ => Some(SpriteSize::Large),
        }
    }

    pub fn lines(self) -> u16 {
        match self {
            SpriteSize::Small => 5,
            SpriteSize::Medium => 8,
            SpriteSize::Large => 11,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Single-cell glyph for an icon kind. Total over the enumeration.
pub fn glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Clear => "\u{2600}\u{fe0f}",
        IconKind::Cloudy => "\u{2601}\u{fe0f}",
        IconKind::Rainy => "\u{1f327}\u{fe0f}",
        IconKind::Stormy => "\u{26c8}\u{fe0f}",
        IconKind::PartlyCloudy => "\u{26c5}",
        IconKind::Night => "\u{1f319}",
    }
}

/// Layered art for the given icon kind and size
pub fn sprite(kind: IconKind, size: SpriteSize) -> Text<'static> {
    let layers: Vec<SpriteLayer> = match kind {
        IconKind::Clear => vec![SpriteLayer {
            content: match size {
                SpriteSize::Small => sprite_data::sun::SMALL_YELLOW,
                SpriteSize::Medium => sprite_data::sun::MEDIUM_YELLOW,
                SpriteSize::Large => sprite_data::sun::LARGE_YELLOW,
            },
            color: Color::Yellow,
        }],

        IconKind::Night => vec![SpriteLayer {
            content: match size {
                SpriteSize::Small => sprite_data::moon::SMALL_PALE,
                SpriteSize::Medium => sprite_data::moon::MEDIUM_PALE,
                SpriteSize::Large => sprite_data::moon::LARGE_PALE,
            },
            color: Color::Rgb(210, 220, 250),
        }],

        IconKind::PartlyCloudy => vec![
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::partly_cloudy::SMALL_YELLOW,
                    SpriteSize::Medium => sprite_data::partly_cloudy::MEDIUM_YELLOW,
                    SpriteSize::Large => sprite_data::partly_cloudy::LARGE_YELLOW,
                },
                color: Color::Yellow,
            },
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::partly_cloudy::SMALL_GRAY,
                    SpriteSize::Medium => sprite_data::partly_cloudy::MEDIUM_GRAY,
                    SpriteSize::Large => sprite_data::partly_cloudy::LARGE_GRAY,
                },
                color: Color::Rgb(200, 200, 210),
            },
        ],

        IconKind::Cloudy => vec![
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::cloudy::SMALL_DARKGRAY,
                    SpriteSize::Medium => sprite_data::cloudy::MEDIUM_DARKGRAY,
                    SpriteSize::Large => sprite_data::cloudy::LARGE_DARKGRAY,
                },
                color: Color::Rgb(120, 120, 140),
            },
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::cloudy::SMALL_LIGHTGRAY,
                    SpriteSize::Medium => sprite_data::cloudy::MEDIUM_LIGHTGRAY,
                    SpriteSize::Large => sprite_data::cloudy::LARGE_LIGHTGRAY,
                },
                color: Color::Rgb(170, 170, 185),
            },
        ],

        IconKind::Rainy => vec![
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::rain::SMALL_GRAY,
                    SpriteSize::Medium => sprite_data::rain::MEDIUM_GRAY,
                    SpriteSize::Large => sprite_data::rain::LARGE_GRAY,
                },
                color: Color::Rgb(160, 160, 175),
            },
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::rain::SMALL_BLUE,
                    SpriteSize::Medium => sprite_data::rain::MEDIUM_BLUE,
                    SpriteSize::Large => sprite_data::rain::LARGE_BLUE,
                },
                color: Color::Rgb(80, 140, 200),
            },
        ],

        IconKind::Stormy => vec![
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::storm::SMALL_GRAY,
                    SpriteSize::Medium => sprite_data::storm::MEDIUM_GRAY,
                    SpriteSize::Large => sprite_data::storm::LARGE_GRAY,
                },
                color: Color::Rgb(120, 120, 140),
            },
            SpriteLayer {
                content: match size {
                    SpriteSize::Small => sprite_data::storm::SMALL_YELLOW,
                    SpriteSize::Medium => sprite_data::storm::MEDIUM_YELLOW,
                    SpriteSize::Large => sprite_data::storm::LARGE_YELLOW,
                },
                color: Color::Yellow,
            },
        ],
    };

    composite_layers(&layers)
}

pub const ALL_ICON_KINDS: [IconKind; 6] = [
    IconKind::Clear,
    IconKind::Cloudy,
    IconKind::Rainy,
    IconKind::Stormy,
    IconKind::PartlyCloudy,
    IconKind::Night,
];
