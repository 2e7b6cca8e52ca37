use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::REFRESH_ANIM_CYCLE_TICKS;

pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub city: &'a str,
    pub temperature: i16,
    pub is_refreshing: bool,
    pub is_animating: bool,
    pub tick_count: u32,
}

/// Overhead inside the header area: 1 status line under the city name.
pub const HEADER_OVERHEAD: u16 = 1;

fn gradient_colors(temp: i16) -> (ArtColor, ArtColor) {
    match temp {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        _ => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
    }
}

/// Static horizontal gradient while idle; while a reload is pending the two
/// ends ping-pong toward each other, reading as a slow pulse.
fn header_fill(colors: (ArtColor, ArtColor), animating: bool, tick_count: u32) -> Fill {
    if !animating {
        return Fill::Linear(LinearGradient::horizontal(colors.0, colors.1));
    }
    let cycle = REFRESH_ANIM_CYCLE_TICKS.max(1);
    let phase = (tick_count % cycle) as f32 / cycle as f32;
    let t = if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    };
    let start = colors.0.interpolate(colors.1, t * 0.6);
    let end = colors.1.interpolate(colors.0, t * 0.6);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        let chunks = Layout::vertical([
            Constraint::Fill(1),                    // FIGlet city name
            Constraint::Length(HEADER_OVERHEAD),    // Status line
        ])
        .split(area);

        let fill = header_fill(
            gradient_colors(props.temperature),
            props.is_animating,
            props.tick_count,
        );
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);
        frame.render_widget(ArtBox::new(&renderer, props.city), chunks[0]);

        if props.is_refreshing {
            let status = Line::from(vec![Span::styled(
                "Đang làm mới...",
                Style::default().fg(Color::Cyan),
            )])
            .centered();
            frame.render_widget(Paragraph::new(status), chunks[1]);
        }
    }
}
