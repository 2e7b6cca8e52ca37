use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::sprites::{self, SpriteSize};
use crate::state::{IconKind, WeatherSnapshot};

/// Current conditions: icon art, FIGlet temperature, condition label and
/// feels-like line.
pub struct CurrentCard;

pub struct CurrentCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

/// Fixed rows below the art: blank + condition + feels-like.
const CARD_FIXED: u16 = 3;

/// FIGlet height caps to try for the temperature: terminus(6), miniwi(4),
/// plain(1).
const TEMP_TIERS: [u16; 3] = [6, 4, 1];

struct CardSizing {
    sprite: Option<SpriteSize>,
    sprite_h: u16,
    temp_cap: u16,
}

/// Fit the largest sprite by progressively shrinking the temperature text.
/// Only falls to the emoji glyph when no sprite fits even with plain text.
fn compute_sizing(area_height: u16) -> CardSizing {
    for &cap in &TEMP_TIERS {
        let budget = area_height.saturating_sub(cap + CARD_FIXED);
        if let Some(size) = SpriteSize::for_height(budget) {
            return CardSizing {
                sprite: Some(size),
                sprite_h: size.lines(),
                temp_cap: cap,
            };
        }
    }
    CardSizing {
        sprite: None,
        sprite_h: 1,
        temp_cap: TEMP_TIERS[0],
    }
}

fn temperature_fill(temp: i16) -> Fill {
    let (start, end) = match temp {
        t if t < 0 => (
            ArtColor::rgb(150, 200, 255),
            ArtColor::rgb(200, 230, 255),
        ),
        t if t < 15 => (
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ),
        t if t < 25 => (
            ArtColor::rgb(100, 200, 150),
            ArtColor::rgb(255, 220, 100),
        ),
        t if t < 35 => (
            ArtColor::rgb(255, 180, 80),
            ArtColor::rgb(255, 120, 80),
        ),
        _ => (
            ArtColor::rgb(255, 100, 80),
            ArtColor::rgb(255, 60, 60),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

/// The screen has no separate "current icon" field; the "now" cell of the
/// hourly forecast is the current condition.
fn current_icon(snapshot: &WeatherSnapshot) -> IconKind {
    snapshot
        .hourly
        .first()
        .map(|h| h.icon)
        .unwrap_or(IconKind::PartlyCloudy)
}

impl Component<Action> for CurrentCard {
    type Props<'a> = CurrentCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        let sizing = compute_sizing(area.height);
        let snapshot = props.snapshot;

        let chunks = Layout::vertical([
            Constraint::Length(sizing.sprite_h),
            Constraint::Length(1),
            Constraint::Max(sizing.temp_cap),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

        let icon = current_icon(snapshot);
        match sizing.sprite {
            Some(size) => {
                frame.render_widget(
                    Paragraph::new(sprites::sprite(icon, size)).alignment(Alignment::Center),
                    chunks[0],
                );
            }
            None => {
                let emoji = Line::from(sprites::glyph(icon)).centered();
                frame.render_widget(Paragraph::new(emoji), chunks[0]);
            }
        }

        let temp_text = format!("{}°", snapshot.temperature);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(snapshot.temperature));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[2]);

        let condition = Line::from(vec![Span::styled(
            snapshot.condition.clone(),
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(condition), chunks[3]);

        let feels_like = Line::from(vec![Span::styled(
            format!("Cảm giác như {}°", snapshot.feels_like),
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(feels_like), chunks[4]);
    }
}
