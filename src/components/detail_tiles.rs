use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherSnapshot;

/// One row of metric tiles: humidity, wind, UV, visibility, pressure.
pub struct DetailTiles;

pub struct DetailTilesProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

fn tile(glyph: &'static str, label: &'static str, value: String) -> Text<'static> {
    Text::from(vec![
        Line::from(vec![
            Span::raw(glyph),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
        Line::from(Span::styled(value, Style::default().fg(Color::White).bold())).centered(),
    ])
}

impl Component<Action> for DetailTiles {
    type Props<'a> = DetailTilesProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height < 2 || area.width < 25 {
            return;
        }
        let s = props.snapshot;
        let tiles = [
            tile("\u{1f4a7}", "Độ ẩm", format!("{}%", s.humidity)),
            tile("\u{1f4a8}", "Gió", format!("{} km/h", s.wind_speed)),
            tile("\u{2600}\u{fe0f}", "UV", format!("{}", s.uv_index)),
            tile("\u{1f441}\u{fe0f}", "Tầm nhìn", format!("{} km", s.visibility)),
            tile("\u{1f321}\u{fe0f}", "Áp suất", format!("{} hPa", s.pressure)),
        ];

        let columns = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);
        for (text, column) in tiles.into_iter().zip(columns.iter()) {
            frame.render_widget(Paragraph::new(text), *column);
        }
    }
}
