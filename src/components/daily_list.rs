use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::sprites;
use crate::state::DailyEntry;

/// Seven-day forecast, one row per day.
pub struct DailyList;

pub struct DailyListProps<'a> {
    pub daily: &'a [DailyEntry],
}

fn render_row(frame: &mut Frame, area: Rect, entry: &DailyEntry) {
    let columns = Layout::horizontal([
        Constraint::Min(10),    // Day label
        Constraint::Length(8),  // Rain chance
        Constraint::Length(4),  // Icon
        Constraint::Length(11), // High / low
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            entry.day.clone(),
            Style::default().fg(Color::White),
        )),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{1f4a7} ", Style::default().fg(Color::Blue)),
            Span::styled(
                format!("{}%", entry.rain_chance),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(sprites::glyph(entry.icon))).alignment(Alignment::Center),
        columns[2],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}°", entry.high),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(
                format!(" / {}°", entry.low),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .alignment(Alignment::Right),
        columns[3],
    );
}

impl Component<Action> for DailyList {
    type Props<'a> = DailyListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height < 2 || area.width < 35 {
            return;
        }
        let title = Line::from(Span::styled(
            "Dự báo 7 ngày",
            Style::default().fg(Color::White).bold(),
        ));
        frame.render_widget(
            Paragraph::new(title),
            Rect {
                height: 1,
                ..area
            },
        );

        let rows = area.height.saturating_sub(1) as usize;
        for (i, entry) in props.daily.iter().take(rows).enumerate() {
            let row = Rect {
                y: area.y + 1 + i as u16,
                height: 1,
                ..area
            };
            render_row(frame, row, entry);
        }
    }
}
