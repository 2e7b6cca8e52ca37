use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::sprites;
use crate::state::HourlyEntry;

/// Horizontal strip of hourly cells, scrolled with ←/→.
pub struct HourlyStrip;

pub struct HourlyStripProps<'a> {
    pub hourly: &'a [HourlyEntry],
    pub offset: usize,
}

/// Terminal columns per hourly cell ("Bây giờ" plus breathing room).
const CELL_WIDTH: u16 = 10;

fn cell(entry: &HourlyEntry) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            entry.time.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(sprites::glyph(entry.icon)).centered(),
        Line::from(Span::styled(
            format!("{}°", entry.temp),
            Style::default().fg(Color::White).bold(),
        ))
        .centered(),
    ])
}

impl Component<Action> for HourlyStrip {
    type Props<'a> = HourlyStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height < 2 || area.width < CELL_WIDTH + 2 {
            return;
        }
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(1),    // Cells
        ])
        .split(area);

        let title = Line::from(Span::styled(
            "Dự báo theo giờ",
            Style::default().fg(Color::White).bold(),
        ));
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let strip = Layout::horizontal([
            Constraint::Length(1), // "more to the left" marker
            Constraint::Min(1),
            Constraint::Length(1), // "more to the right" marker
        ])
        .split(chunks[1]);

        let visible = (strip[1].width / CELL_WIDTH).max(1) as usize;
        let offset = props.offset.min(props.hourly.len().saturating_sub(visible));
        let shown = props.hourly.iter().skip(offset).take(visible);

        let columns = Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); visible])
            .split(strip[1]);
        for (entry, column) in shown.zip(columns.iter()) {
            frame.render_widget(Paragraph::new(cell(entry)), *column);
        }

        let marker_style = Style::default().fg(Color::DarkGray);
        if offset > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled("\u{2039}", marker_style)),
                strip[0],
            );
        }
        if offset + visible < props.hourly.len() {
            frame.render_widget(
                Paragraph::new(Span::styled("\u{203a}", marker_style)),
                strip[2],
            );
        }
    }
}
