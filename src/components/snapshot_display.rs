use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    CityHeader, CityHeaderProps, Component, CurrentCard, CurrentCardProps, DailyList,
    DailyListProps, DetailTiles, DetailTilesProps, HourlyStrip, HourlyStripProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Props for SnapshotDisplay - read-only view of state
pub struct SnapshotDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The full-screen weather display
#[derive(Default)]
pub struct SnapshotDisplay;

impl Component<Action> for SnapshotDisplay {
    type Props<'a> = SnapshotDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::SnapshotRefresh),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::UiHoursLeft),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::UiHoursRight),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: SnapshotDisplayProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Max(8),    // City header
            Constraint::Max(16),   // Current conditions
            Constraint::Length(3), // Detail tiles
            Constraint::Length(4), // Hourly strip
            Constraint::Length(8), // Daily list
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut header = CityHeader;
        header.render(
            frame,
            chunks[0],
            CityHeaderProps {
                city: &state.snapshot.city,
                temperature: state.snapshot.temperature,
                is_refreshing: state.is_refreshing,
                is_animating: state.refresh_anim_active(),
                tick_count: state.tick_count,
            },
        );

        let mut card = CurrentCard;
        card.render(
            frame,
            chunks[1],
            CurrentCardProps {
                snapshot: &state.snapshot,
            },
        );

        let mut tiles = DetailTiles;
        tiles.render(
            frame,
            chunks[2],
            DetailTilesProps {
                snapshot: &state.snapshot,
            },
        );

        let mut hours = HourlyStrip;
        hours.render(
            frame,
            chunks[3],
            HourlyStripProps {
                hourly: &state.snapshot.hourly,
                offset: state.hourly_offset,
            },
        );

        let mut days = DailyList;
        days.render(
            frame,
            chunks[4],
            DailyListProps {
                daily: &state.snapshot.daily,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[5],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("r", "refresh"),
                    StatusBarHint::new("←/→", "hours"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_handle_event_refresh() {
        let mut component = SnapshotDisplay;
        let state = AppState::default();
        let props = SnapshotDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SnapshotRefresh);
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = SnapshotDisplay;
        let state = AppState::default();
        let props = SnapshotDisplayProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("q")), props)
            .into_iter()
            .collect();
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = SnapshotDisplay;
        let state = AppState::default();
        let props = SnapshotDisplayProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("r")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_snapshot() {
        let mut render = RenderHarness::new(80, 40);
        let mut component = SnapshotDisplay;
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            let props = SnapshotDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Có mây"));
        assert!(output.contains("Dự báo 7 ngày"));
    }

    #[test]
    fn test_render_while_refreshing_keeps_data() {
        let mut render = RenderHarness::new(80, 40);
        let mut component = SnapshotDisplay;
        let state = AppState {
            is_refreshing: true,
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = SnapshotDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Đang làm mới"));
        assert!(output.contains("Có mây"));
    }
}
