//! Search history overlay
//!
//! A centered modal listing every distinct city queried this session.
//! While open it captures all keys: Up/Down/j/k move the selection, Enter
//! re-queries the selected city, Esc/Tab close the overlay. Visibility is
//! controlled by `AppState::show_history` and never changes the log itself.

use crossterm::event::KeyCode;
use nimbus_core::EventKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct HistoryOverlayProps<'a> {
    pub history: &'a [String],
    pub selected: usize,
    pub on_select: fn(usize) -> Action,
}

#[derive(Default)]
pub struct HistoryOverlay;

impl HistoryOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for HistoryOverlay {
    type Props<'a> = HistoryOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Tab => Some(Action::HistoryToggle),
            KeyCode::Enter => {
                if props.history.is_empty() {
                    None
                } else {
                    Some(Action::HistoryConfirm)
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = props.history.len().saturating_sub(1);
                let next = (props.selected + 1).min(last);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let next = props.selected.saturating_sub(1);
                (next != props.selected).then(|| (props.on_select)(next))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 24 || area.height < 8 {
            return;
        }

        let height = (props.history.len() as u16 + 4).clamp(6, area.height.saturating_sub(2));
        let modal_area = centered_rect(40, height, area);

        frame.render_widget(Clear, modal_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Rgb(35, 35, 45)))
            .border_style(Style::default().fg(Color::Gray))
            .title(" Search History ")
            .title_style(Style::default().fg(Color::White));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        if props.history.is_empty() {
            let empty = Line::from("No searches yet").centered();
            frame.render_widget(
                ratatui::widgets::Paragraph::new(empty).style(Style::default().fg(Color::Gray)),
                inner,
            );
            return;
        }

        let items: Vec<ListItem> = props
            .history
            .iter()
            .map(|city| ListItem::new(city.as_str()))
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(props.selected.min(props.history.len() - 1)));
        frame.render_stateful_widget(list, inner, &mut list_state);
    }
}

/// Centered rectangle within an area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::testing::{char_key, key, ActionAssertions, RenderHarness};

    fn history() -> Vec<String> {
        vec!["Paris".into(), "Tokyo".into(), "London".into()]
    }

    fn actions(event: &EventKind, history: &[String], selected: usize) -> Vec<Action> {
        let mut overlay = HistoryOverlay::new();
        overlay
            .handle_event(
                event,
                HistoryOverlayProps {
                    history,
                    selected,
                    on_select: Action::HistorySelect,
                },
            )
            .into_iter()
            .collect()
    }

    #[test]
    fn down_moves_selection() {
        let history = history();
        let emitted = actions(&EventKind::Key(key("down")), &history, 0);
        emitted.assert_first(Action::HistorySelect(1));

        let emitted = actions(&EventKind::Key(char_key('j')), &history, 1);
        emitted.assert_first(Action::HistorySelect(2));
    }

    #[test]
    fn selection_stops_at_the_edges() {
        let history = history();
        actions(&EventKind::Key(key("up")), &history, 0).assert_empty();
        actions(&EventKind::Key(key("down")), &history, 2).assert_empty();
    }

    #[test]
    fn enter_confirms_selection() {
        let history = history();
        let emitted = actions(&EventKind::Key(key("enter")), &history, 1);
        emitted.assert_first(Action::HistoryConfirm);
    }

    #[test]
    fn enter_on_empty_history_is_ignored() {
        actions(&EventKind::Key(key("enter")), &[], 0).assert_empty();
    }

    #[test]
    fn esc_and_tab_close_the_overlay() {
        let history = history();
        actions(&EventKind::Key(key("esc")), &history, 0).assert_first(Action::HistoryToggle);
        actions(&EventKind::Key(key("tab")), &history, 0).assert_first(Action::HistoryToggle);
    }

    #[test]
    fn renders_entries_with_title() {
        let history = history();
        let mut harness = RenderHarness::new(60, 20);
        let mut overlay = HistoryOverlay::new();

        let output = harness.render_to_string_plain(|frame| {
            overlay.render(
                frame,
                frame.area(),
                HistoryOverlayProps {
                    history: &history,
                    selected: 0,
                    on_select: Action::HistorySelect,
                },
            );
        });

        assert!(output.contains("Search History"));
        assert!(output.contains("Paris"));
        assert!(output.contains("Tokyo"));
        assert!(output.contains("London"));
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut harness = RenderHarness::new(60, 20);
        let mut overlay = HistoryOverlay::new();

        let output = harness.render_to_string_plain(|frame| {
            overlay.render(
                frame,
                frame.area(),
                HistoryOverlayProps {
                    history: &[],
                    selected: 0,
                    on_select: Action::HistorySelect,
                },
            );
        });

        assert!(output.contains("No searches yet"));
    }
}
