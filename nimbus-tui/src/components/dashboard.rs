//! Root component: backdrop, layout, and key routing
//!
//! The backdrop (background color + text color) is derived from the last
//! successful fetch's condition and painted across the whole viewport each
//! frame. Presentation is a function of state; nothing is styled from
//! outside the render pass.

use crossterm::event::{KeyCode, KeyModifiers};
use nimbus_core::EventKind;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{
    CityInput, CityInputProps, Component, HelpBar, HelpBarProps, HistoryOverlay,
    HistoryOverlayProps, QuoteBar, QuoteBarProps, WeatherPanel, WeatherPanelProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme;

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
}

pub struct Dashboard {
    input: CityInput,
    overlay: HistoryOverlay,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            input: CityInput::new(),
            overlay: HistoryOverlay::new(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        // The overlay is modal: while open it gets every key
        if state.show_history {
            let overlay_props = HistoryOverlayProps {
                history: &state.history,
                selected: state.history_selected,
                on_select: Action::HistorySelect,
            };
            return self
                .overlay
                .handle_event(event, overlay_props)
                .into_iter()
                .collect();
        }

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Tab => return vec![Action::HistoryToggle],
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::WeatherFetch];
            }
            _ => {}
        }

        let input_props = CityInputProps {
            value: &state.input,
            fg: theme::text_color(state.condition()),
            is_focused: true,
            on_change: Action::InputChange,
            on_submit: Action::CitySubmit,
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let condition = state.condition();
        let backdrop = theme::backdrop(condition);
        let fg = theme::text_color(condition);

        // Full-viewport backdrop, overwritten wholesale every frame
        frame.render_widget(
            Block::default().style(Style::default().bg(backdrop.bg)),
            area,
        );

        let [title_area, input_area, panel_area, quote_area, help_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new("Weather Dashboard")
            .style(Style::default().fg(fg).bold())
            .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let input_props = CityInputProps {
            value: &state.input,
            fg,
            is_focused: !state.show_history,
            on_change: Action::InputChange,
            on_submit: Action::CitySubmit,
        };
        self.input.render(frame, input_area, input_props);

        let mut panel = WeatherPanel;
        panel.render(frame, panel_area, WeatherPanelProps { state, fg });

        let mut quote = QuoteBar;
        quote.render(
            frame,
            quote_area,
            QuoteBarProps {
                quote_index: state.quote_index,
                fg,
            },
        );

        let mut help = HelpBar;
        help.render(frame, help_area, HelpBarProps { fg });

        if state.show_history {
            let overlay_props = HistoryOverlayProps {
                history: &state.history,
                selected: state.history_selected,
                on_select: Action::HistorySelect,
            };
            self.overlay.render(frame, area, overlay_props);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::testing::{char_key, ctrl_key, key, ActionAssertions};

    fn actions(state: &AppState, event: &EventKind) -> Vec<Action> {
        let mut dashboard = Dashboard::new();
        dashboard
            .handle_event(event, DashboardProps { state })
            .into_iter()
            .collect()
    }

    #[test]
    fn tab_toggles_history() {
        let state = AppState::default();
        actions(&state, &EventKind::Key(key("tab"))).assert_first(Action::HistoryToggle);
    }

    #[test]
    fn ctrl_r_refreshes() {
        let state = AppState::default();
        actions(&state, &EventKind::Key(ctrl_key('r'))).assert_first(Action::WeatherFetch);
    }

    #[test]
    fn esc_quits_when_overlay_closed() {
        let state = AppState::default();
        actions(&state, &EventKind::Key(key("esc"))).assert_first(Action::Quit);
    }

    #[test]
    fn esc_closes_overlay_when_open() {
        let mut state = AppState::default();
        state.show_history = true;
        actions(&state, &EventKind::Key(key("esc"))).assert_first(Action::HistoryToggle);
    }

    #[test]
    fn typed_characters_reach_the_input() {
        let mut state = AppState::default();
        state.input = String::new();

        actions(&state, &EventKind::Key(char_key('P')))
            .assert_first(Action::InputChange("P".into()));
    }

    #[test]
    fn typing_is_captured_by_open_overlay() {
        let mut state = AppState::default();
        state.show_history = true;
        state.history = vec!["Paris".into(), "Tokyo".into()];

        // 'j' navigates the overlay instead of editing the input
        actions(&state, &EventKind::Key(char_key('j')))
            .assert_first(Action::HistorySelect(1));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = AppState::default();
        state.show_history = true;
        actions(&state, &EventKind::Key(ctrl_key('c'))).assert_first(Action::Quit);
    }
}
