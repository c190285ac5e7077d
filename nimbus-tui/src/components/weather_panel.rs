//! Weather panel: condition art, temperature, description, lifestyle tip
//!
//! Exactly one of four views is shown: error, weather, loading, or the
//! initial empty prompt. The error text fully replaces the weather view;
//! the backdrop behind it still reflects the last successful fetch.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::api::WeatherSnapshot;
use crate::state::AppState;
use crate::theme;

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
    pub fg: Color,
}

pub struct WeatherPanel;

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if state.is_loading {
            WeatherView::Loading
        } else if let Some(error) = state.error.as_deref() {
            WeatherView::Error(error)
        } else if let Some(weather) = state.weather.as_ref() {
            WeatherView::Ready(weather)
        } else {
            WeatherView::Empty
        }
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = lines_for_state(props.state, props.fg);
        if lines.is_empty() {
            return;
        }

        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

fn lines_for_state(state: &AppState, fg: Color) -> Vec<Line<'static>> {
    let view = WeatherView::from_state(state);

    match view {
        WeatherView::Error(error) => vec![
            Line::from(Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )),
        ],
        WeatherView::Ready(weather) => {
            let condition = theme::Condition::parse(&weather.condition_main);
            let emoji = theme::condition_emoji(condition);

            let mut lines: Vec<Line<'static>> = theme::backdrop(condition)
                .art
                .lines()
                .map(|art_line| {
                    Line::from(Span::styled(art_line.to_string(), Style::default().fg(fg)))
                })
                .collect();

            lines.push(Line::from(Span::styled(
                weather.location_name.clone(),
                Style::default().fg(fg).bold(),
            )));
            lines.push(Line::from(vec![
                Span::styled("Temperature: ", Style::default().fg(fg)),
                Span::styled(
                    format!("{:.1}°C", weather.temperature_c),
                    Style::default().fg(fg).bold(),
                ),
                Span::styled(" 🌡️", Style::default().fg(fg)),
            ]));

            let mut condition_spans = vec![
                Span::styled("Weather: ", Style::default().fg(fg)),
                Span::styled(weather.description.clone(), Style::default().fg(fg).bold()),
            ];
            if !emoji.is_empty() {
                condition_spans.push(Span::styled(format!(" {emoji}"), Style::default().fg(fg)));
            }
            lines.push(Line::from(condition_spans));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                theme::lifestyle_tip(condition),
                Style::default().fg(fg).italic(),
            )));

            lines
        }
        WeatherView::Loading => vec![Line::from(Span::styled(
            "Fetching weather data...",
            Style::default().fg(fg),
        ))],
        WeatherView::Empty => vec![Line::from(Span::styled(
            "Press enter to fetch weather",
            Style::default().fg(fg),
        ))],
    }
}
