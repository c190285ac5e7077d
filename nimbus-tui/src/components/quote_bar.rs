//! Rotating motivational quote

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::state::QUOTES;

pub struct QuoteBarProps {
    pub quote_index: usize,
    pub fg: Color,
}

pub struct QuoteBar;

impl Component<Action> for QuoteBar {
    type Props<'a> = QuoteBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let quote = QUOTES[props.quote_index % QUOTES.len()];
        let paragraph = Paragraph::new(quote)
            .style(Style::default().fg(props.fg).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
