//! Keybinding hints

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct HelpBarProps {
    pub fg: Color,
}

pub struct HelpBar;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let dim = Style::default().fg(props.fg);
        let key = Style::default().fg(props.fg).bold();

        let help = Line::from(vec![
            Span::styled(" enter", key),
            Span::styled(" fetch  ", dim),
            Span::styled("tab", key),
            Span::styled(" history  ", dim),
            Span::styled("ctrl+r", key),
            Span::styled(" refresh  ", dim),
            Span::styled("esc", key),
            Span::styled(" quit ", dim),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
