//! Single-line city input with cursor editing

use crossterm::event::{KeyCode, KeyModifiers};
use nimbus_core::EventKind;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct CityInputProps<'a> {
    /// Current draft value.
    pub value: &'a str,
    /// Text color over the backdrop.
    pub fg: Color,
    /// Whether keystrokes should edit the value.
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

/// Text input for the city name.
///
/// Cursor position is view state and lives here; the value itself lives in
/// `AppState` and changes only through `on_change` actions.
#[derive(Default)]
pub struct CityInput {
    /// Cursor position (byte index into the value).
    cursor: usize,
}

impl CityInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor > 0 {
            let mut new_pos = self.cursor - 1;
            while new_pos > 0 && !value.is_char_boundary(new_pos) {
                new_pos -= 1;
            }
            self.cursor = new_pos;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor < value.len() {
            let mut new_pos = self.cursor + 1;
            while new_pos < value.len() && !value.is_char_boundary(new_pos) {
                new_pos += 1;
            }
            self.cursor = new_pos;
        }
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_char_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }

        let char_start = value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..char_start]);
        new_value.push_str(&value[self.cursor..]);
        self.cursor = char_start;
        Some(new_value)
    }

    fn delete_char_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }

        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.cursor]);
        if let Some((_, c)) = value[self.cursor..].char_indices().next() {
            new_value.push_str(&value[self.cursor + c.len_utf8()..]);
        }
        Some(new_value)
    }
}

impl Component<Action> for CityInput {
    type Props<'a> = CityInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.value.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let new_value = self.insert_char(props.value, c);
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace => self
                .delete_char_before(props.value)
                .map(|v| (props.on_change)(v)),
            KeyCode::Delete => self.delete_char_at(props.value).map(|v| (props.on_change)(v)),
            KeyCode::Left => {
                self.move_cursor_left(props.value);
                None
            }
            KeyCode::Right => {
                self.move_cursor_right(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(props.fg))
            .title(" City ")
            .title_style(Style::default().fg(props.fg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text = Paragraph::new(props.value).style(Style::default().fg(props.fg));
        frame.render_widget(text, inner);

        if props.is_focused && inner.width > 0 {
            let cursor_col = props.value[..self.cursor].chars().count() as u16;
            let x = inner.x + cursor_col.min(inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::testing::{char_key, ctrl_key, key, ActionAssertions};

    fn props(value: &str) -> CityInputProps<'_> {
        CityInputProps {
            value,
            fg: Color::Black,
            is_focused: true,
            on_change: Action::InputChange,
            on_submit: Action::CitySubmit,
        }
    }

    fn actions(input: &mut CityInput, event: &EventKind, value: &str) -> Vec<Action> {
        input.handle_event(event, props(value)).into_iter().collect()
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = CityInput::new();
        // Move the cursor to the end of "Pari" first
        actions(&mut input, &EventKind::Key(key("end")), "Pari");

        let emitted = actions(&mut input, &EventKind::Key(char_key('s')), "Pari");
        emitted.assert_first(Action::InputChange("Paris".into()));
    }

    #[test]
    fn backspace_deletes_before_cursor() {
        let mut input = CityInput::new();
        actions(&mut input, &EventKind::Key(key("end")), "Paris");

        let emitted = actions(&mut input, &EventKind::Key(key("backspace")), "Paris");
        emitted.assert_first(Action::InputChange("Pari".into()));
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = CityInput::new();

        let emitted = actions(&mut input, &EventKind::Key(key("enter")), "Tokyo");
        emitted.assert_first(Action::CitySubmit("Tokyo".into()));
    }

    #[test]
    fn ctrl_u_clears_the_value() {
        let mut input = CityInput::new();

        let emitted = actions(&mut input, &EventKind::Key(ctrl_key('u')), "Tokyo");
        emitted.assert_first(Action::InputChange(String::new()));
    }

    #[test]
    fn unfocused_input_ignores_keys() {
        let mut input = CityInput::new();
        let p = CityInputProps {
            is_focused: false,
            ..props("Paris")
        };

        let emitted: Vec<Action> = input
            .handle_event(&EventKind::Key(char_key('x')), p)
            .into_iter()
            .collect();
        emitted.assert_empty();
    }

    #[test]
    fn multibyte_editing_respects_char_boundaries() {
        let mut input = CityInput::new();
        actions(&mut input, &EventKind::Key(key("end")), "Zürich");

        let emitted = actions(&mut input, &EventKind::Key(key("backspace")), "Zürich");
        emitted.assert_first(Action::InputChange("Züric".into()));
    }
}
