//! Test utilities for nimbus components and reducers
//!
//! - [`key`]: build a `KeyEvent` from a string (`"enter"`, `"ctrl+r"`)
//! - [`RenderHarness`]: render into a test buffer and snapshot it as text
//! - [`ActionAssertions`]: assertions over actions a component emitted

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Parse a key string like `"q"`, `"enter"`, or `"ctrl+r"` into a
/// `KeyEvent`. Returns `None` for strings it does not understand.
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut code: Option<KeyCode> = None;

    for part in s.split('+') {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => modifiers |= KeyModifiers::CONTROL,
            "alt" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "tab" => code = Some(KeyCode::Tab),
            "backspace" => code = Some(KeyCode::Backspace),
            "delete" => code = Some(KeyCode::Delete),
            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "home" => code = Some(KeyCode::Home),
            "end" => code = Some(KeyCode::End),
            other => {
                let mut chars = other.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                code = Some(KeyCode::Char(c));
            }
        }
    }

    // shift+tab arrives as BackTab from terminals
    if code == Some(KeyCode::Tab) && modifiers.contains(KeyModifiers::SHIFT) {
        code = Some(KeyCode::BackTab);
    }

    Some(KeyEvent {
        code: code?,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` from a key string, panicking on invalid input.
/// Suitable for tests.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Flatten a buffer to plain text, one line per buffer row, styling
/// discarded.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Render harness over ratatui's `TestBackend`.
///
/// Renders a frame at a fixed size and exposes the resulting buffer as a
/// plain string for content assertions.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Render one frame and return the buffer contents as plain text.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).expect("draw frame");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Assertions over the actions a component returned from `handle_event`.
pub trait ActionAssertions<A: std::fmt::Debug + PartialEq> {
    /// Assert that no actions were emitted.
    fn assert_empty(&self);
    /// Assert the exact number of emitted actions.
    fn assert_count(&self, expected: usize);
    /// Assert the first emitted action equals `expected`.
    fn assert_first(&self, expected: A);
}

impl<A: std::fmt::Debug + PartialEq> ActionAssertions<A> for Vec<A> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "expected {} actions, got: {:?}",
            expected,
            self
        );
    }

    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(*first, expected),
            None => panic!("expected first action {:?}, but none were emitted", expected),
        }
    }
}

/// Assert that an action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}
