//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Components follow three rules:
/// 1. Props carry all read-only data needed for rendering.
/// 2. `handle_event` returns actions; it never mutates application state.
/// 3. `render` is a function of props plus internal view state (cursor
///    position, scroll offset).
///
/// Focus is passed through props rather than through event context, so
/// components stay decoupled from how the application routes input.
pub trait Component<A> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator` of actions: `None` for no actions,
    /// `Some(action)` for one, `vec![..]` for several.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component into the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
