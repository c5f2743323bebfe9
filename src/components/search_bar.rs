//! City search bar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::{
    action::Action,
    components::{Component, TextInput, TextInputProps},
    event::EventKind,
};

/// Props for [`SearchBar`]
pub struct SearchBarProps<'a> {
    /// Query text from app state
    pub query: &'a str,
    pub is_focused: bool,
}

/// Bordered input for the city query.
///
/// Wraps [`TextInput`], wiring its callbacks to the search actions.
#[derive(Debug, Default)]
pub struct SearchBar {
    input: TextInput,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props<'a>(props: &SearchBarProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.query,
            placeholder: "Enter a city name",
            is_focused: props.is_focused,
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let actions: Vec<Action> = self
            .input
            .handle_event(event, Self::input_props(&props))
            .into_iter()
            .collect();
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" City ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.input.render(frame, inner, Self::input_props(&props));
    }
}
