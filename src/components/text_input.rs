//! Single-line text input

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{components::Component, event::EventKind};

/// Props for [`TextInput`]
pub struct TextInputProps<'a, A> {
    /// Current value, owned by app state
    pub value: &'a str,
    /// Shown dimmed while the value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Action to emit when the value changes
    pub on_change: fn(String) -> A,
    /// Action to emit on enter, carrying the full value
    pub on_submit: fn(String) -> A,
}

/// Text input that edits a value held elsewhere.
///
/// Only the cursor lives here. The value can change out from under the
/// component between passes, so the cursor is re-clamped to a char
/// boundary on every event and render.
#[derive(Debug, Default)]
pub struct TextInput {
    /// Byte offset into the value
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        if self.cursor > value.len() {
            self.cursor = value.len();
        }
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_left(&mut self, value: &str) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn move_cursor_right(&mut self, value: &str) {
        if self.cursor >= value.len() {
            return;
        }
        self.cursor += 1;
        while self.cursor < value.len() && !value.is_char_boundary(self.cursor) {
            self.cursor += 1;
        }
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let mut actions = Vec::new();
        if !props.is_focused {
            return actions;
        }
        let EventKind::Key(key) = event else {
            return actions;
        };
        if key.kind != KeyEventKind::Press {
            return actions;
        }
        self.clamp_cursor(props.value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = props.value.len(),
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    actions.push((props.on_change)(String::new()));
                }
                // Other control chords belong to the app
                _ => {}
            }
            return actions;
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = props.value.to_string();
                next.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                actions.push((props.on_change)(next));
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let mut next = props.value.to_string();
                    let mut start = self.cursor - 1;
                    while start > 0 && !next.is_char_boundary(start) {
                        start -= 1;
                    }
                    next.drain(start..self.cursor);
                    self.cursor = start;
                    actions.push((props.on_change)(next));
                }
            }
            KeyCode::Delete => {
                if self.cursor < props.value.len() {
                    let mut next = props.value.to_string();
                    let mut end = self.cursor + 1;
                    while end < next.len() && !next.is_char_boundary(end) {
                        end += 1;
                    }
                    next.drain(self.cursor..end);
                    actions.push((props.on_change)(next));
                }
            }
            KeyCode::Left => self.move_cursor_left(props.value),
            KeyCode::Right => self.move_cursor_right(props.value),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = props.value.len(),
            KeyCode::Enter => actions.push((props.on_submit)(props.value.to_string())),
            _ => {}
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let content = if props.value.is_empty() && !props.placeholder.is_empty() {
            Line::from(props.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Line::from(props.value)
        };
        frame.render_widget(Paragraph::new(content), area);

        if props.is_focused {
            // Byte offset doubles as the column, adequate for ASCII input
            let column = (self.cursor as u16).min(area.width.saturating_sub(1));
            frame.set_cursor_position((area.x + column, area.y));
        }
    }
}
