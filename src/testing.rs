//! Test helpers
//!
//! Key events built from readable strings, plus a [`TestBackend`]
//! harness for asserting on rendered frames. These panic on misuse
//! since they only run under test.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Frame, Terminal, backend::TestBackend, buffer::Buffer};

/// Build a key event from a readable description.
///
/// Accepts a bare key (`"a"`, `"enter"`, `"esc"`) or modifiers joined
/// with `+` (`"ctrl+u"`, `"shift+tab"`).
///
/// # Panics
///
/// Panics on an unrecognized key or modifier.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("unrecognized key string: {s:?}"))
}

/// Key event for a plain character
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Key event for ctrl plus a character
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let lowered = s.trim().to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut code = None;

    for part in lowered.split('+') {
        match part {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            other => code = Some(parse_key_code(other)?),
        }
    }

    Some(KeyEvent {
        code: code?,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        single if single.chars().count() == 1 => KeyCode::Char(single.chars().next()?),
        _ => return None,
    };
    Some(code)
}

/// Renders into a [`TestBackend`] and exposes the buffer as plain text
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the backing terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    /// Draw one frame and return the buffer contents, one row per line,
    /// with all styling stripped.
    pub fn render_to_string_plain(&mut self, f: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(f).expect("draw frame");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer to plain text, one row per line
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parses_plain_char() {
        let event = key("a");
        assert_eq!(event.code, KeyCode::Char('a'));
        assert_eq!(event.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_key_parses_ctrl_combo() {
        let event = key("ctrl+u");
        assert_eq!(event.code, KeyCode::Char('u'));
        assert!(event.modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_key_parses_named_keys() {
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("esc").code, KeyCode::Esc);
        assert_eq!(key("backspace").code, KeyCode::Backspace);
    }

    #[test]
    fn test_char_helpers() {
        assert_eq!(char_key('x').code, KeyCode::Char('x'));
        assert!(ctrl_key('c').modifiers.contains(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_harness_captures_rendered_text() {
        let mut harness = RenderHarness::new(12, 1);

        let output = harness.render_to_string_plain(|frame| {
            let area = frame.area();
            frame.render_widget(ratatui::widgets::Paragraph::new("hello"), area);
        });
        assert!(output.contains("hello"));
    }
}
