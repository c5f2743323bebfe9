//! Key hint line

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{action::Action, components::Component};

/// Props for [`HelpBar`]
pub struct HelpBarProps {}

/// One-line key legend at the bottom of the weather panel
#[derive(Debug, Default)]
pub struct HelpBar;

impl HelpBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let hints = Line::from(vec![
            Span::styled("enter", key_style),
            Span::styled(" search  ", label_style),
            Span::styled("esc", key_style),
            Span::styled(" quit", label_style),
        ])
        .centered();
        frame.render_widget(Paragraph::new(hints), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;

    #[test]
    fn test_render_lists_key_hints() {
        let mut bar = HelpBar::new();
        let mut harness = RenderHarness::new(40, 1);

        let output = harness.render_to_string_plain(|frame| {
            let area = frame.area();
            bar.render(frame, area, HelpBarProps {});
        });
        assert!(output.contains("enter search"));
        assert!(output.contains("esc quit"));
    }
}
