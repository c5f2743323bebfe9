//! Weather panel
//!
//! Renders whichever of the four views the state calls for: an error
//! banner, the current report, a fetch-in-progress line, or the prompt
//! shown before any city has been looked up.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    action::Action,
    components::{Component, HelpBar, HelpBarProps},
    state::{AppState, WeatherReport},
};

/// Spinner frames cycled through while a fetch is in flight
const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for [`WeatherDisplay`]
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
}

/// What the panel should show, in precedence order
enum WeatherView<'a> {
    Error(&'a str),
    Ready(WeatherReport),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        if let Some(message) = &state.error {
            return WeatherView::Error(message);
        }
        // A previous report stays visible while a new fetch runs; the
        // title spinner signals the activity.
        if let Some(report) = state.report() {
            return WeatherView::Ready(report);
        }
        if state.is_loading {
            return WeatherView::Loading;
        }
        WeatherView::Empty
    }
}

/// Display-only panel for the weather slot plus the help line
#[derive(Debug, Default)]
pub struct WeatherDisplay {
    help_bar: HelpBar,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let spinner_frame = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];

        let title = if state.is_loading {
            format!(" Weather {} ", spinner_frame)
        } else {
            " Weather ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(title)
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let lines: Vec<Line> = match WeatherView::from_state(state) {
            WeatherView::Error(message) => vec![
                Line::from("Fetch failed")
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .centered(),
                Line::from(message)
                    .style(Style::default().fg(Color::Rgb(200, 100, 100)))
                    .centered(),
                Line::default(),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "enter",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                ])
                .centered(),
            ],
            WeatherView::Ready(report) => vec![
                Line::from(report.city)
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .centered(),
                Line::from(report.conditions)
                    .style(Style::default().fg(Color::Gray))
                    .centered(),
                Line::default(),
                Line::from(vec![
                    Span::styled("Temperature  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{:.2}°C", report.temperature_c),
                        Style::default()
                            .fg(temp_to_color(report.temperature_c))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .centered(),
                Line::from(vec![
                    Span::styled("Wind  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{} m/s", report.wind_speed),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .centered(),
                Line::from(vec![
                    Span::styled("Pressure  ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{} hPa", report.pressure),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .centered(),
            ],
            WeatherView::Loading => {
                let dots = ".".repeat((state.tick_count as usize / 3) % 4);
                vec![
                    Line::from(vec![
                        Span::styled(spinner_frame, Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!(" Fetching weather{:<3}", dots),
                            Style::default().fg(Color::Gray),
                        ),
                    ])
                    .centered(),
                ]
            }
            WeatherView::Empty => vec![
                Line::from("Please enter city name")
                    .style(Style::default().fg(Color::DarkGray))
                    .centered(),
            ],
        };

        let body = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .split(chunks[0]);
        frame.render_widget(Paragraph::new(lines), body[0]);

        self.help_bar.render(frame, chunks[1], HelpBarProps {});
    }
}

fn temp_to_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=0 => Color::Rgb(100, 150, 255),    // Freezing - blue
        1..=14 => Color::Rgb(120, 200, 255),  // Cool - light blue
        15..=24 => Color::Rgb(120, 220, 140), // Mild - green
        25..=31 => Color::Rgb(255, 180, 80),  // Warm - orange
        _ => Color::Rgb(255, 100, 80),        // Hot - red
    }
}
