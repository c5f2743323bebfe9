//! UI components
//!
//! Components keep only transient view state (cursor position, spinner
//! phase). Everything durable lives in [`AppState`](crate::state::AppState)
//! and is passed in through props; changes flow back out as actions.

use ratatui::{Frame, layout::Rect};

use crate::event::EventKind;

mod help_bar;
mod search_bar;
mod text_input;
mod weather_display;

pub use help_bar::{HelpBar, HelpBarProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use text_input::{TextInput, TextInputProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};

/// A piece of UI that reacts to events by producing actions of type `A`
/// and draws itself from borrowed props.
pub trait Component<A> {
    /// Data the component needs for one event or render pass
    type Props<'a>;

    /// React to a terminal event, producing zero or more actions
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Draw the component into `area`
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
