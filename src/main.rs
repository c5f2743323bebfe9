//! Binary entry point.
//!
//! Data flow per iteration:
//! 1. the poller task reads terminal events and sends them over a channel
//! 2. the main loop maps events to actions through the UI components
//! 3. the store reduces each action and hands back effects
//! 4. effects spawn fetch tasks that post result actions into the loop
//! 5. when a dispatch changed state, the next iteration redraws

use std::{fs::File, io, path::PathBuf, sync::Mutex, time::Duration};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ozweather::{
    Action, AppState, EventKind, RawEvent, Store, WeatherApi,
    components::{Component, SearchBar, SearchBarProps, WeatherDisplay, WeatherDisplayProps},
    handle_effect, process_raw_event, reduce, spawn_event_poller, spawn_tick_timer,
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tick period driving the loading animation
const TICK_MS: u64 = 100;
/// How long each crossterm poll waits for an event
const POLL_TIMEOUT_MS: u64 = 10;
/// Sleep between poll cycles so the poller does not spin
const LOOP_SLEEP_MS: u64 = 16;

#[derive(Debug, Parser)]
#[command(name = "ozweather")]
#[command(about = "Terminal weather for Australian cities")]
struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    api_key: String,

    /// Provider host override
    #[arg(long, default_value = ozweather::DEFAULT_BASE_URL)]
    base_url: String,

    /// Append logs to this file; without it logging is off, since the
    /// terminal itself is busy drawing the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &PathBuf) -> anyhow::Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let api = WeatherApi::with_base_url(args.api_key, args.base_url);

    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("creating terminal")?;

    let result = run_app(&mut terminal, api).await;

    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leaving alternate screen")?;
    terminal.show_cursor().context("restoring cursor")?;

    result.map_err(Into::into)
}

/// Component tree plus the frame layout
struct AppUi {
    search: SearchBar,
    display: WeatherDisplay,
}

impl AppUi {
    fn new() -> Self {
        Self {
            search: SearchBar::new(),
            display: WeatherDisplay::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(frame.area());

        self.search.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &state.query,
                is_focused: true,
            },
        );
        self.display
            .render(frame, chunks[1], WeatherDisplayProps { state });
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        // Quit keys are app-level, never forwarded to the input
        if let EventKind::Key(key) = event {
            let quit = key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL));
            if quit {
                return vec![Action::Quit];
            }
        }

        self.search
            .handle_event(
                event,
                SearchBarProps {
                    query: &state.query,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect()
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, api: WeatherApi) -> io::Result<()> {
    let mut store = Store::new(AppState::default(), reduce);
    let mut ui = AppUi::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel = CancellationToken::new();

    spawn_event_poller(
        event_tx,
        Duration::from_millis(POLL_TIMEOUT_MS),
        Duration::from_millis(LOOP_SLEEP_MS),
        cancel.clone(),
    );
    spawn_tick_timer(
        action_tx.clone(),
        Duration::from_millis(TICK_MS),
        cancel.clone(),
    );

    info!("starting main loop");
    let mut should_render = true;
    loop {
        if should_render {
            terminal.draw(|frame| ui.render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(raw) = event_rx.recv() => {
                let event = process_raw_event(raw);
                if let EventKind::Resize(..) = event {
                    should_render = true;
                    continue;
                }
                for action in ui.map_event(&event, store.state()) {
                    let _ = action_tx.send(action);
                }
            }
            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    info!("quit requested");
                    break;
                }
                let result = store.dispatch(action);
                for effect in result.effects {
                    handle_effect(effect, &api, &action_tx);
                }
                if result.changed {
                    should_render = true;
                }
            }
            else => break,
        }
    }

    cancel.cancel();
    Ok(())
}
