//! Terminal event plumbing
//!
//! A background task polls crossterm and forwards raw events over a
//! channel; the main loop converts them to [`EventKind`] before handing
//! them to components. A second task drives the periodic [`Action::Tick`].

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::action::Action;

/// Upper bound on events drained per poll cycle so a paste burst cannot
/// starve the render loop
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Event as read from the terminal, before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Event as seen by components
#[derive(Clone, Debug)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Convert a raw terminal event into the form components consume
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Resize(width, height) => EventKind::Resize(width, height),
    }
}

/// Spawn the crossterm polling task.
///
/// Runs until the token is cancelled or the receiving side of `tx` is
/// dropped. On cancellation any buffered terminal events are drained so
/// they do not leak into the shell after restore.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        if let Ok(raw) = event::read() {
                            let raw_event = match raw {
                                Event::Key(key) => Some(RawEvent::Key(key)),
                                Event::Resize(width, height) => {
                                    Some(RawEvent::Resize(width, height))
                                }
                                // Mouse and focus events are not used
                                _ => None,
                            };
                            if let Some(raw_event) = raw_event
                                && tx.send(raw_event).is_err()
                            {
                                debug!("Event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Spawn the periodic tick task.
///
/// Emits [`Action::Tick`] every `period` until cancelled or until the
/// action channel closes.
pub fn spawn_tick_timer(
    tx: mpsc::UnboundedSender<Action>,
    period: Duration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // Skip the first immediate tick
        interval.tick().await;
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    debug!("Tick timer cancelled");
                    break;
                }
                _ = interval.tick() => {
                    if tx.send(Action::Tick).is_err() {
                        debug!("Action channel closed, stopping tick timer");
                        break;
                    }
                }
            }
        }
    })
}
