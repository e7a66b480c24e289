//! Terminal input pump.
//!
//! A background task turns crossterm's `EventStream` into [`Event`]s on an
//! unbounded channel. The app redraws after every event it handles, so the
//! only timer is the status tick.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Bracketed paste, delivered as one string.
    Paste(String),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    Tick,
}

impl Event {
    /// Only key presses and pastes reach the app; releases, repeats,
    /// mouse and focus changes are dropped.
    fn from_terminal(event: TermEvent) -> Option<Self> {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            TermEvent::Paste(text) => Some(Self::Paste(text)),
            TermEvent::Resize(cols, rows) => Some(Self::Resize(cols, rows)),
            _ => None,
        }
    }
}

/// Key events queue up while the app awaits a device request, so every
/// keystroke is handled in order once the request finishes.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn spawn(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, cancel.clone(), tick_rate));
        Self { rx, cancel }
    }

    /// `None` once the pump has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(tx: mpsc::UnboundedSender<Event>, cancel: CancellationToken, tick_rate: Duration) {
    let mut terminal = EventStream::new();
    let mut ticks = tokio::time::interval(tick_rate);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => return,
            _ = ticks.tick() => Event::Tick,
            next = terminal.next() => match next {
                Some(Ok(raw)) => match Event::from_terminal(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal read failed");
                    continue;
                }
                None => return,
            },
        };

        if tx.send(event).is_err() {
            return;
        }
    }
}
