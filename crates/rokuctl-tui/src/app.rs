//! Application core: event loop, view switching, device command execution.
//!
//! Device commands are awaited inline, one at a time. Keys pressed while a
//! request is in flight wait in the event channel and run afterwards, in
//! order. Failures land in the status line; the loop keeps going.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use rokuctl_api::EcpClient;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::theme;
use crate::tui::Tui;
use crate::view::ViewId;
use crate::views::create_views;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Top-level application state and event loop.
pub struct App {
    client: EcpClient,
    active_view: ViewId,
    views: HashMap<ViewId, Box<dyn Component>>,
    running: bool,
    /// Last command result, with the time it was shown.
    status: Option<(Notification, Instant)>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(client: EcpClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let mut views = create_views();
        if let Some(view) = views.get_mut(&ViewId::Remote) {
            view.set_focused(true);
        }

        Self {
            client,
            active_view: ViewId::Remote,
            views,
            running: true,
            status: None,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::start()?;
        let mut events = EventReader::spawn(Duration::from_millis(250));
        tui.draw(|frame| self.render(frame))?;

        info!(device = %self.client.base_url(), "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Paste(text) => {
                    if let Some(view) = self.views.get_mut(&self.active_view) {
                        view.handle_paste(&text);
                    }
                }
                Event::Resize(..) => {}
                Event::Tick => self.action_tx.send(Action::Tick)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(action).await?;
            }
            if self.running {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        drop(events);
        info!("TUI event loop ended");
        Ok(())
    }

    /// Ctrl-C always quits; everything else belongs to the active view.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }
        match self.views.get_mut(&self.active_view) {
            Some(view) => view.handle_key_event(key),
            None => Ok(None),
        }
    }

    /// Apply one action. Device actions are awaited before returning.
    async fn process_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::Tick => {
                if self
                    .status
                    .as_ref()
                    .is_some_and(|(_, shown)| shown.elapsed() > STATUS_TTL)
                {
                    self.status = None;
                }
            }

            Action::SwitchView(target) => self.switch_view(target).await?,

            Action::PressKey(name) => {
                debug!(key = name, "press");
                match self.client.key_press(name).await {
                    Ok(()) => {
                        self.forward(&Action::PressKey(name))?;
                        self.notify(Notification::info(format!("sent {name}")))?;
                    }
                    Err(e) => {
                        let reason = self.describe(&e);
                        self.notify(Notification::error(format!("{name}: {reason}")))?;
                    }
                }
            }

            Action::SendText(text) => {
                let count = text.chars().count();
                match self.client.send_literal(&text).await {
                    Ok(()) => self.notify(Notification::success(format!("typed {count} chars")))?,
                    Err(e) => {
                        let reason = self.describe(&e);
                        self.notify(Notification::error(format!("typing stopped: {reason}")))?;
                    }
                }
                self.switch_view(ViewId::Remote).await?;
            }

            Action::LaunchApp(query) => {
                match self.client.launch_app_by_name_match(&query).await {
                    Ok(app) => {
                        info!(name = %app.name, id = %app.id, "launched");
                        self.notify(Notification::success(format!("launched {}", app.name)))?;
                    }
                    Err(e) => self.notify(Notification::error(self.describe(&e)))?,
                }
                self.switch_view(ViewId::Remote).await?;
            }

            Action::Notify(notification) => {
                if notification.level == NotificationLevel::Error {
                    warn!(message = %notification.message, "command failed");
                }
                self.forward(&Action::Notify(notification.clone()))?;
                self.status = Some((notification, Instant::now()));
            }

            action @ Action::AppsLoaded(_) => self.forward(&action)?,
        }
        Ok(())
    }

    async fn switch_view(&mut self, target: ViewId) -> Result<()> {
        if target == self.active_view {
            return Ok(());
        }
        debug!("switching view: {} → {}", self.active_view, target);
        if let Some(view) = self.views.get_mut(&self.active_view) {
            view.set_focused(false);
        }
        self.active_view = target;
        if let Some(view) = self.views.get_mut(&self.active_view) {
            view.set_focused(true);
        }

        if target == ViewId::Apps {
            match self.client.query_apps().await {
                Ok(apps) => self.action_tx.send(Action::AppsLoaded(apps))?,
                Err(e) => {
                    let reason = self.describe(&e);
                    self.notify(Notification::error(format!("app list: {reason}")))?;
                }
            }
        }
        Ok(())
    }

    /// Status line text for a failed device call.
    fn describe(&self, err: &rokuctl_api::Error) -> String {
        if err.is_connect() {
            format!("{} unreachable", self.client.host())
        } else {
            err.to_string()
        }
    }

    fn notify(&self, notification: Notification) -> Result<()> {
        self.action_tx.send(Action::Notify(notification))?;
        Ok(())
    }

    /// Hand an action to the active view, dispatching any follow-up.
    fn forward(&mut self, action: &Action) -> Result<()> {
        if let Some(view) = self.views.get_mut(&self.active_view) {
            if let Some(next) = view.update(action)? {
                self.action_tx.send(next)?;
            }
        }
        Ok(())
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [header, content, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        if let Some(view) = self.views.get(&self.active_view) {
            view.render(frame, content);
        }
        self.render_status_bar(frame, status);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" rokuctl ", theme::title_style())];
        for view in ViewId::ALL {
            let style = if view == self.active_view {
                theme::key_flash()
            } else {
                theme::key_hint()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {view} "), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Device address, last command result, and view hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(format!("● {}", self.client.host()), theme::device_badge()),
        ];

        if let Some((notification, _)) = &self.status {
            let style = match notification.level {
                NotificationLevel::Info => theme::status_info(),
                NotificationLevel::Success => theme::status_success(),
                NotificationLevel::Error => theme::status_error(),
            };
            spans.push(Span::styled(" │ ", theme::key_hint()));
            spans.push(Span::styled(notification.message.as_str(), style));
        }

        let hints = if self.active_view.takes_text() {
            " │ Enter submit  Esc back  Ctrl+C quit"
        } else {
            " │ i insert  a apps  q quit"
        };
        spans.push(Span::styled(hints, theme::key_hint()));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
