//! The remote view: key help, and every mapped key goes to the device.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::action::Action;
use crate::component::Component;
use crate::keymap::{self, HINTS, RemoteInput};
use crate::theme;
use crate::views::{PANEL_WIDTH, centered, render_panel};

/// Columns reserved for the key column of each hint row.
const KEY_COLUMN: usize = 14;

#[derive(Debug, Default)]
pub struct RemoteView {
    focused: bool,
    /// Hint row of the last key the device accepted.
    flashed: Option<usize>,
}

impl RemoteView {
    fn hint_lines(&self) -> Vec<Line<'static>> {
        HINTS
            .iter()
            .enumerate()
            .map(|(row, (keys, desc))| {
                let key_style = if self.flashed == Some(row) {
                    theme::key_flash()
                } else {
                    theme::key_hint_key()
                };
                Line::from(vec![
                    Span::styled(format!("{keys:>KEY_COLUMN$}"), key_style),
                    Span::raw("  "),
                    Span::styled(*desc, theme::hint_desc()),
                ])
            })
            .collect()
    }
}

impl Component for RemoteView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(keymap::remote_input(key).map(|input| match input {
            RemoteInput::Key(name) => Action::PressKey(name),
            RemoteInput::Open(view) => Action::SwitchView(view),
            RemoteInput::Quit => Action::Quit,
        }))
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::PressKey(name) => self.flashed = keymap::hint_for(name),
            Action::Notify(n) if n.level == crate::action::NotificationLevel::Error => {
                self.flashed = None;
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.hint_lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let panel = centered(area, PANEL_WIDTH, height);
        let inner = render_panel(frame, panel, "remote", self.focused);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
