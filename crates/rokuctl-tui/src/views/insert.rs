//! The insert view: text typed here is sent as literal key presses.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::view::ViewId;
use crate::views::{PANEL_WIDTH, centered};
use crate::widgets::prompt::{Prompt, PromptEvent};

#[derive(Debug, Default)]
pub struct InsertView {
    prompt: Prompt,
    focused: bool,
}

impl Component for InsertView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match self.prompt.handle_key(key) {
            PromptEvent::Submit(text) if !text.is_empty() => Some(Action::SendText(text)),
            PromptEvent::Submit(_) | PromptEvent::Cancel => {
                Some(Action::SwitchView(ViewId::Remote))
            }
            PromptEvent::Edited | PromptEvent::Ignored => None,
        })
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let panel = centered(area, PANEL_WIDTH, 4);
        let [field, hint] = Layout::vertical([Constraint::Length(3), Constraint::Length(1)])
            .areas(panel);
        self.prompt.render(frame, field, "insert", self.focused);
        frame.render_widget(
            Paragraph::new(Span::styled("Enter send  Esc back", theme::key_hint())),
            hint,
        );
    }

    fn handle_paste(&mut self, text: &str) {
        self.prompt.paste(text);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
