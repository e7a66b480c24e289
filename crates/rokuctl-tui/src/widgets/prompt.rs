//! Single-line text prompt backed by `tui_input::Input`.
//!
//! Keys are translated to `InputRequest`s by hand so the widget does not
//! depend on tui-input's own crossterm version.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_input::{Input, InputRequest};

use crate::theme;

/// Outcome of a key event in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Enter: the trimmed value. The prompt is cleared.
    Submit(String),
    /// Esc: the prompt is cleared.
    Cancel,
    Edited,
    Ignored,
}

#[derive(Debug, Default)]
pub struct Prompt {
    input: Input,
}

impl Prompt {
    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    /// Insert pasted text at the cursor. The field is one line, so line
    /// breaks and tabs become spaces.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            let c = if c.is_control() { ' ' } else { c };
            self.input.handle(InputRequest::InsertChar(c));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptEvent {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let request = match key.code {
            KeyCode::Enter => {
                let value = self.input.value().trim().to_owned();
                self.clear();
                return PromptEvent::Submit(value);
            }
            KeyCode::Esc => {
                self.clear();
                return PromptEvent::Cancel;
            }
            KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
            KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
            KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
            KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
            KeyCode::Char(c) if !ctrl => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return PromptEvent::Ignored,
        };
        self.input.handle(request);
        PromptEvent::Edited
    }

    /// Draw a bordered one-line field and place the terminal cursor in it.
    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border = if focused {
            theme::border_focused()
        } else {
            theme::border_default()
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title.to_owned(), theme::title_style()),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = usize::from(inner.width.max(1));
        let scroll = self.input.visual_scroll(width.saturating_sub(1));
        let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(Span::styled(self.input.value(), theme::input_text()))
                .scroll((0, offset)),
            inner,
        );

        if focused {
            let cursor = self.input.visual_cursor().saturating_sub(scroll);
            let x = inner
                .x
                .saturating_add(u16::try_from(cursor).unwrap_or(u16::MAX))
                .min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
