//! View components and the shared centered-panel layout.

pub mod apps;
pub mod insert;
pub mod remote;

use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::component::Component;
use crate::theme;
use crate::view::ViewId;

/// Width of every panel, in columns.
pub const PANEL_WIDTH: u16 = 44;

/// Build one component per view.
pub fn create_views() -> HashMap<ViewId, Box<dyn Component>> {
    let mut views: HashMap<ViewId, Box<dyn Component>> = HashMap::new();
    views.insert(ViewId::Remote, Box::new(remote::RemoteView::default()));
    views.insert(ViewId::Insert, Box::new(insert::InsertView::default()));
    views.insert(ViewId::Apps, Box::new(apps::AppsView::default()));
    views
}

/// Rect of `width` x `height` centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Draw a titled, rounded panel and return its inner area.
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, focused: bool) -> Rect {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DARK)),
        area,
    );

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
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
