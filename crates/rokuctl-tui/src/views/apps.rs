//! The apps view: type part of a channel name, Enter launches the first match.
//!
//! The installed list is fetched when the view opens and filtered as you
//! type with the same first-match rule the launch uses, so the highlighted
//! row is the one Enter will start.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use rokuctl_api::App as DeviceApp;
use rokuctl_api::apps::find_by_name_match;

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::view::ViewId;
use crate::views::{PANEL_WIDTH, centered, render_panel};
use crate::widgets::prompt::{Prompt, PromptEvent};

/// Installed apps listed under the prompt.
const LIST_ROWS: u16 = 8;

#[derive(Debug, Default)]
pub struct AppsView {
    prompt: Prompt,
    focused: bool,
    apps: Vec<DeviceApp>,
}

impl AppsView {
    /// Apps whose names contain the current query, in device order.
    fn visible(&self) -> Vec<&DeviceApp> {
        let query = self.prompt.value().trim().to_lowercase();
        self.apps
            .iter()
            .filter(|app| app.name.to_lowercase().contains(&query))
            .collect()
    }

    /// The app Enter would launch right now.
    fn launch_target(&self) -> Option<&DeviceApp> {
        let query = self.prompt.value().trim();
        if query.is_empty() {
            return None;
        }
        find_by_name_match(&self.apps, query)
    }

    fn list_lines(&self) -> Vec<Line<'_>> {
        if self.apps.is_empty() {
            return vec![Line::from(Span::styled("(no app list)", theme::muted()))];
        }
        let target = self.launch_target().map(|app| app.id.as_str());
        self.visible()
            .into_iter()
            .take(usize::from(LIST_ROWS))
            .map(|app| {
                let style = if Some(app.id.as_str()) == target {
                    theme::match_highlight()
                } else {
                    theme::hint_desc()
                };
                Line::from(vec![
                    Span::styled(app.name.as_str(), style),
                    Span::styled(format!("  {}", app.id), theme::muted()),
                ])
            })
            .collect()
    }
}

impl Component for AppsView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match self.prompt.handle_key(key) {
            PromptEvent::Submit(query) if !query.is_empty() => Some(Action::LaunchApp(query)),
            PromptEvent::Submit(_) | PromptEvent::Cancel => {
                Some(Action::SwitchView(ViewId::Remote))
            }
            PromptEvent::Edited | PromptEvent::Ignored => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::AppsLoaded(apps) = action {
            self.apps.clone_from(apps);
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let panel = centered(area, PANEL_WIDTH, 3 + LIST_ROWS + 2 + 1);
        let [field, list, hint] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(LIST_ROWS + 2),
            Constraint::Length(1),
        ])
        .areas(panel);

        self.prompt.render(frame, field, "apps", self.focused);
        let inner = render_panel(frame, list, "installed", false);
        frame.render_widget(Paragraph::new(self.list_lines()), inner);
        frame.render_widget(
            Paragraph::new(Span::styled("Enter launch  Esc back", theme::key_hint())),
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

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(id: &str, name: &str) -> DeviceApp {
        DeviceApp {
            id: id.into(),
            name: name.into(),
            ..DeviceApp::default()
        }
    }

    fn loaded() -> AppsView {
        let mut view = AppsView::default();
        view.update(&Action::AppsLoaded(vec![
            app("12", "Netflix"),
            app("13", "Amazon Prime Video"),
            app("837", "YouTube"),
            app("2285", "Hulu"),
        ]))
        .unwrap();
        view
    }

    fn type_str(view: &mut AppsView, text: &str) {
        for c in text.chars() {
            view.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn filter_and_target_follow_first_match() {
        let mut view = loaded();
        type_str(&mut view, "U");

        let names: Vec<&str> = view.visible().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["YouTube", "Hulu"]);
        assert_eq!(view.launch_target().map(|a| a.id.as_str()), Some("837"));
    }

    #[test]
    fn empty_query_has_no_target() {
        let view = loaded();
        assert_eq!(view.visible().len(), 4);
        assert!(view.launch_target().is_none());
    }

    #[test]
    fn enter_launches_query() {
        let mut view = loaded();
        type_str(&mut view, "prime");
        assert_eq!(
            view.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::LaunchApp("prime".into()))
        );
    }

    #[test]
    fn pasted_query_filters_like_typed_one() {
        let mut view = loaded();
        view.handle_paste("netf");
        assert_eq!(view.launch_target().map(|a| a.id.as_str()), Some("12"));
    }

    #[test]
    fn escape_returns_to_remote() {
        let mut view = loaded();
        type_str(&mut view, "hu");
        assert_eq!(
            view.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::SwitchView(ViewId::Remote))
        );
    }
}
