//! List navigation and input dispatch.

use crossterm::event::{KeyEvent, MouseEvent};

use super::App;
use crate::input::{scroll_from_mouse, Command, Scroll};

impl App {
    /// Handle a key press. Unbound keys are ignored.
    pub fn handle_key(&mut self, key: &KeyEvent) {
        if let Some(command) = self.keybindings.lookup(key) {
            self.handle_command(command);
        }
    }

    /// Handle a mouse event. Scrolling up at the top of the screen is the
    /// pull-to-refresh gesture; it does not fire again until the pending
    /// gesture completes.
    pub fn handle_mouse(&mut self, event: &MouseEvent) {
        match scroll_from_mouse(event) {
            Some(Scroll::Up) if self.is_at_top() => {
                if self.refresh_gesture.is_active() {
                    return;
                }
                tracing::debug!("Pull-to-refresh gesture");
                self.begin_refresh();
            }
            Some(Scroll::Up) => self.select_by(-1),
            Some(Scroll::Down) => self.select_by(1),
            None => {}
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.quit(),
            Command::Refresh => {
                self.begin_refresh();
            }
            Command::SelectNext => self.select_by(1),
            Command::SelectPrevious => self.select_by(-1),
            Command::PageDown => self.select_by(self.page_rows.max(1) as isize),
            Command::PageUp => self.select_by(-(self.page_rows.max(1) as isize)),
            Command::SelectFirst => self.select_index(0),
            Command::SelectLast => self.select_index(usize::MAX),
        }
    }

    /// Whether the view is scrolled to its top, where a pull starts.
    pub fn is_at_top(&self) -> bool {
        self.list_state.offset() == 0 && self.list_state.selected().unwrap_or(0) == 0
    }

    /// Move the selection by `delta` rows, clamped to the list.
    pub fn select_by(&mut self, delta: isize) {
        let current = self.list_state.selected().unwrap_or(0);
        self.select_index(current.saturating_add_signed(delta));
    }

    fn select_index(&mut self, index: usize) {
        let len = self.screen.items().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let index = index.min(len - 1);
        if self.list_state.selected() != Some(index) {
            self.list_state.select(Some(index));
            self.mark_dirty();
        }
    }

    /// Keep the selection valid after the list is replaced.
    pub(super) fn clamp_selection(&mut self) {
        let len = self.screen.items().len();
        match (len, self.list_state.selected()) {
            (0, _) => {
                self.list_state.select(None);
                *self.list_state.offset_mut() = 0;
            }
            (_, None) => self.list_state.select(Some(0)),
            (len, Some(selected)) if selected >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::Character;
    use crate::state::ScreenUpdate;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

    fn populated(n: usize) -> App {
        let mut app = app_with(&MockHttpClient::new());
        let items = (0..n)
            .map(|i| Character {
                id: i as i64,
                name: format!("Character {}", i),
                gender: "Male".into(),
                status: "Alive".into(),
                species: "Robot".into(),
                image: String::new(),
            })
            .collect();
        app.screen.apply(ScreenUpdate::FetchSucceeded(items));
        app.clamp_selection();
        app
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_selection_clamped_to_list() {
        let mut app = populated(3);
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_command(Command::SelectPrevious);
        assert_eq!(app.list_state.selected(), Some(0));

        app.handle_command(Command::SelectLast);
        assert_eq!(app.list_state.selected(), Some(2));

        app.handle_command(Command::SelectNext);
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn test_page_moves_by_page_rows() {
        let mut app = populated(50);
        app.page_rows = 7;

        app.handle_command(Command::PageDown);
        assert_eq!(app.list_state.selected(), Some(7));

        app.handle_command(Command::PageUp);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_shorter_list() {
        let mut app = populated(10);
        app.handle_command(Command::SelectLast);

        app.screen.apply(ScreenUpdate::FetchSucceeded(Vec::new()));
        app.clamp_selection();
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut app = populated(0);
        app.handle_command(Command::SelectNext);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_quit_key() {
        let mut app = populated(1);
        app.handle_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_down_moves_selection() {
        let mut app = populated(5);
        app.handle_mouse(&scroll(MouseEventKind::ScrollDown));
        assert_eq!(app.list_state.selected(), Some(1));
        assert!(!app.is_at_top());

        app.handle_mouse(&scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.latest_request().is_none(), "moving up is not a pull");
    }

    #[tokio::test]
    async fn test_scroll_up_at_top_pulls_to_refresh() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(fry_json()));
        let mut app = app_with(&mock);
        let mut rx = app.message_rx.take().unwrap();

        app.handle_mouse(&scroll(MouseEventKind::ScrollUp));

        assert!(app.latest_request().is_some());
        assert!(app.refresh_gesture.is_active());
        assert!(app.screen.is_loading());

        settle_one(&mut app, &mut rx).await;
        app.tick();
        assert!(!app.refresh_gesture.is_active());
    }

    #[tokio::test]
    async fn test_wheel_burst_pulls_once_until_complete() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(fry_json()));
        let mut app = app_with(&mock);
        let mut rx = app.message_rx.take().unwrap();

        for _ in 0..10 {
            app.handle_mouse(&scroll(MouseEventKind::ScrollUp));
        }
        assert_eq!(app.latest_request().map(|t| t.value()), Some(1));
        assert_eq!(app.refresh_gesture.pending(), 1);

        settle_one(&mut app, &mut rx).await;
        app.tick();
        assert!(!app.refresh_gesture.is_active());

        app.handle_mouse(&scroll(MouseEventKind::ScrollUp));
        assert_eq!(app.latest_request().map(|t| t.value()), Some(2));
        settle_one(&mut app, &mut rx).await;
        assert_eq!(mock.get_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_key_starts_gesture() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(fry_json()));
        let mut app = app_with(&mock);

        app.handle_key(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));

        assert!(app.refresh_gesture.is_active());
        assert_eq!(app.latest_request().map(|t| t.value()), Some(1));
    }
}
