//! Application state and logic for the character screen.
//!
//! - [`App`] - the screen instance: state, fetch controller, selection
//! - [`AppMessage`] - outcomes sent back from fetch tasks
//! - [`RefreshGesture`] - the pull-to-refresh spinner

mod fetch;
mod handlers;
mod messages;
mod navigation;
mod refresh;

pub use messages::AppMessage;
pub use refresh::{RefreshCompletion, RefreshGesture};

use std::sync::Arc;

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use tokio::sync::mpsc;

use crate::api::{CharactersClient, PageQuery};
use crate::config::AppConfig;
use crate::input::Keybindings;
use crate::state::{RequestToken, RequestTracker, ScreenData, ScreenState};

/// The character list screen.
///
/// Owns the screen data exclusively. Fetches run in spawned tasks and report
/// back through `message_tx`; only [`App::handle_message`] applies them.
pub struct App {
    /// Items, loading flag and error
    pub screen: ScreenData,
    /// Selection and scroll offset of the populated list
    pub list_state: ListState,
    /// Pull-to-refresh spinner
    pub refresh_gesture: RefreshGesture,
    /// Total reported by the API for the last successful load
    pub page_total: Option<u64>,
    /// When the last successful load was applied
    pub last_loaded_at: Option<DateTime<Local>>,
    pub keybindings: Keybindings,
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Animation tick counter (spinners)
    pub tick_count: u64,
    /// Rows the list moves on PageUp/PageDown, updated from the viewport
    pub page_rows: usize,
    /// Sender cloned into fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    client: Arc<CharactersClient>,
    query: PageQuery,
    requests: RequestTracker,
    refresh_completions: Vec<(RequestToken, RefreshCompletion)>,
    mounted: bool,
}

impl App {
    /// Create an unmounted screen that fetches through `client`.
    pub fn new(client: CharactersClient, query: PageQuery) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: ScreenData::new(),
            list_state: ListState::default(),
            refresh_gesture: RefreshGesture::new(),
            page_total: None,
            last_loaded_at: None,
            keybindings: Keybindings::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            page_rows: 10,
            message_tx,
            message_rx: Some(message_rx),
            client: Arc::new(client),
            query,
            requests: RequestTracker::new(),
            refresh_completions: Vec::new(),
            mounted: false,
        }
    }

    /// Create the production screen described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CharactersClient::from_config(config), config.query.clone())
    }

    /// Mount the screen and start its initial fetch.
    ///
    /// Mounting twice does not fetch twice.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::info!("Character screen mounted");
        self.load_characters();
    }

    /// Tear the screen down. Fetches still in flight are not aborted, but
    /// their outcomes are ignored from now on.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        tracing::info!(
            "Character screen unmounted (latest request {:?})",
            self.requests.latest()
        );
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current render mode.
    pub fn screen_state(&self) -> ScreenState<'_> {
        self.screen.state()
    }

    /// Token of the most recent fetch.
    pub fn latest_request(&self) -> Option<RequestToken> {
        self.requests.latest()
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations and retire finished refresh gestures.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.refresh_gesture.poll() {
            self.mark_dirty();
        }

        // Spinners animate while anything is pending
        if self.screen.is_loading() || self.refresh_gesture.is_active() {
            self.mark_dirty();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::mock::MockHttpClient;

    pub const BASE_URL: &str = "https://api.test";

    pub fn app_with(mock: &MockHttpClient) -> App {
        let client = CharactersClient::new(Arc::new(mock.clone()), BASE_URL);
        App::new(client, PageQuery::default())
    }

    /// Receive the next outcome and apply it.
    pub async fn settle_one(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
        let msg = rx.recv().await.expect("fetch task reports an outcome");
        app.handle_message(msg);
    }

    pub fn fry_json() -> &'static str {
        r#"{"items":[{"id":1,"name":"Fry","gender":"Male","status":"Alive","species":"Human","image":"http://x/1.png"}],"total":1}"#
    }
}
