//! Message handling for the App.

use chrono::Local;

use super::{App, AppMessage};
use crate::state::ScreenUpdate;

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::CharactersLoaded { token, result } => {
                self.complete_refreshes(token);

                if !self.is_mounted() {
                    tracing::debug!("Ignoring request {}: screen unmounted", token);
                    return;
                }
                if !self.requests.is_latest(token) {
                    tracing::debug!(
                        "Discarding stale request {} (latest {:?})",
                        token,
                        self.requests.latest()
                    );
                    return;
                }

                match result {
                    Ok(page) => {
                        tracing::info!(
                            "Request {} loaded {} characters",
                            token,
                            page.items.len()
                        );
                        self.page_total = page.total;
                        self.last_loaded_at = Some(Local::now());
                        self.screen.apply(ScreenUpdate::FetchSucceeded(page.items));
                    }
                    Err(err) => {
                        tracing::warn!("Request {} failed [{}]: {}", token, err.error_code(), err);
                        self.page_total = None;
                        self.last_loaded_at = None;
                        self.screen
                            .apply(ScreenUpdate::FetchFailed(err.user_message().to_string()));
                    }
                }
                self.clamp_selection();
                self.mark_dirty();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::error::{FetchError, FETCH_FAILED_MESSAGE};
    use crate::models::{Character, CharacterPage};
    use crate::state::ScreenState;

    fn page(names: &[&str]) -> CharacterPage {
        CharacterPage::from_items(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Character {
                    id: i as i64 + 1,
                    name: name.to_string(),
                    gender: "Female".to_string(),
                    status: "Alive".to_string(),
                    species: "Mutant".to_string(),
                    image: String::new(),
                })
                .collect(),
        )
    }

    /// An app that is mounted without running the mount fetch.
    fn mounted_app() -> App {
        let mut app = app_with(&MockHttpClient::new());
        app.mounted = true;
        app
    }

    #[tokio::test]
    async fn test_latest_outcome_applied_regardless_of_arrival_order() {
        let mut app = mounted_app();
        let old = app.requests.next();
        let new = app.requests.next();
        app.screen.apply(ScreenUpdate::FetchStarted);

        app.handle_message(AppMessage::CharactersLoaded {
            token: new,
            result: Ok(page(&["Leela"])),
        });
        app.handle_message(AppMessage::CharactersLoaded {
            token: old,
            result: Err(FetchError::Network("late".into())),
        });

        assert!(matches!(
            app.screen_state(),
            ScreenState::Populated(items) if items[0].name == "Leela"
        ));
    }

    #[tokio::test]
    async fn test_stale_success_does_not_replace_items() {
        let mut app = mounted_app();
        let old = app.requests.next();
        let new = app.requests.next();

        app.handle_message(AppMessage::CharactersLoaded {
            token: old,
            result: Ok(page(&["Zoidberg"])),
        });
        assert!(app.screen.items().is_empty());

        app.handle_message(AppMessage::CharactersLoaded {
            token: new,
            result: Ok(page(&["Amy", "Hermes"])),
        });
        assert_eq!(app.screen.items().len(), 2);
    }

    #[tokio::test]
    async fn test_unmounted_outcome_ignored() {
        let mut app = mounted_app();
        let token = app.requests.next();
        app.screen.apply(ScreenUpdate::FetchStarted);
        app.unmount();

        app.handle_message(AppMessage::CharactersLoaded {
            token,
            result: Ok(page(&["Fry"])),
        });

        assert!(app.screen.items().is_empty());
        assert!(app.screen.is_loading());
    }

    #[tokio::test]
    async fn test_failure_sets_fixed_message_and_clears_total() {
        let mut app = mounted_app();
        app.page_total = Some(87);
        let token = app.requests.next();

        app.handle_message(AppMessage::CharactersLoaded {
            token,
            result: Err(FetchError::HttpStatus {
                status: 500,
                message: "stack trace".into(),
            }),
        });

        assert_eq!(app.screen.error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(app.page_total, None);
    }

    #[tokio::test]
    async fn test_failure_clears_last_loaded_time() {
        let mut app = mounted_app();
        let ok = app.requests.next();
        app.handle_message(AppMessage::CharactersLoaded {
            token: ok,
            result: Ok(page(&["Fry"])),
        });
        assert!(app.last_loaded_at.is_some());

        let failed = app.requests.next();
        app.handle_message(AppMessage::CharactersLoaded {
            token: failed,
            result: Err(FetchError::Timeout("15s".into())),
        });

        assert_eq!(app.last_loaded_at, None);
        assert_eq!(
            crate::ui::meta_line(0, app.page_total, app.last_loaded_at),
            None
        );
    }

    #[tokio::test]
    async fn test_outcome_marks_dirty() {
        let mut app = mounted_app();
        let token = app.requests.next();
        app.needs_redraw = false;

        app.handle_message(AppMessage::CharactersLoaded {
            token,
            result: Ok(page(&[])),
        });

        assert!(app.needs_redraw);
        assert_eq!(app.screen_state(), ScreenState::Empty);
    }
}
