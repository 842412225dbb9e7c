//! Fetch controller: the one asynchronous operation of the screen.

use std::sync::Arc;

use super::{App, AppMessage, RefreshCompletion};
use crate::error::FetchError;
use crate::state::{RequestToken, ScreenUpdate};

impl App {
    /// Start loading the first page of characters.
    ///
    /// Marks the screen as loading right away, then fetches in a spawned
    /// task. The task always reports exactly one outcome, so the loading
    /// flag cannot get stuck. Returns the token of this fetch; only the
    /// outcome of the latest token is applied.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load_characters(&mut self) -> RequestToken {
        let token = self.requests.next();
        self.screen.apply(ScreenUpdate::FetchStarted);
        self.mark_dirty();
        tracing::info!("Loading characters (request {})", token);

        let client = Arc::clone(&self.client);
        let query = self.query.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { client.fetch_characters(&query).await });
            let result = match fetch.await {
                Ok(result) => result,
                Err(join_err) => Err(FetchError::Aborted(join_err.to_string())),
            };
            if tx.send(AppMessage::CharactersLoaded { token, result }).is_err() {
                tracing::debug!("Screen gone, dropping outcome of request {}", token);
            }
        });

        token
    }

    /// Reload in response to the pull-to-refresh gesture.
    ///
    /// `completion` fires once this refresh's own fetch settles, even if a
    /// newer fetch has superseded it.
    pub fn refresh(&mut self, completion: RefreshCompletion) -> RequestToken {
        let token = self.load_characters();
        tracing::debug!("Refresh gesture waiting on request {}", token);
        self.refresh_completions.push((token, completion));
        token
    }

    /// Start a refresh gesture: show its spinner and reload.
    pub fn begin_refresh(&mut self) -> RequestToken {
        let completion = self.refresh_gesture.begin();
        self.refresh(completion)
    }

    /// Fire the refresh completions waiting on `token`.
    pub(super) fn complete_refreshes(&mut self, token: RequestToken) {
        let (done, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.refresh_completions)
            .into_iter()
            .partition(|(t, _)| *t == token);
        self.refresh_completions = waiting;

        for (_, completion) in done {
            // The gesture may already be gone
            let _ = completion.send(());
        }
    }
}
