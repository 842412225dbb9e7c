//! Pull-to-refresh gesture.
//!
//! The gesture owns its own spinner, independent of the Loading state. It
//! hands a [`RefreshCompletion`] to the fetch controller and stays active
//! until every completion it handed out has fired (or been dropped).

use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Signal fired by the controller when a refresh's fetch settles.
pub type RefreshCompletion = oneshot::Sender<()>;

#[derive(Debug, Default)]
pub struct RefreshGesture {
    pending: Vec<oneshot::Receiver<()>>,
}

impl RefreshGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a gesture and return the completion to pass to the controller.
    pub fn begin(&mut self) -> RefreshCompletion {
        let (tx, rx) = oneshot::channel();
        self.pending.push(rx);
        tx
    }

    /// Drop every gesture whose completion has fired.
    ///
    /// Returns true if the active state changed.
    pub fn poll(&mut self) -> bool {
        let was_active = self.is_active();
        self.pending
            .retain_mut(|rx| matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        was_active != self.is_active()
    }

    /// Whether the gesture spinner is showing.
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
