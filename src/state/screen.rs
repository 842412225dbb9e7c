//! Screen data and the derived render state.

use crate::models::Character;

/// One atomic change to [`ScreenData`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenUpdate {
    /// A fetch began: loading on, error cleared, items untouched
    FetchStarted,
    /// A fetch succeeded: items replaced, loading off
    FetchSucceeded(Vec<Character>),
    /// A fetch failed: items cleared, error set, loading off
    FetchFailed(String),
}

/// The items, loading flag and error of the screen.
///
/// Fields are private; [`ScreenData::apply`] is the only way to change them,
/// so a render never sees a half-applied outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenData {
    items: Vec<Character>,
    is_loading: bool,
    error: Option<String>,
}

impl ScreenData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Character] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply one update.
    pub fn apply(&mut self, update: ScreenUpdate) {
        match update {
            ScreenUpdate::FetchStarted => {
                self.is_loading = true;
                self.error = None;
            }
            ScreenUpdate::FetchSucceeded(items) => {
                self.items = items;
                self.error = None;
                self.is_loading = false;
            }
            ScreenUpdate::FetchFailed(message) => {
                self.items = Vec::new();
                self.error = Some(message);
                self.is_loading = false;
            }
        }
    }

    /// Derive the render mode. Loading > Error > Empty > Populated.
    pub fn state(&self) -> ScreenState<'_> {
        ScreenState::derive(self.is_loading, self.error.as_deref(), &self.items)
    }
}

/// The four mutually exclusive render modes of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenState<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [Character]),
}

impl<'a> ScreenState<'a> {
    /// Derive the mode from the raw state variables.
    ///
    /// An empty error string counts as no error.
    pub fn derive(is_loading: bool, error: Option<&'a str>, items: &'a [Character]) -> Self {
        if is_loading {
            return ScreenState::Loading;
        }
        match error {
            Some(message) if !message.is_empty() => ScreenState::Error(message),
            _ if items.is_empty() => ScreenState::Empty,
            _ => ScreenState::Populated(items),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenState::Loading => "loading",
            ScreenState::Error(_) => "error",
            ScreenState::Empty => "empty",
            ScreenState::Populated(_) => "populated",
        }
    }
}
