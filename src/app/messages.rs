//! AppMessage enum for async communication within the application.

use crate::error::FetchResult;
use crate::models::CharacterPage;
use crate::state::RequestToken;

/// Messages sent from background tasks back to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A characters fetch settled, successfully or not
    CharactersLoaded {
        token: RequestToken,
        result: FetchResult<CharacterPage>,
    },
}
