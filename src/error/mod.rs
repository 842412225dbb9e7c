//! Error handling for the character screen.
//!
//! Every failure of a characters fetch is a [`FetchError`]. The variants keep
//! the detail for logs, but the user only ever sees one fixed message:
//!
//! | Variant | Code | Shown to the user |
//! |---------|------|-------------------|
//! | Network | E_FETCH_NET | [`FETCH_FAILED_MESSAGE`] |
//! | Timeout | E_FETCH_TIMEOUT | [`FETCH_FAILED_MESSAGE`] |
//! | HttpStatus | E_FETCH_HTTP | [`FETCH_FAILED_MESSAGE`] |
//! | InvalidPayload | E_FETCH_PAYLOAD | [`FETCH_FAILED_MESSAGE`] |
//! | Aborted | E_FETCH_ABORTED | [`FETCH_FAILED_MESSAGE`] |

mod fetch;

pub use fetch::{FetchError, FetchResult, FETCH_FAILED_MESSAGE};
