//! Test data for the media-client crates.
//!
//! Exporting each const allows all the test data to have a single source of
//! truth. When running `cargo publish` no external folders are allowed so all
//! the test data needs to be contained within this crate.

pub mod api_responses;
pub mod media;

pub use api_responses::{
    CONTACTS, CREATED, INVALID_CREDENTIALS, LOGIN, LOGIN_LEGACY, NOT_FOUND, OPENVERSE_REGISTRATION,
    OPENVERSE_TOKEN, REGISTER, SEARCH_HISTORY, USER_ALREADY_EXISTS,
};
pub use media::{AUDIO_SEARCH, IMAGE_DETAIL, IMAGE_SEARCH, RATE_LIMIT, SEARCH_ERROR};
