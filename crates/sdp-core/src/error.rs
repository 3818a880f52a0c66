use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur on the fallible parts of the crate surface.
///
/// [`parse_sdp`](crate::parse_sdp) never returns one of these: incomplete
/// media sections are dropped from the result, not reported as failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Direction token outside the four recognized values
    #[error("Invalid media direction: {0}")]
    InvalidDirection(String),
}
