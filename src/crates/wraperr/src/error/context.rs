//! Annotation methods on `Result`
//!
//! `Ok` values pass through untouched, the `Result` counterpart of the
//! builders returning `None` for no error.

use super::{attach_message, wrap_at, BoxError, WithStack};
use crate::frame::Frame;

/// Trait for annotating the error of a `Result`
///
/// Captured frames hold file, line and column only. The enclosing function
/// path is recorded by [`frame!`](crate::frame!) and [`wrapf!`](crate::wrapf!)
/// alone.
///
/// # Example
///
/// ```rust
/// use wraperr::ResultExt;
///
/// fn read_config(path: &str) -> Result<String, wraperr::BoxError> {
///     let contents = std::fs::read_to_string(path)
///         .wrap_with(|| format!("Failed to read config file: {}", path))?;
///     Ok(contents)
/// }
///
/// let err = read_config("/definitely/not/here.toml").unwrap_err();
/// assert!(err.to_string().starts_with("Failed to read config file: /definitely/not/here.toml: "));
/// ```
pub trait ResultExt<T> {
    /// Add a context message and the call site
    fn wrap(self, message: impl Into<String>) -> Result<T, BoxError>;

    /// Add a lazily built context message and the call site
    ///
    /// The closure only runs when the result is an error.
    fn wrap_with<F, M>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    /// Add a context message without a frame
    fn with_message(self, message: impl Into<String>) -> Result<T, BoxError>;

    /// Add the call site without changing the message
    fn with_stack(self) -> Result<T, BoxError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn wrap(self, message: impl Into<String>) -> Result<T, BoxError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_at(err, message.into(), Frame::caller())),
        }
    }

    #[track_caller]
    fn wrap_with<F, M>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(wrap_at(err, f().into(), Frame::caller())),
        }
    }

    fn with_message(self, message: impl Into<String>) -> Result<T, BoxError> {
        self.map_err(|err| attach_message(err, message.into()))
    }

    #[track_caller]
    fn with_stack(self) -> Result<T, BoxError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Box::new(WithStack::new(err.into(), Frame::caller()))),
        }
    }
}
