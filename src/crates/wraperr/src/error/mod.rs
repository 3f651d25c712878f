//! Error annotations
//!
//! Two annotation types wrap an inner error:
//!
//! - [`WithStack`] records the call site and leaves the message untouched
//! - [`WithMessage`] prefixes the message with `"<text>: "`
//!
//! Builders take `Option<E>` and return `Option<BoxError>`. `None` always
//! yields `None`, so no wrapper is ever built around "no error". At `?` sites
//! the [`ResultExt`] methods do the same for `Result`.
//!
//! # Example
//!
//! ```rust
//! use wraperr::{cause, wrap};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("EOF")]
//! struct Eof;
//!
//! let step1 = wrap(Some(Eof), "read error");
//! let step2 = wrap(step1, "client error").unwrap();
//!
//! assert_eq!(step2.to_string(), "client error: read error: EOF");
//! assert!(cause(Some(&step2)).unwrap().is::<Eof>());
//! ```

mod chain;
mod context;

pub use chain::{cause, chain, chain_length, frames, root_cause, Chain};
pub use context::ResultExt;

use std::error::Error as StdError;
use std::fmt;

use crate::config::RenderOptions;
use crate::frame::Frame;
use crate::render::{self, FormatError, Printer};

/// Owned, thread-safe error value accepted and produced by every builder
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error annotated with the location it was wrapped at
pub struct WithStack {
    inner: BoxError,
    frame: Frame,
}

impl WithStack {
    pub(crate) fn new(inner: BoxError, frame: Frame) -> Self {
        Self { inner, frame }
    }

    /// Captured call site
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The wrapped error
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for WithStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self, &RenderOptions::default()))
    }
}

impl StdError for WithStack {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.inner)
    }
}

impl FormatError for WithStack {
    fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn StdError + 'static)> {
        p.print(format_args!("{}", self.inner));
        self.frame.format(p);
        Some(&*self.inner)
    }
}

/// An error annotated with a context message
pub struct WithMessage {
    inner: BoxError,
    message: String,
}

impl WithMessage {
    pub(crate) fn new(inner: BoxError, message: String) -> Self {
        Self { inner, message }
    }

    /// The context text, without the inner message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl fmt::Display for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.inner)
    }
}

impl fmt::Debug for WithMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self, &RenderOptions::default()))
    }
}

impl StdError for WithMessage {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.inner)
    }
}

impl FormatError for WithMessage {
    fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn StdError + 'static)> {
        p.print(format_args!("{}", self.message));
        Some(&*self.inner)
    }
}

/// Annotate `err` with the location `with_stack` was called from
///
/// Returns `None` if `err` is `None`. The message is unchanged.
///
/// The frame holds file, line and column only. Use
/// [`frame!`](crate::frame!) when the function path is wanted too.
#[track_caller]
pub fn with_stack<E>(err: Option<E>) -> Option<BoxError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(Box::new(WithStack::new(err.into(), Frame::caller())))
}

/// Annotate `err` with `message` and the location `wrap` was called from
///
/// Returns `None` if `err` is `None`. The frame holds file, line and column
/// only; [`wrapf!`](crate::wrapf!) also records the enclosing function path.
///
/// ```rust
/// use wraperr::wrap;
///
/// let err = wrap(Some("EOF"), "read error").unwrap();
/// assert_eq!(err.to_string(), "read error: EOF");
/// assert!(wrap(None::<&str>, "no error").is_none());
/// ```
#[track_caller]
pub fn wrap<E>(err: Option<E>, message: impl Into<String>) -> Option<BoxError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(wrap_at(err, message.into(), Frame::caller()))
}

/// Annotate `err` with `message` only
///
/// Returns `None` if `err` is `None`.
pub fn with_message<E>(err: Option<E>, message: impl Into<String>) -> Option<BoxError>
where
    E: Into<BoxError>,
{
    let err = err?;
    Some(attach_message(err, message.into()))
}

/// Build `WithStack(WithMessage(err))` with an already captured frame
#[doc(hidden)]
pub fn wrap_at<E>(err: E, message: String, frame: Frame) -> BoxError
where
    E: Into<BoxError>,
{
    let inner: BoxError = Box::new(WithMessage::new(err.into(), message));
    Box::new(WithStack::new(inner, frame))
}

#[doc(hidden)]
pub fn attach_message<E>(err: E, message: String) -> BoxError
where
    E: Into<BoxError>,
{
    Box::new(WithMessage::new(err.into(), message))
}
