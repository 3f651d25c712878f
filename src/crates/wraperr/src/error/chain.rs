//! Walking an error chain
//!
//! The "has an inner cause" capability is `std::error::Error::source`, so
//! these helpers work on any error, annotated by this crate or not.

use std::error::Error as StdError;

use super::{BoxError, WithStack};
use crate::frame::Frame;

/// Get the root cause of an optional error
///
/// Returns `None` for `None`. Otherwise follows `source()` until an error has
/// no further source and returns that error. An error without annotations is
/// its own cause.
///
/// ```rust
/// use wraperr::{cause, with_message};
///
/// let err = with_message(Some("EOF"), "whoops").unwrap();
/// assert_eq!(cause(Some(&err)).unwrap().to_string(), "EOF");
/// assert!(cause(None).is_none());
/// ```
pub fn cause<'a>(err: Option<&'a BoxError>) -> Option<&'a (dyn StdError + 'static)> {
    err.map(|err| root_cause(&**err))
}

/// Get the root cause of an error chain
///
/// Walks the error chain via `source()` until reaching the bottom.
pub fn root_cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// Iterate an error chain, outermost first
///
/// ```rust
/// use wraperr::{chain, wrap};
///
/// let err = wrap(Some("EOF"), "read error").unwrap();
/// let messages: Vec<String> = chain(&*err).map(|e| e.to_string()).collect();
/// assert_eq!(messages, ["read error: EOF", "read error: EOF", "EOF"]);
/// ```
pub fn chain<'a>(error: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain {
        next: Some(error),
    }
}

/// Iterator returned by [`chain`]
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Count the number of errors in an error chain
///
/// The result is at least 1.
pub fn chain_length(error: &(dyn StdError + 'static)) -> usize {
    chain(error).count()
}

/// Collect every captured frame in the chain, outermost first
pub fn frames(error: &(dyn StdError + 'static)) -> Vec<Frame> {
    chain(error)
        .filter_map(|e| e.downcast_ref::<WithStack>())
        .map(|e| *e.frame())
        .collect()
}
