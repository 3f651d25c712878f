//! Verbose rendering of annotated errors
//!
//! Concise output is simply `Display`. Verbose output walks the chain from the
//! outermost error inwards: each annotation writes its own part (message text
//! or frame location) into a shared [`Printer`] and hands back the next error,
//! and the first error that cannot contribute is printed as the leaf.
//!
//! ```text
//! client error: read error: EOF
//!     app::client
//!         src/client.rs:20:13
//!   - client error
//!   - read error: EOF
//!     src/read.rs:9:5
//!   - read error
//!   - EOF
//! ```

mod printer;

pub use printer::{FormatError, Formatted, Printer};
pub(crate) use printer::StringPrinter;

use std::error::Error as StdError;
use std::fmt;

use crate::config::RenderOptions;
use crate::error::{WithMessage, WithStack};

const SEPARATOR: &str = "\n  - ";

/// Look up the verbose-render capability of an error
fn as_format_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn FormatError> {
    if let Some(e) = err.downcast_ref::<WithStack>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<WithMessage>() {
        return Some(e);
    }
    if let Some(e) = err.downcast_ref::<Formatted>() {
        return Some(e);
    }
    None
}

/// Render an error chain in verbose form
///
/// # Example
///
/// ```rust
/// use wraperr::{render, with_message, RenderOptions};
///
/// let err = with_message(Some("EOF"), "read error").unwrap();
/// assert_eq!(render(&*err, &RenderOptions::default()), "read error\n  - EOF");
/// ```
pub fn render(err: &(dyn StdError + 'static), options: &RenderOptions) -> String {
    let mut p = StringPrinter::new(options.frames);
    let mut current = Some(err);
    let mut depth = 0;

    while let Some(e) = current {
        if depth > 0 {
            p.print(format_args!("{}", SEPARATOR));
        }
        if options.max_depth.is_some_and(|max| depth >= max) {
            p.print(format_args!("..."));
            break;
        }

        current = match as_format_error(e) {
            Some(f) => f.format_error(&mut p),
            None => {
                p.print(format_args!("{}", e));
                None
            }
        };
        depth += 1;
    }

    p.into_string()
}

/// `Display` adapter producing the verbose rendering with default options
///
/// ```rust
/// use wraperr::{wrap, Verbose};
///
/// let err = wrap(Some("EOF"), "read error").unwrap();
/// let text = Verbose(&*err).to_string();
/// assert!(text.starts_with("read error: EOF\n    "));
/// assert!(text.ends_with("\n  - read error\n  - EOF"));
/// ```
pub struct Verbose<'a>(pub &'a (dyn StdError + 'static));

impl fmt::Display for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0, &RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{with_message, with_stack, wrap, BoxError};
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("EOF")]
    struct Eof;

    fn outer_frame(err: &BoxError) -> crate::Frame {
        *err.downcast_ref::<WithStack>().unwrap().frame()
    }

    #[test]
    fn test_leaf_only() {
        assert_eq!(render(&Eof, &RenderOptions::default()), "EOF");
    }

    #[test]
    fn test_message_chain() {
        let err = with_message(with_message(Some(Eof), "read error"), "client error").unwrap();
        assert_eq!(
            render(&*err, &RenderOptions::default()),
            "client error\n  - read error\n  - EOF"
        );
    }

    #[test]
    fn test_stack_prints_inner_then_frame() {
        let err = with_stack(Some(Eof)).unwrap();
        let frame = outer_frame(&err);
        assert_eq!(
            render(&*err, &RenderOptions::default()),
            format!("EOF\n    {}\n  - EOF", frame)
        );
    }

    #[test]
    fn test_wrap_interleaves_messages_and_frames() {
        let err = wrap(Some(Eof), "read error").unwrap();
        let frame = outer_frame(&err);
        assert_eq!(
            render(&*err, &RenderOptions::default()),
            format!("read error: EOF\n    {}\n  - read error\n  - EOF", frame)
        );
    }

    #[test]
    fn test_wrapf_prints_function() {
        let err = crate::wrapf!(Some(Eof), "read {}", "error").unwrap();
        let frame = outer_frame(&err);
        let text = render(&*err, &RenderOptions::default());
        let function = frame.function().unwrap();
        assert!(function.ends_with("test_wrapf_prints_function"));
        assert!(text.starts_with(&format!("read error: EOF\n    {}\n        {}", function, frame)));
    }

    #[test]
    fn test_frames_disabled() {
        let err = wrap(wrap(Some(Eof), "read error"), "client error").unwrap();
        let options = RenderOptions {
            frames: false,
            ..Default::default()
        };
        assert_eq!(
            render(&*err, &options),
            "client error: read error: EOF\n  - client error\n  - read error: EOF\n  - read error\n  - EOF"
        );
    }

    #[test]
    fn test_max_depth_truncates() {
        let err = wrap(Some(Eof), "read error").unwrap();
        let options = RenderOptions {
            frames: false,
            max_depth: Some(2),
        };
        assert_eq!(
            render(&*err, &options),
            "read error: EOF\n  - read error\n  - ..."
        );
    }

    #[test]
    fn test_max_depth_exact_fit() {
        let err = with_message(Some(Eof), "read error").unwrap();
        let options = RenderOptions {
            frames: true,
            max_depth: Some(2),
        };
        assert_eq!(render(&*err, &options), "read error\n  - EOF");
    }

    #[test]
    fn test_verbose_adapter() {
        let err = with_message(Some(Eof), "read error").unwrap();
        assert_eq!(Verbose(&*err).to_string(), "read error\n  - EOF");
    }

    #[derive(Debug)]
    struct Custom {
        inner: BoxError,
    }

    impl fmt::Display for Custom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "custom: {}", self.inner)
        }
    }

    impl StdError for Custom {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&*self.inner)
        }
    }

    impl FormatError for Custom {
        fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn StdError + 'static)> {
            p.print(format_args!("custom"));
            Some(&*self.inner)
        }
    }

    #[test]
    fn test_formatted_user_error_contributes() {
        let custom = Custom {
            inner: Box::new(Eof),
        };
        let err = with_message(Some(Formatted::new(custom)), "ctx").unwrap();
        assert_eq!(err.to_string(), "ctx: custom: EOF");
        assert_eq!(
            render(&*err, &RenderOptions::default()),
            "ctx\n  - custom\n  - EOF"
        );
        assert!(crate::root_cause(&*err).is::<Eof>());
    }

    #[test]
    fn test_bare_user_error_is_leaf() {
        let custom = Custom {
            inner: Box::new(Eof),
        };
        let err = with_message(Some(custom), "ctx").unwrap();
        assert_eq!(render(&*err, &RenderOptions::default()), "ctx\n  - custom: EOF");
    }

    #[test]
    fn test_debug_is_verbose() {
        let err = WithMessage::new(Box::new(Eof), "read error".to_string());
        assert_eq!(format!("{:?}", err), "read error\n  - EOF");
    }
}
