//! Printer abstraction used by verbose rendering

use std::error::Error as StdError;
use std::fmt::{self, Write};

/// Sink for the pieces of a verbose rendering
pub trait Printer {
    /// Write formatted output
    fn print(&mut self, args: fmt::Arguments<'_>);

    /// Whether detail (frames) should be written
    fn detail(&self) -> bool;
}

/// Errors that know how to contribute to a verbose rendering
///
/// An implementation writes its own part into the printer and returns the
/// next error to continue with, or `None` to end the walk.
///
/// The renderer only sees `&dyn Error`, so it finds this capability by
/// downcasting. `WithStack` and `WithMessage` are recognised directly; any
/// other implementor must be boxed through [`Formatted`] to take part.
pub trait FormatError {
    /// Print this error's own part and return the error to continue with
    fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn StdError + 'static)>;
}

trait FormatErrorObject: StdError + FormatError + Send + Sync {}

impl<T> FormatErrorObject for T where T: StdError + FormatError + Send + Sync {}

/// Adapter that exposes a foreign [`FormatError`] to the renderer
///
/// `Display`, `source()` and `format_error` all delegate to the wrapped
/// error, so the adapter adds no element of its own to the chain.
///
/// ```rust
/// use std::error::Error;
/// use wraperr::{render, with_message, BoxError, FormatError, Formatted, Printer, RenderOptions};
///
/// #[derive(Debug)]
/// struct Query {
///     sql: &'static str,
///     source: BoxError,
/// }
///
/// impl std::fmt::Display for Query {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "query failed: {}", self.source)
///     }
/// }
///
/// impl Error for Query {
///     fn source(&self) -> Option<&(dyn Error + 'static)> {
///         Some(&*self.source)
///     }
/// }
///
/// impl FormatError for Query {
///     fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn Error + 'static)> {
///         p.print(format_args!("query failed"));
///         if p.detail() {
///             p.print(format_args!("\n    sql: {}", self.sql));
///         }
///         Some(&*self.source)
///     }
/// }
///
/// let query = Query { sql: "SELECT 1", source: "EOF".into() };
/// let err = with_message(Some(Formatted::new(query)), "load user").unwrap();
/// assert_eq!(
///     render(&*err, &RenderOptions::default()),
///     "load user\n  - query failed\n    sql: SELECT 1\n  - EOF"
/// );
/// ```
pub struct Formatted {
    inner: Box<dyn FormatErrorObject>,
}

impl Formatted {
    /// Box `err` so verbose rendering calls its `format_error`
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + FormatError + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(err),
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl StdError for Formatted {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl FormatError for Formatted {
    fn format_error(&self, p: &mut dyn Printer) -> Option<&(dyn StdError + 'static)> {
        self.inner.format_error(p)
    }
}

/// Printer backed by a `String`
#[derive(Debug, Default)]
pub(crate) struct StringPrinter {
    buf: String,
    detail: bool,
}

impl StringPrinter {
    pub(crate) fn new(detail: bool) -> Self {
        Self {
            buf: String::new(),
            detail,
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

impl Printer for StringPrinter {
    fn print(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.buf.write_fmt(args);
    }

    fn detail(&self) -> bool {
        self.detail
    }
}
