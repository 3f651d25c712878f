//! Call-site capture
//!
//! A [`Frame`] is a snapshot of one program location. Capture relies on
//! `#[track_caller]`: every helper between the user's code and
//! [`Frame::caller`] carries the attribute, so the recorded location is the
//! user's call site and never one of this crate's internals.

use std::fmt;
use std::panic::Location;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::render::Printer;

/// A captured program location
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    location: &'static Location<'static>,
    function: Option<&'static str>,
}

impl Frame {
    /// Capture the location of the caller
    ///
    /// ```rust
    /// use wraperr::Frame;
    ///
    /// let (frame, line) = (Frame::caller(), line!());
    /// assert_eq!(frame.line(), line);
    /// assert_eq!(frame.file(), file!());
    /// ```
    #[track_caller]
    pub fn caller() -> Self {
        Self {
            location: Location::caller(),
            function: None,
        }
    }

    /// Attach the path of the enclosing function
    ///
    /// Usually filled in by the [`frame!`](crate::frame!) macro.
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }

    /// Source file of the call site
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Line number, starting at 1
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Column number, starting at 1
    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Enclosing function path, when it was recorded
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Render this frame into a printer
    ///
    /// Frames only contribute in detail mode, so concise output is never
    /// affected by where an error was annotated.
    pub fn format(&self, p: &mut dyn Printer) {
        if !p.detail() {
            return;
        }
        if let Some(function) = self.function {
            p.print(format_args!("\n    {}", function));
            p.print(format_args!("\n        {}", self));
        } else {
            p.print(format_args!("\n    {}", self));
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file(), self.line(), self.column())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Frame");
        if let Some(function) = self.function {
            d.field("function", &function);
        }
        d.field("location", &format_args!("{}", self));
        d.finish()
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Frame", 4)?;
        s.serialize_field("function", &self.function)?;
        s.serialize_field("file", self.file())?;
        s.serialize_field("line", &self.line())?;
        s.serialize_field("column", &self.column())?;
        s.end()
    }
}

/// Strip the helper suffix from a `type_name` of a nested fn item
#[doc(hidden)]
pub fn __strip_function_name(name: &'static str) -> &'static str {
    name.strip_suffix("::__wraperr_here").unwrap_or(name)
}
