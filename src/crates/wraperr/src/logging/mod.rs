//! Logging helpers
//!
//! Emits an annotated error as one structured `tracing` event. The crate never
//! installs a subscriber; that is left to the application.

use std::error::Error as StdError;
use tracing::{debug, error, info, warn};

use crate::config::RenderOptions;
use crate::error::{chain_length, frames, root_cause};
use crate::render::render;

/// Log levels for error events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

/// Log an error at `ERROR` level with default render options
///
/// The event message is the verbose rendering; the fields are:
///
/// - `error`: concise message
/// - `root_cause`: message of the innermost error
/// - `chain_length`: number of errors in the chain
/// - `location`: outermost captured frame, if any
///
/// # Example
///
/// ```rust
/// use wraperr::{logging::log_error, wrap};
///
/// let err = wrap(Some("EOF"), "read error").unwrap();
/// log_error(&*err);
/// ```
pub fn log_error(err: &(dyn StdError + 'static)) {
    log_error_with(err, LogLevel::Error, &RenderOptions::default());
}

/// Log an error at a custom level with default render options
pub fn log_error_with_level(err: &(dyn StdError + 'static), level: LogLevel) {
    log_error_with(err, level, &RenderOptions::default());
}

/// Log an error at a custom level with custom render options
pub fn log_error_with(err: &(dyn StdError + 'static), level: LogLevel, options: &RenderOptions) {
    let root = root_cause(err);
    let depth = chain_length(err);
    let location = frames(err).first().map(|frame| frame.to_string());
    let report = render(err, options);

    macro_rules! emit {
        ($event:ident) => {
            $event!(
                error = %err,
                root_cause = %root,
                chain_length = depth,
                location = location.as_deref(),
                "{}",
                report
            )
        };
    }

    match level {
        LogLevel::Debug => emit!(debug),
        LogLevel::Info => emit!(info),
        LogLevel::Warn => emit!(warn),
        LogLevel::Error => emit!(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{with_message, wrap};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_error_fields() {
        let err = wrap(Some("EOF"), "read error").unwrap();
        let output = capture(|| log_error(&*err));

        assert!(output.contains("ERROR"));
        assert!(output.contains("read error\n  - EOF"));
        assert!(output.contains("root_cause=EOF"));
        assert!(output.contains("chain_length=3"));
        assert!(output.contains(file!()));
    }

    #[test]
    fn test_log_error_with_level() {
        let err = with_message(Some("EOF"), "read error").unwrap();
        let output = capture(|| log_error_with_level(&*err, LogLevel::Warn));

        assert!(output.contains("WARN"));
        assert!(!output.contains("ERROR"));
        assert!(output.contains("chain_length=2"));
    }

    #[test]
    fn test_log_error_with_options() {
        let err = wrap(Some("EOF"), "read error").unwrap();
        let options = RenderOptions::new().with_frames(false);
        let output = capture(|| log_error_with(&*err, LogLevel::Info, &options));

        assert!(output.contains("INFO"));
        assert!(output.contains("read error: EOF\n  - read error\n  - EOF"));
    }

    #[test]
    fn test_default_level() {
        assert_eq!(LogLevel::default(), LogLevel::Error);
    }
}
