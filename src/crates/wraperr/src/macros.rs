/// Capture the current call site together with the enclosing function path
///
/// ```rust
/// fn open_config() -> wraperr::Frame {
///     wraperr::frame!()
/// }
///
/// let frame = open_config();
/// assert_eq!(frame.file(), file!());
/// assert!(frame.function().unwrap().ends_with("open_config"));
/// ```
#[macro_export]
macro_rules! frame {
    () => {{
        fn __wraperr_here() {}
        fn __wraperr_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::Frame::caller().with_function($crate::frame::__strip_function_name(
            __wraperr_type_name(__wraperr_here),
        ))
    }};
}

/// Annotate an optional error with a formatted message and the call site
///
/// Returns `None` when the error is `None`; the format arguments are not
/// evaluated in that case.
///
/// ```rust
/// use wraperr::wrapf;
///
/// let err = wrapf!(Some("EOF"), "read error with {} format specifier", 1).unwrap();
/// assert_eq!(err.to_string(), "read error with 1 format specifier: EOF");
///
/// assert!(wrapf!(None::<&str>, "no error").is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)+) => {
        match $err {
            ::core::option::Option::Some(err) => ::core::option::Option::Some(
                $crate::__private::wrap_at(err, ::std::format!($($arg)+), $crate::frame!()),
            ),
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}

/// Annotate an optional error with a formatted message, without a frame
///
/// ```rust
/// use wraperr::with_messagef;
///
/// let err = with_messagef!(Some("EOF"), "attempt {}", 3).unwrap();
/// assert_eq!(err.to_string(), "attempt 3: EOF");
/// ```
#[macro_export]
macro_rules! with_messagef {
    ($err:expr, $($arg:tt)+) => {
        match $err {
            ::core::option::Option::Some(err) => ::core::option::Option::Some(
                $crate::__private::attach_message(err, ::std::format!($($arg)+)),
            ),
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}
