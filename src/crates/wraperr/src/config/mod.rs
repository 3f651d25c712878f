//! Rendering configuration
//!
//! [`RenderOptions`] controls verbose rendering. It can be built in code,
//! parsed from JSON, or loaded from environment variables:
//!
//! | Variable              | Field       | Default |
//! |-----------------------|-------------|---------|
//! | `{PREFIX}FRAMES`      | `frames`    | `true`  |
//! | `{PREFIX}MAX_DEPTH`   | `max_depth` | unset   |
//!
//! # Example
//!
//! ```rust,ignore
//! use wraperr::{render, RenderOptions};
//!
//! let options = RenderOptions::from_env("WRAPERR_")?;
//! eprintln!("{}", render(&*err, &options));
//! ```

mod env;
mod options;

pub use env::{build_env_key, get_env, get_env_bool, get_env_parse};
pub use options::{RenderOptions, DEFAULT_ENV_PREFIX};
