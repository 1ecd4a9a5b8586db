//! Result type used by the command line front end.
//!
//! Commands return `color_eyre` results so that library errors carry
//! context as they bubble up to `main`, where `color-eyre` renders them.
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use crate::result::Result;
//!
//! fn load() -> Result<Settings> {
//!     let settings = config::load(&path)
//!         .wrap_err("failed to load commitizen configuration")?;
//!     Ok(settings)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the commands.
pub type Result<T> = EyreResult<T>;
