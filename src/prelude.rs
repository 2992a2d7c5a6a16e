//! Brings the capability traits into scope.
//!
//! ```
//! use logif::prelude::*;
//! ```

pub use crate::capability::{LeveledLogger, LeveledLoggerModifier, Logger, LoggerModifier};
