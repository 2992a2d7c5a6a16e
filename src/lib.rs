#![cfg_attr(docsrs, feature(doc_cfg))]

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
//! <br><br>
//!
//! ## You're probably looking for:
//! * [`BasicLogger`](BasicLogger)
//! * [`StructuredLogger`](StructuredLogger)
//! * [`prelude`](prelude)

mod macros;

pub mod prelude;
pub mod error;
pub mod capability;
pub mod config;
pub mod sink;
pub(crate) mod levels;
pub(crate) mod sync;
mod basic;
mod structured;
#[cfg(feature = "singleton")]
#[cfg_attr(docsrs, doc(cfg(feature = "singleton")))]
pub mod standard;

pub use basic::BasicLogger;
pub use config::Config;
pub use error::LoggerError;
pub use levels::LogLevel;
pub use sink::{CallSite, Flags, LineLogger};
pub use structured::{native_level, StructuredLogger};
