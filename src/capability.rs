//! Capability traits.
//!
//! A logger is described by four narrow traits instead of one wide one, so a
//! component can ask for exactly the facet it uses:
//!
//! * [`Logger`]: unleveled print, fatal and panic output.
//! * [`LoggerModifier`]: destination, flags and prefix of the underlying sink.
//! * [`LeveledLogger`]: debug/info/warn/error output filtered by a threshold.
//! * [`LeveledLoggerModifier`]: reading and changing that threshold.
//!
//! Any `&dyn Logger` can be narrowed at runtime with [`Logger::as_modifier`],
//! [`Logger::as_leveled`] and [`Logger::as_level_modifier`]. They return `None`
//! when the concrete logger lacks the capability.
//!
//! ```
//! use logif::prelude::*;
//! use logif::LogLevel;
//!
//! fn quiet(logger: &dyn Logger) {
//!     if let Some(levels) = logger.as_level_modifier() {
//!         levels.set_output_level(LogLevel::Error);
//!     }
//! }
//! ```

use std::fmt::{Arguments, Display};
use std::io::Write;

use crate::levels::LogLevel;
use crate::sink::Flags;

/// Minimum logging interface.
///
/// Print-style operations concatenate their operands, println-style ones join
/// them with spaces and end the line, printf-style ones take
/// [`format_args!`] output.
pub trait Logger: Send + Sync {
    /// Writes the operands unconditionally.
    ///
    /// Operands are concatenated with no separator: `print(&[&1, &2])` writes
    /// `12`. Use [`println`](Logger::println) to have them joined by spaces.
    #[track_caller]
    fn print(&self, v: &[&dyn Display]);
    #[track_caller]
    fn printf(&self, args: Arguments<'_>);
    #[track_caller]
    fn println(&self, v: &[&dyn Display]);

    /// Writes like [`print`](Logger::print), then exits the process with status 1.
    #[track_caller]
    fn fatal(&self, v: &[&dyn Display]) -> !;
    #[track_caller]
    fn fatalf(&self, args: Arguments<'_>) -> !;
    #[track_caller]
    fn fatalln(&self, v: &[&dyn Display]) -> !;

    /// Writes like [`print`](Logger::print), then panics with the written
    /// `String` as payload.
    #[track_caller]
    fn panic(&self, v: &[&dyn Display]) -> !;
    #[track_caller]
    fn panicf(&self, args: Arguments<'_>) -> !;
    #[track_caller]
    fn panicln(&self, v: &[&dyn Display]) -> !;

    fn as_modifier(&self) -> Option<&dyn LoggerModifier> {
        None
    }

    fn as_leveled(&self) -> Option<&dyn LeveledLogger> {
        None
    }

    fn as_level_modifier(&self) -> Option<&dyn LeveledLoggerModifier> {
        None
    }
}

/// Sink configuration.
///
/// Changes are not ordered against log calls already running on other threads.
pub trait LoggerModifier: Send + Sync {
    fn set_flags(&self, flags: Flags);
    fn flags(&self) -> Flags;
    fn set_prefix(&self, prefix: &str);
    fn prefix(&self) -> String;
    fn set_output(&self, out: Box<dyn Write + Send>);
}

/// Leveled logging interface.
///
/// A message below the current threshold has no effect; its operands are not
/// even formatted.
pub trait LeveledLogger: Send + Sync {
    #[track_caller]
    fn log_at(&self, level: LogLevel, v: &[&dyn Display]);
    #[track_caller]
    fn logf_at(&self, level: LogLevel, args: Arguments<'_>);
    #[track_caller]
    fn logln_at(&self, level: LogLevel, v: &[&dyn Display]);

    #[track_caller]
    fn debug(&self, v: &[&dyn Display]) {
        self.log_at(LogLevel::Debug, v)
    }
    #[track_caller]
    fn debugf(&self, args: Arguments<'_>) {
        self.logf_at(LogLevel::Debug, args)
    }
    #[track_caller]
    fn debugln(&self, v: &[&dyn Display]) {
        self.logln_at(LogLevel::Debug, v)
    }

    #[track_caller]
    fn info(&self, v: &[&dyn Display]) {
        self.log_at(LogLevel::Info, v)
    }
    #[track_caller]
    fn infof(&self, args: Arguments<'_>) {
        self.logf_at(LogLevel::Info, args)
    }
    #[track_caller]
    fn infoln(&self, v: &[&dyn Display]) {
        self.logln_at(LogLevel::Info, v)
    }

    #[track_caller]
    fn warn(&self, v: &[&dyn Display]) {
        self.log_at(LogLevel::Warn, v)
    }
    #[track_caller]
    fn warnf(&self, args: Arguments<'_>) {
        self.logf_at(LogLevel::Warn, args)
    }
    #[track_caller]
    fn warnln(&self, v: &[&dyn Display]) {
        self.logln_at(LogLevel::Warn, v)
    }

    #[track_caller]
    fn error(&self, v: &[&dyn Display]) {
        self.log_at(LogLevel::Error, v)
    }
    #[track_caller]
    fn errorf(&self, args: Arguments<'_>) {
        self.logf_at(LogLevel::Error, args)
    }
    #[track_caller]
    fn errorln(&self, v: &[&dyn Display]) {
        self.logln_at(LogLevel::Error, v)
    }
}

/// Threshold of a [`LeveledLogger`].
pub trait LeveledLoggerModifier: Send + Sync {
    fn set_output_level(&self, level: LogLevel);
    fn output_level(&self) -> LogLevel;
}
