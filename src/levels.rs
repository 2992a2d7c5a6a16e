use std::fmt::Formatter;
use std::str::FromStr;

use crate::error::LoggerError;

macro_rules! level_tables {
    ($($name:literal),+ $(,)?) => {
        const NAMES: [&str; 4] = [$($name),+];
        const LABELS: [&str; 4] = [$(concat!("[", $name, "]")),+];
        const LABELS_WITH_SPACE: [&str; 4] = [$(concat!("[", $name, "] ")),+];
    };
}

level_tables!("DEBUG", "INFO", "WARN", "ERROR");

/// Importance of a log message.
///
/// Importance grows in declaration order: `Debug < Info < Warn < Error`.
/// Fatal and panic are outcomes rather than levels, so they are not part of the
/// scale and never take part in filtering.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information.
    Debug = 0,
    /// Informational message.
    Info = 1,
    /// Warning message.
    Warn = 2,
    /// Error message.
    Error = 3,
}

impl LogLevel {
    /// Lowest level on the scale.
    pub const MIN: LogLevel = LogLevel::Debug;
    /// Highest level on the scale.
    pub const MAX: LogLevel = LogLevel::Error;
    /// Every level, indexed by ordinal.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Upper-case name, e.g. `"WARN"`.
    pub const fn as_str(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Bracketed tag, e.g. `"[WARN]"`.
    pub const fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Bracketed tag followed by one space, e.g. `"[WARN] "`.
    pub const fn label_with_space(self) -> &'static str {
        LABELS_WITH_SPACE[self.index()]
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Ordinals only ever come from `self as u8`; anything above the scale
    /// saturates to `MAX`.
    #[inline]
    pub(crate) fn from_ordinal(ordinal: u8) -> LogLevel {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .unwrap_or(Self::MAX)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::MIN, LogLevel::Debug);
        assert_eq!(LogLevel::MAX, LogLevel::Error);
    }

    #[test]
    fn labels_are_bracketed_names() {
        for level in LogLevel::ALL {
            assert_eq!(level.label(), format!("[{}]", level.as_str()));
            assert_eq!(level.label_with_space(), format!("[{}] ", level.as_str()));
        }
        assert_eq!(LogLevel::Warn.label(), "[WARN]");
        assert_eq!(LogLevel::Error.label_with_space(), "[ERROR] ");
    }

    #[test]
    fn ordinal_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_ordinal(level as u8), level);
        }
        assert_eq!(LogLevel::from_ordinal(200), LogLevel::MAX);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" info ".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        match "verbose".parse::<LogLevel>() {
            Err(LoggerError::InvalidLevel(name)) => assert_eq!(name, "verbose"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn native_levels_fold_trace_into_debug() {
        assert_eq!(LogLevel::from(log::Level::Trace), LogLevel::Debug);
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warn);
    }
}
