use std::env;

use crate::levels::LogLevel;
use crate::sink::Flags;

/// Environment variable holding the initial output level of the standard logger.
pub const LEVEL_ENV: &str = "LOGIF_LEVEL";
/// Environment variable holding the prefix of the standard logger.
pub const PREFIX_ENV: &str = "LOGIF_PREFIX";

/// Output level used when none is configured.
const FALLBACK_LEVEL: LogLevel = LogLevel::Warn;

/// Construction parameters of a [`BasicLogger`](crate::BasicLogger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub flags: Flags,
    pub level: LogLevel,
}

impl Config {
    pub fn new(prefix: &str, flags: Flags, level: LogLevel) -> Self {
        Self {
            prefix: prefix.to_string(),
            flags,
            level,
        }
    }

    /// Defaults overridden by [`LEVEL_ENV`] and [`PREFIX_ENV`].
    ///
    /// A level that does not parse falls back to [`LogLevel::Warn`].
    pub fn from_env() -> Self {
        Self {
            prefix: env::var(PREFIX_ENV).unwrap_or_default(),
            flags: Flags::STD,
            level: level_or_fallback(env::var(LEVEL_ENV).ok().as_deref()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("", Flags::STD, FALLBACK_LEVEL)
    }
}

fn level_or_fallback(value: Option<&str>) -> LogLevel {
    value
        .and_then(|v| v.parse().ok())
        .unwrap_or(FALLBACK_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_logger() {
        let config = Config::default();
        assert_eq!(config.prefix, "");
        assert_eq!(config.flags, Flags::STD);
        assert_eq!(config.level, LogLevel::Warn);
    }

    #[test]
    fn level_falls_back_to_warn() {
        assert_eq!(level_or_fallback(None), LogLevel::Warn);
        assert_eq!(level_or_fallback(Some("chatty")), LogLevel::Warn);
        assert_eq!(level_or_fallback(Some("")), LogLevel::Warn);
    }

    #[test]
    fn level_is_read_when_valid() {
        assert_eq!(level_or_fallback(Some("debug")), LogLevel::Debug);
        assert_eq!(level_or_fallback(Some("ERROR")), LogLevel::Error);
    }
}
