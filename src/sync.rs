#[cfg(not(all(test, feature = "loom")))]
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(all(test, feature = "loom"))]
use loom::sync::atomic::{AtomicU8, Ordering};

use crate::levels::LogLevel;

/// Output threshold shared by every caller of one logger.
///
/// Only the field itself is atomic. A leveled call loads the threshold and
/// then emits; a concurrent `store` may land between the two, so a message
/// that already passed the check can still be written after the threshold was
/// raised.
pub(crate) struct AtomicLevel {
    ordinal: AtomicU8,
}

impl AtomicLevel {
    pub(crate) fn new(level: LogLevel) -> Self {
        Self {
            ordinal: AtomicU8::new(level as u8),
        }
    }

    #[inline]
    pub(crate) fn load(&self) -> LogLevel {
        LogLevel::from_ordinal(self.ordinal.load(Ordering::Acquire))
    }

    #[inline]
    pub(crate) fn store(&self, level: LogLevel) {
        self.ordinal.store(level as u8, Ordering::Release);
    }

    /// `true` when a message at `level` passes the threshold.
    #[inline]
    pub(crate) fn admits(&self, level: LogLevel) -> bool {
        level >= self.load()
    }
}

impl std::fmt::Debug for AtomicLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AtomicLevel").field(&self.load()).finish()
    }
}
