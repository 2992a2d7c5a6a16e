//! `format!`-style shorthands for the printf variants.
//!
//! Each macro takes the logger first and expands to a method call, so the
//! matching capability trait must be in scope (`use logif::prelude::*`). The
//! reported location is the macro invocation.

#[macro_export]
macro_rules! log_print {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}
