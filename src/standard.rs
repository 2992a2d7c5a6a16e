//! Process-wide standard logger.
//!
//! A [`BasicLogger`] writing to stderr, built on first use from
//! [`Config::from_env`]. The free functions here delegate to it one-to-one and
//! report the location of their own caller.
//!
//! Code that can take its logger as a parameter should: pass
//! [`logger()`] (or an isolated [`BasicLogger`]) as `&dyn Logger` instead of
//! calling these functions directly.

use std::fmt::{Arguments, Display};
use std::io::{self, Write};

use lazy_static::lazy_static;

use crate::basic::BasicLogger;
use crate::capability::{LeveledLogger, LeveledLoggerModifier, Logger, LoggerModifier};
use crate::config::Config;
use crate::error::LoggerError;
use crate::levels::LogLevel;
use crate::sink::Flags;

lazy_static! {
    static ref STD: BasicLogger = BasicLogger::from_config(Box::new(io::stderr()), &Config::from_env());
}

/// The standard logger itself.
pub fn logger() -> &'static BasicLogger {
    &STD
}

/// Sets the output destination for the standard logger.
pub fn set_output(out: Box<dyn Write + Send>) {
    STD.set_output(out)
}

/// Returns the output flags for the standard logger.
pub fn flags() -> Flags {
    STD.flags()
}

/// Sets the output flags for the standard logger.
pub fn set_flags(flags: Flags) {
    STD.set_flags(flags)
}

/// Returns the output prefix for the standard logger.
pub fn prefix() -> String {
    STD.prefix()
}

/// Sets the output prefix for the standard logger.
pub fn set_prefix(prefix: &str) {
    STD.set_prefix(prefix)
}

pub fn set_output_level(level: LogLevel) {
    STD.set_output_level(level)
}

pub fn output_level() -> LogLevel {
    STD.output_level()
}

#[track_caller]
pub fn output(s: &str) -> Result<(), LoggerError> {
    STD.output(s)
}

#[track_caller]
pub fn print(v: &[&dyn Display]) {
    STD.print(v)
}

#[track_caller]
pub fn printf(args: Arguments<'_>) {
    STD.printf(args)
}

#[track_caller]
pub fn println(v: &[&dyn Display]) {
    STD.println(v)
}

/// Equivalent to [`print`] followed by `std::process::exit(1)`.
#[track_caller]
pub fn fatal(v: &[&dyn Display]) -> ! {
    STD.fatal(v)
}

#[track_caller]
pub fn fatalf(args: Arguments<'_>) -> ! {
    STD.fatalf(args)
}

#[track_caller]
pub fn fatalln(v: &[&dyn Display]) -> ! {
    STD.fatalln(v)
}

/// Equivalent to [`print`] followed by a panic carrying the message.
#[track_caller]
pub fn panic(v: &[&dyn Display]) -> ! {
    STD.panic(v)
}

#[track_caller]
pub fn panicf(args: Arguments<'_>) -> ! {
    STD.panicf(args)
}

#[track_caller]
pub fn panicln(v: &[&dyn Display]) -> ! {
    STD.panicln(v)
}

#[track_caller]
pub fn debug(v: &[&dyn Display]) {
    STD.debug(v)
}

#[track_caller]
pub fn debugf(args: Arguments<'_>) {
    STD.debugf(args)
}

#[track_caller]
pub fn debugln(v: &[&dyn Display]) {
    STD.debugln(v)
}

#[track_caller]
pub fn info(v: &[&dyn Display]) {
    STD.info(v)
}

#[track_caller]
pub fn infof(args: Arguments<'_>) {
    STD.infof(args)
}

#[track_caller]
pub fn infoln(v: &[&dyn Display]) {
    STD.infoln(v)
}

#[track_caller]
pub fn warn(v: &[&dyn Display]) {
    STD.warn(v)
}

#[track_caller]
pub fn warnf(args: Arguments<'_>) {
    STD.warnf(args)
}

#[track_caller]
pub fn warnln(v: &[&dyn Display]) {
    STD.warnln(v)
}

#[track_caller]
pub fn error(v: &[&dyn Display]) {
    STD.error(v)
}

#[track_caller]
pub fn errorf(args: Arguments<'_>) {
    STD.errorf(args)
}

#[track_caller]
pub fn errorln(v: &[&dyn Display]) {
    STD.errorln(v)
}
