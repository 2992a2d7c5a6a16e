//! Line-oriented sink primitive.
//!
//! [`LineLogger`] writes one line per call: an optional header (prefix, date,
//! time, source location) followed by the message. It has no notion of
//! severity; [`BasicLogger`](crate::BasicLogger) layers levels on top of it.

use std::fmt::{Display, Write as _};
use std::io::Write;
use std::ops::{BitOr, BitOrAssign};
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::LoggerError;

/// Formatting flags controlling the line header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// Local date: `2009/01/23`.
    pub const DATE: Flags = Flags(1);
    /// Local time: `01:23:23`.
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file path and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the beginning of the line to before the message.
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// Initial values for the standard logger.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL_BITS: u32 = (1 << 7) - 1;

    pub const fn empty() -> Flags {
        Flags(0)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unknown bits are dropped.
    pub const fn from_bits_truncate(bits: u32) -> Flags {
        Flags(bits & Self::ALL_BITS)
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// Source location a line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    fn short_file(&self) -> &'a str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }
}

impl CallSite<'static> {
    /// Location of the nearest caller that is not itself `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Concatenates the operands.
pub(crate) fn sprint(v: &[&dyn Display]) -> String {
    let mut s = String::new();
    for operand in v {
        // Writing into a String cannot fail.
        let _ = write!(s, "{}", operand);
    }
    s
}

/// Joins the operands with single spaces and ends the result with exactly one
/// newline.
pub(crate) fn sprintln(v: &[&dyn Display]) -> String {
    let mut s = String::new();
    for (i, operand) in v.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{}", operand);
    }
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

struct Sink {
    out: Box<dyn Write + Send>,
    prefix: String,
    flags: Flags,
    buf: String,
}

/// Line logger writing to an [`io::Write`](std::io::Write) destination.
///
/// Each call produces a single write to the destination; concurrent callers are
/// serialized on an internal mutex.
pub struct LineLogger {
    sink: Mutex<Sink>,
}

impl LineLogger {
    pub fn new(out: Box<dyn Write + Send>, prefix: &str, flags: Flags) -> Self {
        Self {
            sink: Mutex::new(Sink {
                out,
                prefix: prefix.to_string(),
                flags,
                buf: String::new(),
            }),
        }
    }

    // A writer that panicked mid-line leaves nothing inconsistent behind.
    fn lock(&self) -> MutexGuard<'_, Sink> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_output(&self, out: Box<dyn Write + Send>) {
        self.lock().out = out;
    }

    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: &str) {
        self.lock().prefix = prefix.to_string();
    }

    /// Writes `s` preceded by the header. A newline is appended unless `s`
    /// already ends with one.
    pub fn output(&self, call_site: CallSite<'_>, s: &str) -> Result<(), LoggerError> {
        let now = Local::now();
        let mut guard = self.lock();
        let Sink {
            out,
            prefix,
            flags,
            buf,
        } = &mut *guard;

        buf.clear();
        format_header(buf, *flags, prefix, now, call_site);
        buf.push_str(s);
        if !s.ends_with('\n') {
            buf.push('\n');
        }

        out.write_all(buf.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    #[track_caller]
    pub fn print(&self, v: &[&dyn Display]) {
        let _ = self.output(CallSite::caller(), &sprint(v));
    }

    #[track_caller]
    pub fn printf(&self, args: std::fmt::Arguments<'_>) {
        let _ = self.output(CallSite::caller(), &std::fmt::format(args));
    }

    #[track_caller]
    pub fn println(&self, v: &[&dyn Display]) {
        let _ = self.output(CallSite::caller(), &sprintln(v));
    }

    #[track_caller]
    pub fn fatal(&self, v: &[&dyn Display]) -> ! {
        self.print(v);
        std::process::exit(1)
    }

    #[track_caller]
    pub fn fatalf(&self, args: std::fmt::Arguments<'_>) -> ! {
        self.printf(args);
        std::process::exit(1)
    }

    #[track_caller]
    pub fn fatalln(&self, v: &[&dyn Display]) -> ! {
        self.println(v);
        std::process::exit(1)
    }

    #[track_caller]
    pub fn panic(&self, v: &[&dyn Display]) -> ! {
        self.raise(sprint(v))
    }

    #[track_caller]
    pub fn panicf(&self, args: std::fmt::Arguments<'_>) -> ! {
        self.raise(std::fmt::format(args))
    }

    #[track_caller]
    pub fn panicln(&self, v: &[&dyn Display]) -> ! {
        self.raise(sprintln(v))
    }

    #[track_caller]
    fn raise(&self, message: String) -> ! {
        let _ = self.output(CallSite::caller(), &message);
        std::panic::panic_any(message)
    }
}

impl std::fmt::Debug for LineLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink = self.lock();
        f.debug_struct("LineLogger")
            .field("prefix", &sink.prefix)
            .field("flags", &sink.flags)
            .finish_non_exhaustive()
    }
}

fn format_header(
    buf: &mut String,
    flags: Flags,
    prefix: &str,
    now: DateTime<Local>,
    call_site: CallSite<'_>,
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        if flags.contains(Flags::UTC) {
            format_time(buf, flags, now.with_timezone(&Utc));
        } else {
            format_time(buf, flags, now);
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = if flags.contains(Flags::SHORT_FILE) {
            call_site.short_file()
        } else {
            call_site.file
        };
        let _ = write!(buf, "{}:{}: ", file, call_site.line);
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
}

fn format_time<Tz>(buf: &mut String, flags: Flags, t: DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", t.format("%Y/%m/%d"));
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(buf, "{}", t.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", t.format("%.6f"));
        }
        buf.push(' ');
    }
}
