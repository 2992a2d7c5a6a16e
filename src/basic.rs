use std::fmt::{Arguments, Display};
use std::io::Write;

use crate::capability::{LeveledLogger, LeveledLoggerModifier, Logger, LoggerModifier};
use crate::config::Config;
use crate::error::LoggerError;
use crate::levels::LogLevel;
use crate::sink::{CallSite, Flags, LineLogger};
use crate::sync::AtomicLevel;

/// Leveled logger over a [`LineLogger`].
///
/// The line logger has no notion of severity, so this adapter does the
/// threshold check itself and prepends the bracketed level tag to each leveled
/// message. Unleveled output is passed through unchanged.
///
/// Implements all four capability traits.
#[derive(Debug)]
pub struct BasicLogger {
    entity: LineLogger,
    output_level: AtomicLevel,
}

impl BasicLogger {
    /// Creates a logger writing to `out`. The output level starts at
    /// [`LogLevel::Warn`].
    pub fn new(out: Box<dyn Write + Send>, prefix: &str, flags: Flags) -> Self {
        Self::from_config(out, &Config::new(prefix, flags, LogLevel::Warn))
    }

    pub fn from_config(out: Box<dyn Write + Send>, config: &Config) -> Self {
        Self {
            entity: LineLogger::new(out, &config.prefix, config.flags),
            output_level: AtomicLevel::new(config.level),
        }
    }

    /// Writes `s` attributed to the caller, reporting write failures.
    #[track_caller]
    pub fn output(&self, s: &str) -> Result<(), LoggerError> {
        self.entity.output(CallSite::caller(), s)
    }

    /// Writes `s` attributed to an explicit call site.
    pub fn output_at(&self, call_site: CallSite<'_>, s: &str) -> Result<(), LoggerError> {
        self.entity.output(call_site, s)
    }

    /// Registers this logger as the global [`log`] backend.
    pub fn install(self) -> Result<(), LoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl Logger for BasicLogger {
    #[track_caller]
    fn print(&self, v: &[&dyn Display]) {
        self.entity.print(v)
    }

    #[track_caller]
    fn printf(&self, args: Arguments<'_>) {
        self.entity.printf(args)
    }

    #[track_caller]
    fn println(&self, v: &[&dyn Display]) {
        self.entity.println(v)
    }

    #[track_caller]
    fn fatal(&self, v: &[&dyn Display]) -> ! {
        self.entity.fatal(v)
    }

    #[track_caller]
    fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.entity.fatalf(args)
    }

    #[track_caller]
    fn fatalln(&self, v: &[&dyn Display]) -> ! {
        self.entity.fatalln(v)
    }

    #[track_caller]
    fn panic(&self, v: &[&dyn Display]) -> ! {
        self.entity.panic(v)
    }

    #[track_caller]
    fn panicf(&self, args: Arguments<'_>) -> ! {
        self.entity.panicf(args)
    }

    #[track_caller]
    fn panicln(&self, v: &[&dyn Display]) -> ! {
        self.entity.panicln(v)
    }

    fn as_modifier(&self) -> Option<&dyn LoggerModifier> {
        Some(self)
    }

    fn as_leveled(&self) -> Option<&dyn LeveledLogger> {
        Some(self)
    }

    fn as_level_modifier(&self) -> Option<&dyn LeveledLoggerModifier> {
        Some(self)
    }
}

impl LoggerModifier for BasicLogger {
    fn set_flags(&self, flags: Flags) {
        self.entity.set_flags(flags)
    }

    fn flags(&self) -> Flags {
        self.entity.flags()
    }

    fn set_prefix(&self, prefix: &str) {
        self.entity.set_prefix(prefix)
    }

    fn prefix(&self) -> String {
        self.entity.prefix()
    }

    fn set_output(&self, out: Box<dyn Write + Send>) {
        self.entity.set_output(out)
    }
}

impl LeveledLogger for BasicLogger {
    #[track_caller]
    fn log_at(&self, level: LogLevel, v: &[&dyn Display]) {
        if !self.output_level.admits(level) {
            return;
        }

        let label = level.label_with_space();
        let mut operands: Vec<&dyn Display> = Vec::with_capacity(v.len() + 1);
        operands.push(&label);
        operands.extend_from_slice(v);
        self.entity.print(&operands)
    }

    #[track_caller]
    fn logf_at(&self, level: LogLevel, args: Arguments<'_>) {
        if !self.output_level.admits(level) {
            return;
        }

        self.entity
            .printf(format_args!("{}{}", level.label_with_space(), args))
    }

    #[track_caller]
    fn logln_at(&self, level: LogLevel, v: &[&dyn Display]) {
        if !self.output_level.admits(level) {
            return;
        }

        let label = level.label();
        let mut operands: Vec<&dyn Display> = Vec::with_capacity(v.len() + 1);
        operands.push(&label);
        operands.extend_from_slice(v);
        self.entity.println(&operands)
    }
}

impl LeveledLoggerModifier for BasicLogger {
    fn set_output_level(&self, level: LogLevel) {
        self.output_level.store(level)
    }

    fn output_level(&self) -> LogLevel {
        self.output_level.load()
    }
}

impl log::Log for BasicLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.output_level.admits(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = LogLevel::from(record.level());
        let call_site = CallSite::new(record.file().unwrap_or("???"), record.line().unwrap_or(0));
        let _ = self.entity.output(
            call_site,
            &format!("{}{}", level.label_with_space(), record.args()),
        );
    }

    fn flush(&self) {}
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::sink::tests::SharedBuffer;

    fn logger(flags: Flags) -> (BasicLogger, SharedBuffer) {
        let buf = SharedBuffer::default();
        (BasicLogger::new(Box::new(buf.clone()), "", flags), buf)
    }

    #[test]
    fn threshold_defaults_to_warn() {
        let (logger, _) = logger(Flags::empty());
        assert_eq!(logger.output_level(), LogLevel::Warn);
    }

    #[test]
    fn from_config_applies_every_field() {
        let buf = SharedBuffer::default();
        let config = Config::new("svc: ", Flags::UTC, LogLevel::Debug);
        let logger = BasicLogger::from_config(Box::new(buf.clone()), &config);

        assert_eq!(logger.prefix(), "svc: ");
        assert_eq!(logger.flags(), Flags::UTC);
        assert_eq!(logger.output_level(), LogLevel::Debug);
    }

    #[test]
    fn suppressed_operands_are_never_formatted() {
        struct Explodes;
        impl Display for Explodes {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a suppressed message")
            }
        }

        let (logger, buf) = logger(Flags::empty());
        logger.debug(&[&Explodes]);
        logger.infof(format_args!("{}", Explodes));
        logger.infoln(&[&Explodes]);
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn leveled_variants_place_the_label() {
        let (logger, buf) = logger(Flags::empty());
        logger.error(&[&"a", &1]);
        logger.errorf(format_args!("b{}", 2));
        logger.errorln(&[&"c", &3]);
        assert_eq!(buf.contents(), "[ERROR] a1\n[ERROR] b2\n[ERROR] c 3\n");
    }

    #[test]
    fn output_at_uses_the_given_call_site() {
        let (logger, buf) = logger(Flags::LONG_FILE);
        logger
            .output_at(CallSite::new("gen/proto.rs", 12), "generated")
            .unwrap();
        assert_eq!(buf.contents(), "gen/proto.rs:12: generated\n");
    }

    #[test]
    fn log_bridge_uses_threshold_and_record_location() {
        use log::Log;

        let (logger, buf) = logger(Flags::SHORT_FILE);
        logger.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Error)
                .file(Some("src/worker.rs"))
                .line(Some(7))
                .args(format_args!("disk full"))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("no location"))
                .build(),
        );

        assert_eq!(
            buf.contents(),
            "worker.rs:7: [ERROR] disk full\n???:0: [WARN] no location\n"
        );
    }
}
