use std::fmt::{Arguments, Display};
use std::io::Write;
use std::panic::Location;

use env_logger::{Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::capability::{LeveledLogger, LeveledLoggerModifier, Logger};
use crate::levels::LogLevel;
use crate::sink::{sprint, sprintln};
use crate::sync::AtomicLevel;

/// Native level of each [`LogLevel`], indexed by ordinal.
const NATIVE_LEVELS: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

/// Native level of fatal and panic output.
const OUTCOME_LEVEL: Level = Level::Error;

/// Native level of unleveled output.
const PRINT_LEVEL: Level = Level::Info;

const DEFAULT_TARGET: &str = "logif";

/// Native level a [`LogLevel`] is emitted at.
pub const fn native_level(level: LogLevel) -> Level {
    NATIVE_LEVELS[level.index()]
}

/// Leveled logger over a [`log::Log`] backend.
///
/// The backend renders severity itself, so leveled messages are handed over
/// as-is with the mapped native level. The file and line of each record point
/// at the caller.
///
/// Sink configuration belongs to the backend, so this adapter does not
/// implement [`LoggerModifier`](crate::capability::LoggerModifier).
pub struct StructuredLogger {
    backend: Box<dyn Log>,
    target: String,
    output_level: AtomicLevel,
}

impl StructuredLogger {
    /// An `env_logger` backend writing to stderr.
    pub fn new() -> Self {
        Self::with_backend(Box::new(default_backend(Target::Stderr)))
    }

    /// An `env_logger` backend writing to `out`.
    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self::with_backend(Box::new(default_backend(Target::Pipe(out))))
    }

    pub fn with_backend(backend: Box<dyn Log>) -> Self {
        Self {
            backend,
            target: DEFAULT_TARGET.to_string(),
            output_level: AtomicLevel::new(LogLevel::Warn),
        }
    }

    /// Sets the target attached to every record.
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Current output level in the backend's terms.
    pub fn native_threshold(&self) -> LevelFilter {
        native_level(self.output_level.load()).to_level_filter()
    }

    fn admits(&self, level: LogLevel) -> bool {
        let native = native_level(level);
        native <= self.native_threshold()
            && self.backend.enabled(
                &Metadata::builder()
                    .level(native)
                    .target(&self.target)
                    .build(),
            )
    }

    fn emit(&self, level: Level, location: &'static Location<'static>, args: Arguments<'_>) {
        self.backend.log(
            &Record::builder()
                .args(args)
                .level(level)
                .target(&self.target)
                .file_static(Some(location.file()))
                .line(Some(location.line()))
                .build(),
        );
    }

    #[track_caller]
    fn exit(&self, args: Arguments<'_>) -> ! {
        self.emit(OUTCOME_LEVEL, Location::caller(), args);
        self.backend.flush();
        std::process::exit(1)
    }

    #[track_caller]
    fn raise(&self, message: String) -> ! {
        self.emit(OUTCOME_LEVEL, Location::caller(), format_args!("{}", message));
        self.backend.flush();
        std::panic::panic_any(message)
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("target", &self.target)
            .field("output_level", &self.output_level)
            .finish_non_exhaustive()
    }
}

/// Lines match [`BasicLogger`](crate::BasicLogger) with `Flags::LONG_FILE`:
/// `file:line: [LEVEL] message`.
fn default_backend(target: Target) -> env_logger::Logger {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{}: {}{}",
                record.file().unwrap_or("???"),
                record.line().unwrap_or(0),
                LogLevel::from(record.level()).label_with_space(),
                record.args()
            )
        })
        .target(target)
        .build()
}

/// Records carry their own line structure, so println operands are joined
/// without the trailing newline.
fn join_operands(v: &[&dyn Display]) -> String {
    let mut s = sprintln(v);
    s.pop();
    s
}

impl Logger for StructuredLogger {
    #[track_caller]
    fn print(&self, v: &[&dyn Display]) {
        self.emit(PRINT_LEVEL, Location::caller(), format_args!("{}", sprint(v)))
    }

    #[track_caller]
    fn printf(&self, args: Arguments<'_>) {
        self.emit(PRINT_LEVEL, Location::caller(), args)
    }

    #[track_caller]
    fn println(&self, v: &[&dyn Display]) {
        self.emit(
            PRINT_LEVEL,
            Location::caller(),
            format_args!("{}", join_operands(v)),
        )
    }

    #[track_caller]
    fn fatal(&self, v: &[&dyn Display]) -> ! {
        self.exit(format_args!("{}", sprint(v)))
    }

    #[track_caller]
    fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.exit(args)
    }

    #[track_caller]
    fn fatalln(&self, v: &[&dyn Display]) -> ! {
        self.exit(format_args!("{}", join_operands(v)))
    }

    #[track_caller]
    fn panic(&self, v: &[&dyn Display]) -> ! {
        self.raise(sprint(v))
    }

    #[track_caller]
    fn panicf(&self, args: Arguments<'_>) -> ! {
        self.raise(std::fmt::format(args))
    }

    #[track_caller]
    fn panicln(&self, v: &[&dyn Display]) -> ! {
        self.raise(join_operands(v))
    }

    fn as_leveled(&self) -> Option<&dyn LeveledLogger> {
        Some(self)
    }

    fn as_level_modifier(&self) -> Option<&dyn LeveledLoggerModifier> {
        Some(self)
    }
}

impl LeveledLogger for StructuredLogger {
    #[track_caller]
    fn log_at(&self, level: LogLevel, v: &[&dyn Display]) {
        if !self.admits(level) {
            return;
        }
        self.emit(
            native_level(level),
            Location::caller(),
            format_args!("{}", sprint(v)),
        )
    }

    #[track_caller]
    fn logf_at(&self, level: LogLevel, args: Arguments<'_>) {
        if !self.admits(level) {
            return;
        }
        self.emit(native_level(level), Location::caller(), args)
    }

    #[track_caller]
    fn logln_at(&self, level: LogLevel, v: &[&dyn Display]) {
        if !self.admits(level) {
            return;
        }
        self.emit(
            native_level(level),
            Location::caller(),
            format_args!("{}", join_operands(v)),
        )
    }
}

impl LeveledLoggerModifier for StructuredLogger {
    /// Only this adapter's threshold changes. The backend keeps its own
    /// filter, and a record must pass both (`Log::enabled` is consulted on
    /// every leveled call).
    fn set_output_level(&self, level: LogLevel) {
        self.output_level.store(level)
    }

    fn output_level(&self) -> LogLevel {
        self.output_level.load()
    }
}
