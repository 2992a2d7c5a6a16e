use std::fmt::Formatter;

pub enum LoggerError {
    /// The sink rejected the write.
    Write(std::io::Error),
    InvalidLevel(String),
    /// A global `log` backend is already registered.
    SetLogger(log::SetLoggerError),
}

fn format_logger_error(l: &LoggerError, fmt: &mut Formatter) -> std::fmt::Result {
    match l {
        LoggerError::Write(e) => {
            write!(fmt, "WriteError: {}", e)
        }
        LoggerError::InvalidLevel(name) => {
            write!(fmt, "Invalid Log Level: {:?}", name)
        }
        LoggerError::SetLogger(e) => {
            write!(fmt, "SetLoggerError: {}", e)
        }
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        LoggerError::Write(e)
    }
}

impl From<log::SetLoggerError> for LoggerError {
    fn from(e: log::SetLoggerError) -> Self {
        LoggerError::SetLogger(e)
    }
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::fmt::Debug for LoggerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        format_logger_error(self, f)
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggerError::Write(e) => Some(e),
            LoggerError::SetLogger(e) => Some(e),
            _ => None,
        }
    }
}
