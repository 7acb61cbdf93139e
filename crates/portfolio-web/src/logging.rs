//! Routes `tracing` output to the browser console.

use std::io;

use portfolio_core::LoggingConfig;
use tracing::{Level, Metadata};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};
use wasm_bindgen::JsValue;
use web_sys::console;

pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        console::warn_1(&JsValue::from_str(&format!("Logging already initialised: {e}")));
    }
}

struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it when dropped.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }

        let line = String::from_utf8_lossy(&self.buf);
        ConsoleLevel::from(self.level).emit(&JsValue::from_str(line.trim_end()));
    }
}

/// Console method an event level is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<Level> for ConsoleLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleLevel::Error,
            Level::WARN => ConsoleLevel::Warn,
            Level::INFO => ConsoleLevel::Info,
            _ => ConsoleLevel::Debug,
        }
    }
}

impl ConsoleLevel {
    fn emit(self, message: &JsValue) {
        match self {
            ConsoleLevel::Error => console::error_1(message),
            ConsoleLevel::Warn => console::warn_1(message),
            ConsoleLevel::Info => console::info_1(message),
            ConsoleLevel::Debug => console::debug_1(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(ConsoleLevel::from(Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::from(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(Level::INFO), ConsoleLevel::Info);
        assert_eq!(ConsoleLevel::from(Level::DEBUG), ConsoleLevel::Debug);
        assert_eq!(ConsoleLevel::from(Level::TRACE), ConsoleLevel::Debug);
    }

    #[test]
    fn test_writer_buffers_whole_event() {
        use std::io::Write;

        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"tab ").unwrap();
        writer.write_all(b"selected\n").unwrap();
        assert_eq!(writer.buf, b"tab selected\n");

        // Dropping would hit the browser console.
        writer.buf.clear();
    }
}
