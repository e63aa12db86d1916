use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error => eprintln!("\x1B[31;1m{}\x1B[0m", record.args()),
            Level::Warn => eprintln!("\x1B[33m{}\x1B[0m", record.args()),
            Level::Info => println!("{}", record.args()),
            Level::Debug | Level::Trace => {
                println!("\x1B[2m[{}] {}\x1B[0m", record.target(), record.args())
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
    }
}

/// Installs the console logger at info level. Call once, before parsing
/// arguments, so argument errors are reported too.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
