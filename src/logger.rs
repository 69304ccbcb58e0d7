use std::io::IsTerminal;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let module = record.module_path().unwrap_or("unknown");
        if (module.starts_with("selectors") || module.starts_with("html5ever"))
            && record.level() > Level::Info
        {
            return;
        }
        if record.target() == "progress" {
            eprintln!("{}...", record.args());
            return;
        }
        let (color, color_end) = if std::io::stderr().is_terminal() {
            let color = match record.level() {
                Level::Error => "\x1b[31;1m",
                Level::Warn => "\x1b[33;1m",
                Level::Info => "\x1b[1m",
                Level::Debug | Level::Trace => "",
            };
            (color, "\x1b[0m")
        } else {
            ("", "")
        };
        eprintln!("[{color}{}{color_end}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// `verbose` is the number of `-v` flags: warnings and errors only by default, then info, debug
/// and trace.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for(verbose)))
}
