//! Logger used by the RPC client and its tests.
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::SystemTime;

use chrono::prelude::*;
use colored::*;

pub use log::{Level, Log, Metadata, Record, SetLoggerError};

use crate::conf::RpcClientConf;

struct Logger {
    level: Level,
    file: Option<Mutex<File>>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        let res = match self.file {
            Some(ref file) => match file.lock() {
                Ok(mut file) => io::Write::write_all(&mut *file, line.as_bytes()),
                Err(_) => return,
            },
            None => io::Write::write_all(&mut io::stdout(), line.as_bytes()),
        };
        debug_assert!(res.is_ok(), "{:?}", res);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    let message = format!(
        "{} {} {}. [{}:{}]",
        record.level(),
        record.target().bold(),
        record.args(),
        record.file().unwrap_or_default(),
        record.line().unwrap_or_default(),
    );
    let message = match record.level() {
        Level::Error => message.red(),
        Level::Warn => message.yellow(),
        Level::Info => message.normal(),
        Level::Debug => message.dimmed(),
        Level::Trace => message.cyan().dimmed(),
    };
    let utc_time: DateTime<Utc> = DateTime::from(SystemTime::now());
    let time = utc_time
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .white();
    format!("{time} {message}\n")
}

/// Initialize a new logger.
pub fn init(level: &str, file: Option<PathBuf>) -> anyhow::Result<()> {
    let file = if let Some(path) = file {
        Some(Mutex::new(File::create(path)?))
    } else {
        None
    };
    let level = Level::from_str(level).map_err(|err| anyhow::anyhow!("{err}"))?;
    let logger = Logger { level, file };

    log::set_boxed_logger(Box::new(logger)).map_err(|err| anyhow::anyhow!("{err}"))?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}

/// Initialize the logger from the `log-level` and `log-file` options.
pub fn init_with_conf(conf: &RpcClientConf) -> anyhow::Result<()> {
    init(&conf.log_level, conf.log_file.clone())
}
