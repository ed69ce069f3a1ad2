use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use chrono::Local;

pub trait Logger {
    fn log(&mut self, message: &str);
    fn debug_log(&mut self, message: &str);
}

fn format_line(message: &str) -> String {
    format!("{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
}

/// Writes timestamped lines to stderr, keeping stdout free for callers.
#[derive(Debug)]
pub struct ConsoleLogger {
    debug: bool,
}

impl ConsoleLogger {
    pub fn new(debug: bool) -> Self {
        ConsoleLogger { debug }
    }
}

impl Logger for ConsoleLogger {
    fn log(&mut self, message: &str) {
        eprintln!("{}", format_line(message));
    }

    fn debug_log(&mut self, message: &str) {
        if self.debug {
            eprintln!("{}", format_line(&format!("[DEBUG] {}", message)));
        }
    }
}

#[derive(Debug)]
pub struct FileLogger {
    log_file: PathBuf,
    debug: bool,
}

impl FileLogger {
    pub fn new(log_file: &Path, debug: bool) -> io::Result<Self> {
        // Create log directory if it doesn't exist
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(FileLogger {
            log_file: log_file.to_path_buf(),
            debug,
        })
    }

    fn write_to_file(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;

        writeln!(file, "{}", format_line(message))
    }
}

impl Logger for FileLogger {
    fn log(&mut self, message: &str) {
        if let Err(e) = self.write_to_file(message) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    fn debug_log(&mut self, message: &str) {
        if self.debug {
            if let Err(e) = self.write_to_file(&format!("[DEBUG] {}", message)) {
                eprintln!("Failed to write debug log: {}", e);
            }
        }
    }
}

// MultiLogger allows logging to multiple destinations
pub struct MultiLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl MultiLogger {
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        MultiLogger { loggers }
    }
}

impl Logger for MultiLogger {
    fn log(&mut self, message: &str) {
        for logger in &mut self.loggers {
            logger.log(message);
        }
    }

    fn debug_log(&mut self, message: &str) {
        for logger in &mut self.loggers {
            logger.debug_log(message);
        }
    }
}
