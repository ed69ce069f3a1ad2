// src/main.rs
mod kubeconfig;
mod types;
mod utils;

use clap::Parser;
use kubeconfig::{KubeConfig, KubeConfigSplitter};
use std::process::ExitCode;
use types::Args;
use utils::logging::{ConsoleLogger, FileLogger, Logger, MultiLogger};
use utils::Error;

fn build_logger(args: &Args) -> std::io::Result<Box<dyn Logger>> {
    let console: Box<dyn Logger> = Box::new(ConsoleLogger::new(args.debug));

    match &args.log_file {
        Some(log_file) => {
            let file = FileLogger::new(&kubeconfig::expand_path(log_file), args.debug)?;
            Ok(Box::new(MultiLogger::new(vec![console, Box::new(file)])))
        }
        None => Ok(console),
    }
}

/// Loads the input kubeconfig and writes one file per context. Returns the
/// number of files written.
fn run(args: &Args, logger: &mut dyn Logger) -> Result<usize, Error> {
    let config_path = args.config_path();
    logger.debug_log(&format!("Loading kubeconfig from {}", config_path.display()));

    let config = KubeConfig::load_from_file(&config_path)?;
    logger.debug_log(&format!(
        "Found {} cluster(s), {} user(s), {} context(s)",
        config.clusters.len(),
        config.credentials.len(),
        config.contexts.len()
    ));

    let written = KubeConfigSplitter::new(logger, args.output_dir())
        .with_prefix(args.prefix.clone())
        .with_current_context(args.set_current_context)
        .split_all(&config)?;

    if written.is_empty() {
        logger.log("No contexts found; nothing written");
    }
    Ok(written.len())
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    let mut logger = match build_logger(&args) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to open log file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args, logger.as_mut()) {
        Ok(count) => {
            logger.debug_log(&format!("Split complete: {} file(s)", count));
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.log(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
