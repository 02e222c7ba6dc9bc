use colored::Colorize;
use ip_helper::cmd;
use ip_helper::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "ERROR".on_red());
            return ExitCode::from(2);
        }
    };
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cmd::run(&args, &config) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("command failed: {e}");
            eprintln!("{} {e}", "ERROR".on_red());
            ExitCode::FAILURE
        }
    }
}
