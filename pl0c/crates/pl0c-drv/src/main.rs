//! pl0c - PL/0 tokenizer
//!
//! Usage: `pl0c <file>`

use clap::error::ErrorKind;
use clap::Parser;
use pl0c_drv::{init_logging, run, Cli, Config, DriverError, USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if let Err(e) = err.print() {
                eprintln!("{}", DriverError::from(e).diagnostic());
                std::process::exit(1);
            }
            std::process::exit(0);
        },
        Err(_) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        },
    };
    let config = Config::from(cli);

    if let Err(e) = init_logging(config.verbose, config.no_color).and_then(|()| run(&config)) {
        eprintln!("{}", e.diagnostic());
        std::process::exit(1);
    }
}
