// main.rs

use clap::Parser;
use std::io;
use textecho::cli::{self, Cli};
use textecho::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(logging::level_for(cli.verbose));

    match cli::run(cli, &mut io::stdout(), &mut io::stderr()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
