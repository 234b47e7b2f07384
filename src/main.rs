mod conga_command;
mod conga_line;

use clap::Parser;

use crate::conga_line::CongaLine;

/// Contains information parsed from the command-line invocation of conga-line. The Clap macros
/// provide a fancy way to automatically construct a command-line argument parser.
#[derive(Parser, Debug)]
#[command(about = "A conga line simulator, one dancer linked to the next")]
struct CmdOptions {
    /// Name of the dancer who starts the line
    #[arg(short, long, default_value = "Fred")]
    first: String,
    /// Name of the dancer who joins in behind them
    #[arg(short, long, default_value = "Ginger")]
    second: String,
    /// Start from a line saved earlier with the save command
    #[arg(short, long)]
    load: Option<String>,
}

fn main() {
    // Initialize the logging library. You can print log messages using the `log` macros:
    // https://docs.rs/log/0.4.8/log/
    if let Err(_) = std::env::var("RUST_LOG") {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    // Parse the command line arguments passed to this program
    let options = CmdOptions::parse();
    let mut conga = CongaLine::new(&options.first, &options.second);
    if let Some(file) = &options.load {
        if let Err(err) = conga.load(file) {
            log::error!("Could not load the line from {}: {}", file, err);
            std::process::exit(1);
        }
        log::info!("Loaded the starting line from {}", file);
    }
    conga.run();
}
