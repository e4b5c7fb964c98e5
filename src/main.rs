use std::error::Error;
use std::path::Path;
use std::process::exit;

use tracing::{Level, debug, warn};

use pompilot::cli::{self, Cli};
use pompilot::config::Config;
use pompilot::options::Options;
use pompilot::PomError;

fn main() {
    let cli = Cli::from_tokens(std::env::args_os().skip(1)).unwrap_or_else(|err| err.exit());
    let options = Options::from_args(&cli.args);

    if cli::wants_usage(&cli.args, &options) {
        print!("{}", cli::USAGE);
        exit(1);
    }

    let debug = options.get_bool("debug", false);

    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    debug!("Parsed options: {:?}", options);

    let result = Config::resolve(&options)
        .and_then(|config| cli::run(&options, &config, Path::new(".")));

    if let Err(err) = result {
        report(&err, debug);
        exit(1);
    }

    for name in options.unused_names() {
        warn!("Ignoring unknown option --{}", name);
    }
}

fn report(err: &PomError, debug: bool) {
    eprintln!("Error: {}", err);
    if !debug {
        return;
    }

    eprintln!("Trace: ");
    eprintln!("{:#?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("Caused by: {}", cause);
        source = cause.source();
    }
}
