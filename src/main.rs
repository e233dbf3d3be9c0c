use clap::Parser;
use fizzbuzz::{Bound, Config, Result, WriterSink};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fizzbuzz")]
#[command(about = "Print the FizzBuzz sequence", version, long_about = None)]
struct Cli {
    /// Last number of the sequence (inclusive)
    #[arg(long, default_value_t = Bound::default(), allow_negative_numbers = true)]
    bound: Bound,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { &cli.log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(cli.bound);
    fizzbuzz::run(&config, &mut WriterSink::stdout())
}
