pub mod config;
pub mod error;
pub mod output;
pub mod sequence;

pub use config::{Bound, Config, DEFAULT_BOUND};
pub use error::Error;
pub use output::{OutputSink, WriterSink};
pub use sequence::{generate, Line, SequenceGenerator};

use tracing::info;

pub type Result<T> = std::result::Result<T, Error>;

/// Generate the sequence for `config` and hand it to `sink` in one write.
pub fn run<S: OutputSink>(config: &Config, sink: &mut S) -> Result<()> {
    info!("Generating sequence up to {}", config.bound);

    let text = SequenceGenerator::new(config.bound).generate();
    sink.write_sequence(&text)
}
