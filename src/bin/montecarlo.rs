use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use archery::file::ReadJsonFile;
use archery::mc::{simulate_parallel, Config};
use archery::print::tabulate_frequencies;
use archery::series::accumulate;
use archery::timed::Timed;

const EXACT_ITERATIONS: usize = 20;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the simulation config from
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// number of contestants
    #[clap(short = 'n', long)]
    contestants: Option<usize>,

    /// number of matches to play
    #[clap(short = 'm', long)]
    matches: Option<u64>,

    /// matches played per batch
    #[clap(short = 'b', long)]
    batch_size: Option<u64>,

    /// maximum batches in flight
    #[clap(short = 'w', long)]
    workers: Option<usize>,

    /// seed of the first batch
    #[clap(short = 's', long)]
    seed: Option<u64>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        let overrides = self.contestants.is_some()
            || self.matches.is_some()
            || self.batch_size.is_some()
            || self.workers.is_some()
            || self.seed.is_some();
        if self.config.is_some() && overrides {
            bail!("the -c flag cannot be combined with individual settings");
        }
        Ok(())
    }

    fn to_config(&self) -> anyhow::Result<Config> {
        if let Some(path) = self.config.as_ref() {
            debug!("loading config from {path:?}");
            return Ok(Config::read_json_file(path)?);
        }
        let defaults = Config::default();
        Ok(Config {
            contestants: self.contestants.unwrap_or(defaults.contestants),
            matches: self.matches.unwrap_or(defaults.matches),
            batch_size: self.batch_size.unwrap_or(defaults.batch_size),
            workers: self.workers.unwrap_or(defaults.workers),
            seed: self.seed.unwrap_or(defaults.seed),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");
    let config = args.to_config()?;
    config.validate()?;
    debug!("config: {config:?}");

    let counter = Timed::future(simulate_parallel(&config)).await?;
    info!(
        "played {} matches in {} batches in {:.3}s",
        config.matches,
        config.num_batches(),
        counter.elapsed_secs()
    );

    let exact = accumulate(config.contestants)?
        .take(EXACT_ITERATIONS)
        .last()
        .transpose()?;
    let table = tabulate_frequencies(
        &counter.value,
        config.matches,
        exact.as_ref().map(|snapshot| &snapshot.probs[..]),
    );
    info!("\n{}", Console::default().render(&table));
    Ok(())
}
