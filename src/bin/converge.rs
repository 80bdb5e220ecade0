use std::env;
use std::error::Error;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use archery::print::tabulate_distribution;
use archery::series::{accumulate, Snapshot};
use archery::timed::Timed;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// number of contestants
    #[clap(short = 'n', long, default_value = "4")]
    contestants: usize,

    /// number of final turns to sum over
    #[clap(short = 'i', long, default_value = "20")]
    iterations: usize,

    /// decimal places to print
    #[clap(short = 'd', long, default_value = "10")]
    decimals: usize,

    /// print each snapshot as a JSON line instead of a table
    #[clap(long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.contestants < 2 {
            bail!("at least 2 contestants are required");
        }
        if self.iterations == 0 {
            bail!("at least one iteration is required");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
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

    let snapshots = Timed::result(|| -> Result<Vec<Snapshot>, Box<dyn Error>> {
        let snapshots = accumulate(args.contestants)?
            .take(args.iterations)
            .collect::<Result<_, _>>()?;
        Ok(snapshots)
    })?;

    if args.json {
        for snapshot in &snapshots.value {
            println!("{}", serde_json::to_string(snapshot)?);
        }
    } else {
        let table = tabulate_distribution(args.contestants, &snapshots.value, args.decimals);
        info!("\n{}", Console::default().render(&table));
    }
    if let Some(last) = snapshots.value.last() {
        info!(
            "summed {} terms for {} contestants in {:.3}s; total probability: {:.12}",
            last.final_turn,
            args.contestants,
            snapshots.elapsed_secs(),
            last.total()
        );
    }
    Ok(())
}
