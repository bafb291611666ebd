mod bench;
mod demos;
mod logger;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use bench::{Bench, BenchConfig, DEFAULT_SEED};
use demos::Demo;

#[derive(Parser)]
#[command(
    name = "catalogue",
    version,
    about = "Run, check and time the textbook algorithm catalogue"
)]
struct Cli {
    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every demo and bench name
    List,

    /// Print the worked examples of one unit (or `all`) and check them
    Demo {
        /// Unit to demonstrate
        name: Demo,
    },

    /// Time one algorithm variant on generated input
    Bench {
        /// Variant to time
        name: Bench,

        /// Input length (elements, bytes or pairs; bench-specific default)
        #[arg(long)]
        len: Option<usize>,

        /// Iterations (bench-specific default)
        #[arg(long)]
        iters: Option<usize>,

        /// Xorshift seed for the generated input
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Check the variant against a reference before timing it
        #[arg(long)]
        verify: bool,

        /// Skip the throughput summary
        #[arg(long)]
        no_report: bool,
    },
}

/// The command-line spelling of a `ValueEnum` variant.
fn value_name<T: ValueEnum>(value: &T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_owned())
        .unwrap_or_default()
}

fn list() {
    println!("demos:");
    for demo in Demo::value_variants() {
        println!("  {}", value_name(demo));
    }
    println!("benches:");
    for bench in Bench::value_variants() {
        println!("  {}", value_name(bench));
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let code = match cli.command {
        Commands::List => {
            list();
            0
        }
        Commands::Demo { name } => {
            let failures = demos::run(name);
            if failures > 0 {
                tracing::error!(failures, "demo outputs did not match their expected values");
                1
            } else {
                tracing::info!(demo = %value_name(&name), "all demo outputs matched");
                0
            }
        }
        Commands::Bench {
            name,
            len,
            iters,
            seed,
            verify,
            no_report,
        } => {
            if verify {
                if let Err(err) = bench::verify(name) {
                    tracing::error!(bench = %value_name(&name), %err, "verification failed");
                    process::exit(1);
                }
                tracing::info!(bench = %value_name(&name), "verification passed");
            }
            let config = BenchConfig {
                bench: name,
                len: len.unwrap_or_else(|| name.default_len()),
                iters: iters.unwrap_or_else(|| name.default_iters()),
                seed,
                report: !no_report,
            };
            tracing::debug!(
                len = config.len,
                iters = config.iters,
                seed = config.seed,
                "starting bench"
            );
            bench::run(config);
            0
        }
    };
    process::exit(code);
}
