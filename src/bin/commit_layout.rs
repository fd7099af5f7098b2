use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commit_layout::config::LayoutConfig;
use commit_layout::report::{
    render_layout, render_padded, render_selection, render_sweep, sorted_json,
    sweep_raw_lines, sweep_summary_json,
};
use commit_layout::{evaluate, select_best, size_padded, sweep, CommitmentStyle, Evaluator, Metric};

#[derive(Parser)]
#[command(name = "commit-layout")]
#[command(
    about = "State commitment layout helper for zk rollups, FHE stacks and soundness-focused protocols",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file overriding the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the tree shape and sizes for one configuration
    Layout {
        /// Number of leaf entries in the state tree, clamped into 1..=max_leaves
        #[arg(allow_negative_numbers = true)]
        leaves: i64,

        /// Commitment style profile (aztec, zama, soundness)
        #[arg(long)]
        style: Option<CommitmentStyle>,

        /// Tree fanout per level (2, 4, or 8)
        #[arg(long)]
        fanout: Option<u64>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Size the smallest full k-ary tree holding the leaves
    Size {
        /// Number of real leaves / state entries
        #[arg(long)]
        leaves: u64,

        /// Branching factor (k-ary tree arity)
        #[arg(long, default_value_t = 2)]
        arity: u64,

        /// Emit JSON instead of a human-readable summary
        #[arg(long)]
        json: bool,
    },

    /// Choose the fanout minimising a size metric
    Best {
        /// Number of leaves in the tree
        #[arg(long)]
        leaves: u64,

        /// Commitment style to use
        #[arg(long)]
        style: CommitmentStyle,

        /// Fanouts to test
        #[arg(long, num_args = 1..)]
        fanouts: Option<Vec<u64>>,

        /// Metric to minimise
        #[arg(long)]
        metric: Option<Metric>,
    },

    /// Sweep leaf counts and fanouts
    Sweep {
        /// Commitment style to use
        #[arg(long)]
        style: CommitmentStyle,

        /// Minimum number of leaves (inclusive)
        #[arg(long)]
        leaf_min: u64,

        /// Maximum number of leaves (inclusive)
        #[arg(long)]
        leaf_max: u64,

        /// Log2 step between leaf counts, e.g. 1024..65536 with step 2 gives 1024,4096,16384,65536
        #[arg(long)]
        step: Option<u32>,

        /// Fanouts to test
        #[arg(long, num_args = 1..)]
        fanouts: Option<Vec<u64>>,

        /// Emit a JSON summary of all rows after the table
        #[arg(long)]
        json_summary: bool,

        /// Also dump one raw JSON line per configuration
        #[arg(long)]
        raw_json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LayoutConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Command::Layout {
            leaves,
            style,
            fanout,
            json,
        } => {
            let style = style.unwrap_or(config.evaluate.style);
            let fanout = fanout.unwrap_or(config.evaluate.fanout);
            let leaves = config.evaluate.clamp_leaves(leaves);
            let report = evaluate(style, leaves, fanout)?;
            if json {
                println!("{}", sorted_json(&report)?);
            } else {
                print!("{}", render_layout(&report));
            }
        }
        Command::Size {
            leaves,
            arity,
            json,
        } => {
            let layout = size_padded(leaves, arity)?;
            if json {
                println!("{}", sorted_json(&layout)?);
            } else {
                print!("{}", render_padded(&layout));
            }
        }
        Command::Best {
            leaves,
            style,
            fanouts,
            metric,
        } => {
            let fanouts = fanouts.unwrap_or(config.select.fanouts);
            let metric = metric.unwrap_or(config.select.metric);
            let selection = select_best(&Evaluator, leaves, style, &fanouts, metric)
                .with_context(|| format!("no layout for leaves={leaves}, style={style}"))?;
            print!("{}", render_selection(&selection));
        }
        Command::Sweep {
            style,
            leaf_min,
            leaf_max,
            step,
            fanouts,
            json_summary,
            raw_json,
        } => {
            let fanouts = fanouts.unwrap_or(config.sweep.fanouts);
            let step = step.unwrap_or(config.sweep.log_step);
            let result = sweep(&Evaluator, style, leaf_min, leaf_max, step, &fanouts)?;
            print!("{}", render_sweep(&result));
            if json_summary {
                println!("{}", sweep_summary_json(&result)?);
            }
            if raw_json {
                println!("\n# Raw JSON lines (one per config):");
                for line in sweep_raw_lines(&result)? {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
