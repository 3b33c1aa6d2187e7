use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a timeline from a resolved request JSON.
    Timeline(TimelineArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input request JSON (resolved asset metadata + transcript).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Optional engine config JSON; defaults apply for absent fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
    }
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let request = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read request '{}'", args.in_path.display()))?;
    let inputs: vreel::TimelineInputs =
        serde_json::from_str(&request).context("parse request JSON")?;

    let cfg = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            serde_json::from_str(&raw).context("parse config JSON")?
        }
        None => vreel::EngineConfig::default(),
    };

    let timeline = vreel::build_timeline(&inputs, &cfg)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&timeline)?
    } else {
        serde_json::to_string(&timeline)?
    };
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write timeline '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
