use std::path::PathBuf;

use clap::Parser;

use dys_cli::commands::session_ops::{self, ScreeningOptions};
use dys_cli::commands::ScorerPaths;
use dys_cli::trace_init::init_tracing;
use dys_session::DEFAULT_ATTEMPTS;

#[derive(Parser)]
#[command(name = "dystest", about = "Interactive writing-sample screening")]
struct Cli {
    /// Reference sentences, one per line
    #[arg(long)]
    corpus: String,
    /// Word list, one word per line
    #[arg(long)]
    words: String,
    /// Settings TOML (default: built-in)
    #[arg(long)]
    settings: Option<String>,
    /// Confusion catalog TOML (default: built-in)
    #[arg(long)]
    catalog: Option<String>,
    /// Number of scored attempts
    #[arg(long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,
    /// Directory for the JSON report
    #[arg(long, default_value = ".")]
    report_dir: String,
    /// Subject name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,
    /// Subject ID (prompted when omitted)
    #[arg(long)]
    id: Option<String>,
    /// Seed for sentence selection
    #[arg(long)]
    seed: Option<u64>,
    /// Write JSON trace logs here (requires --features trace)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let _guard = cli.log_dir.as_deref().and_then(init_tracing);

    session_ops::dystest(ScreeningOptions {
        corpus: cli.corpus,
        scorer: ScorerPaths {
            words: cli.words,
            settings: cli.settings,
            catalog: cli.catalog,
        },
        attempts: cli.attempts,
        report_dir: cli.report_dir,
        name: cli.name,
        id: cli.id,
        seed: cli.seed,
    });
}
