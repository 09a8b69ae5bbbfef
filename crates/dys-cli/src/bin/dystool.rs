use clap::{Parser, Subcommand};

use dys_cli::commands::{config_ops, score_ops, ScorerPaths};

#[derive(Parser)]
#[command(name = "dystool", about = "Writing-sample scoring tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one response against its reference sentence
    Score {
        /// Word list, one word per line
        #[arg(long)]
        words: String,
        /// Settings TOML (default: built-in)
        #[arg(long)]
        settings: Option<String>,
        /// Confusion catalog TOML (default: built-in)
        #[arg(long)]
        catalog: Option<String>,
        /// Print the full per-token breakdown as JSON
        #[arg(long)]
        explain: bool,
        /// Typed response
        response: String,
        /// Reference sentence
        reference: String,
    },
    /// Aggregate response scores into a verdict
    Aggregate {
        /// Verdict threshold (default: from settings)
        #[arg(long)]
        threshold: Option<f64>,
        /// Settings TOML to take the threshold from
        #[arg(long)]
        settings: Option<String>,
        /// Response scores
        #[arg(allow_negative_numbers = true, required = true)]
        scores: Vec<f64>,
    },
    /// Show the acceptance-gate similarity of a response
    Similarity {
        /// Similarity threshold, 0-100 (default: from settings)
        #[arg(long)]
        threshold: Option<u8>,
        /// Typed response
        response: String,
        /// Reference sentence
        reference: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the built-in confusion catalog as TOML
    CatalogExport,
    /// Validate a custom confusion catalog TOML file
    CatalogValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Score {
            words,
            settings,
            catalog,
            explain,
            response,
            reference,
        } => {
            let paths = ScorerPaths {
                words,
                settings,
                catalog,
            };
            score_ops::score(&paths, &response, &reference, explain);
        }
        Command::Aggregate {
            threshold,
            settings,
            scores,
        } => score_ops::aggregate_cmd(&scores, threshold, settings.as_deref()),
        Command::Similarity {
            threshold,
            response,
            reference,
        } => score_ops::similarity_cmd(&response, &reference, threshold),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::CatalogExport => config_ops::catalog_export(),
        Command::CatalogValidate { file } => config_ops::catalog_validate(&file),
    }
}
