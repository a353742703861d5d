//! Cooja log analysis CLI for Li-MSD experiments.
//!
//! Counts data, DAO, blacklist and attack events in simulator logs and
//! compares baseline, attack and defense runs.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};

use daoshield::analysis::{
    self,
    report::print_logs,
    scenarios::{ScenarioLogs, ATTACK_LOG, BASELINE_LOG, DEFENSE_LOG},
    MeasuredReport,
};
use daoshield::emitter::print_table;

#[derive(Parser)]
#[command(name = "log-analyzer")]
#[command(about = "Event counting for Li-MSD Cooja simulation logs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more log files independently
    Analyze {
        /// Log files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also write the metrics as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Compare baseline, under-attack and with-defense runs
    Compare {
        /// Log of the run without attacker
        #[arg(long, default_value = BASELINE_LOG)]
        baseline: PathBuf,

        /// Log of the attacked run without mitigation
        #[arg(long, default_value = ATTACK_LOG)]
        attack: PathBuf,

        /// Log of the attacked run with Li-MSD enabled
        #[arg(long, default_value = DEFENSE_LOG)]
        defense: PathBuf,

        /// Output directory for the measured summary
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match cli.command {
        Commands::Analyze { files, json } => {
            let logs = analysis::analyze_log_files(&files)?;
            print_logs(&logs);

            if let Some(json_path) = json {
                analysis::generate_json_report(&MeasuredReport::new(logs), &json_path)?;
            }
        }
        Commands::Compare {
            baseline,
            attack,
            defense,
            output,
        } => {
            let comparison = ScenarioLogs {
                baseline,
                under_attack: attack,
                with_defense: defense,
            }
            .analyze()?;

            let table = comparison.summary_table();
            print_table(&table);

            fs::create_dir_all(&output)
                .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

            let table_path = output.join("measured_summary.txt");
            fs::write(&table_path, table.to_string())
                .with_context(|| format!("Failed to write {}", table_path.display()))?;
            println!("Saved: {}", table_path.display());

            let json_path = output.join("measured_metrics.json");
            analysis::generate_json_report(&MeasuredReport::new(comparison.into_logs()), &json_path)?;
            println!("Saved: {}", json_path.display());
        }
    }

    Ok(())
}
