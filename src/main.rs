use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use daoshield::config_loader;
use daoshield::emitter::{write_file_list, ReportEmitter, DEFAULT_OUTPUT_DIR};

/// Figure and summary table generation for Li-MSD experiments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory for figures and the summary table
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Optional YAML file overriding the chart style
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    info!("Output directory: {:?}", args.output);
    let style = config_loader::resolve_style(args.style.as_deref())?;

    println!("{}", "=".repeat(60));
    println!("DAO SHIELD (Li-MSD) - Analysis & Graph Generation");
    println!("{}", "=".repeat(60));
    println!();

    // Figures use the illustrative reference datasets, not parsed logs
    println!("Generating graphs...");
    let emitter = ReportEmitter::new(style, &args.output);
    let written = emitter.emit_all()?;

    println!("\n{}", "=".repeat(60));
    println!("All graphs generated successfully!");
    println!("{}", "=".repeat(60));
    write_file_list(&mut io::stdout().lock(), &written)?;

    println!("To analyze your actual log files:");
    println!("  1. Save Cooja logs to the 'logs/' directory");
    println!("  2. Run: log-analyzer compare");

    Ok(())
}
