use clap::Parser;
use lexicolor::{
    classifier::{ClassifierBuilder, OffsetUnit},
    config::ClassifierConfig,
    Error, LexicolorResult,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Print syntax coloring ranges of a source file as JSON", long_about = None)]
struct Cli {
    /// Source file to classify
    file: PathBuf,

    /// Path to classifier config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Unit for reported offsets: char, utf16 or byte
    #[arg(short, long)]
    offset_unit: Option<OffsetUnit>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> LexicolorResult<()> {
    let config = match &cli.config {
        Some(path) => ClassifierConfig::from_file(path)?,
        None => ClassifierConfig::default(),
    };
    info!("config loaded.");
    debug!("config categories: {:?}", config.categories);

    let mut builder = ClassifierBuilder::new(config);
    if let Some(unit) = cli.offset_unit {
        builder = builder.offset_unit(unit);
    }
    let classifier = builder.build()?;

    let bytes = std::fs::read(&cli.file)
        .map_err(|e| Error::config(format!("Failed to read source file: {}", e)))?;
    debug!("classifying {:?} ({} bytes)", cli.file, bytes.len());

    let result = classifier.classify_bytes(&bytes)?;
    info!("{} ranges classified.", result.len());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .map_err(|e| Error::config(format!("Failed to serialize result: {}", e)))?;
    println!("{}", json);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
