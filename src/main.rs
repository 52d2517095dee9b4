// src/main.rs
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use register_extractor::extractors::section::{SectionLocator, DEBUG_HEADING_PATTERNS};
use register_extractor::search::{parse_search_results, select_hit};
use register_extractor::storage::StorageManager;
use register_extractor::utils::{logging, text_debug};
use register_extractor::{source, AppError, ExcerptParser, ExcerptRecord, ExtractorConfig, RegisterNameDecomposer};

/// Command Line Interface for Handelsregister excerpt extraction
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug mode - verbose logging and annotated excerpt copies
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract name, address and managers from an excerpt (.txt or .pdf)
    Parse(ParseArgs),
    /// Pick a company from a saved search-result page
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Excerpt file
    input: PathBuf,

    /// City of the company, used for the artifact folder name
    #[arg(short, long, default_value = "")]
    city: String,

    /// Output directory for the extracted record (optional)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Also list Prokura signatories
    #[arg(long)]
    prokura: bool,

    /// Name the artifact folder "<name>-<city>" verbatim
    #[arg(long)]
    full_folder_name: bool,

    /// Add decomposed manager names to the output
    #[arg(long)]
    split_names: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Saved search-result HTML page
    input: PathBuf,

    /// Company name (substring, case-insensitive)
    #[arg(short, long)]
    name: String,

    /// City the company must be seated in
    #[arg(short, long)]
    city: Option<String>,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // 1. Setup Logging (reads RUST_LOG env var)
    logging::setup_logging(cli.debug);
    tracing::info!("Starting processing for args: {:?}", cli);

    match cli.command {
        Command::Parse(args) => run_parse(args, cli.debug),
        Command::Search(args) => run_search(args),
    }
}

fn run_parse(args: ParseArgs, debug: bool) -> Result<(), AppError> {
    let mut config = ExtractorConfig::default().with_env_overrides();
    if args.prokura {
        config.include_prokura = true;
    }
    if args.full_folder_name {
        config.shorten_folder_names = false;
    }
    tracing::debug!("Using {:?}", config);

    let text = source::load_text(&args.input)?;
    let record = ExcerptParser::with_config(config).parse(&text);

    if record.is_empty() {
        tracing::warn!("No fields could be extracted from {}", args.input.display());
    } else {
        tracing::info!(
            "Extracted '{}' with {} managers",
            record.company_name,
            record.managers.len()
        );
    }

    if let Some(output_dir) = &args.output_dir {
        let storage = StorageManager::new(output_dir)?;
        let source_file = args
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = storage.save_record(&record, &args.city, config.shorten_folder_names, &source_file)?;

        if debug {
            if let Some(company_dir) = path.parent() {
                write_debug_copy(&text, company_dir);
            }
        }
    }

    println!("{}", render_record(&record, args.split_names)?);
    Ok(())
}

fn render_record(record: &ExcerptRecord, split_names: bool) -> Result<String, AppError> {
    if !split_names {
        return Ok(serde_json::to_string(record)?);
    }
    let mut value = serde_json::to_value(record)?;
    value["decomposed"] = serde_json::to_value(record.decomposed_managers(&RegisterNameDecomposer))?;
    Ok(serde_json::to_string(&value)?)
}

fn write_debug_copy(text: &str, company_dir: &Path) {
    let locator = SectionLocator::new();
    let mut spans = Vec::new();
    if let Some(span) = locator.management_span(text) {
        spans.push((span, "management"));
    }
    if let Some(span) = locator.prokura_span(text) {
        spans.push((span, "prokura"));
    }

    let debug_path = company_dir.join("excerpt_annotated.txt");
    if let Err(e) = text_debug::save_debug_text(text, &debug_path, &spans, DEBUG_HEADING_PATTERNS) {
        tracing::warn!("Failed to create annotated excerpt: {}", e);
    }
}

fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let html = std::fs::read_to_string(&args.input)?;
    let hits = parse_search_results(&html)?;
    tracing::info!("Found {} search hits", hits.len());

    let hit = select_hit(&hits, &args.name, args.city.as_deref()).ok_or_else(|| {
        AppError::Processing(format!(
            "No search hit matches name {:?} and city {:?}",
            args.name, args.city
        ))
    })?;

    println!("{}", serde_json::to_string(hit)?);
    Ok(())
}
